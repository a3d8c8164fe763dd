//! A single line of text: the raw bytes as stored on disk plus the
//! tab-expanded form that is drawn on screen.

/// Tab stop used when nothing else is configured.
pub const DEFAULT_TAB_STOP: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    raw: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    pub fn new(raw: &[u8], tab_stop: usize) -> Self {
        let mut row = Self {
            raw: raw.to_vec(),
            render: Vec::new(),
        };
        row.update(tab_stop);
        row
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn render(&self) -> &[u8] {
        &self.render
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Render column of raw column `cx`.
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        self.raw
            .iter()
            .take(cx)
            .fold(0, |rx, &byte| advance(rx, byte, tab_stop))
    }

    /// Raw column under render column `rx`. A column inside a tab maps to the
    /// tab itself; anything past the end maps to the row length.
    pub fn rx_to_cx(&self, rx: usize, tab_stop: usize) -> usize {
        let mut cur_rx = 0;
        for (cx, &byte) in self.raw.iter().enumerate() {
            cur_rx = advance(cur_rx, byte, tab_stop);
            if cur_rx > rx {
                return cx;
            }
        }
        self.raw.len()
    }

    pub(crate) fn insert(&mut self, at: usize, byte: u8, tab_stop: usize) {
        let at = at.min(self.raw.len());
        self.raw.insert(at, byte);
        self.update(tab_stop);
    }

    /// Returns false when `at` is out of range and nothing changed.
    pub(crate) fn remove(&mut self, at: usize, tab_stop: usize) -> bool {
        if at >= self.raw.len() {
            return false;
        }
        self.raw.remove(at);
        self.update(tab_stop);
        true
    }

    pub(crate) fn append(&mut self, bytes: &[u8], tab_stop: usize) {
        self.raw.extend_from_slice(bytes);
        self.update(tab_stop);
    }

    /// Cuts the row at `at` and returns the tail.
    pub(crate) fn split_off(&mut self, at: usize, tab_stop: usize) -> Vec<u8> {
        let tail = self.raw.split_off(at.min(self.raw.len()));
        self.update(tab_stop);
        tail
    }

    fn update(&mut self, tab_stop: usize) {
        self.render = expand_tabs(&self.raw, tab_stop);
    }
}

fn advance(rx: usize, byte: u8, tab_stop: usize) -> usize {
    if byte == b'\t' {
        rx + tab_stop - (rx % tab_stop)
    } else {
        rx + 1
    }
}

/// Replaces every tab with spaces up to the next multiple of `tab_stop`
/// (always at least one space). Other bytes are copied through.
pub fn expand_tabs(raw: &[u8], tab_stop: usize) -> Vec<u8> {
    let tabs = raw.iter().filter(|&&b| b == b'\t').count();
    let mut render = Vec::with_capacity(raw.len() + tabs * (tab_stop - 1));
    for &byte in raw {
        if byte == b'\t' {
            render.push(b' ');
            while render.len() % tab_stop != 0 {
                render.push(b' ');
            }
        } else {
            render.push(byte);
        }
    }
    render
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAB: usize = DEFAULT_TAB_STOP;

    #[test]
    fn tab_expands_to_next_stop() {
        let row = Row::new(b"ab\tcd", TAB);
        assert_eq!(row.render(), b"ab  cd");
    }

    #[test]
    fn tab_on_a_stop_still_takes_a_full_width() {
        let row = Row::new(b"abcd\te", TAB);
        assert_eq!(row.render(), b"abcd    e");
        let row = Row::new(b"\t", TAB);
        assert_eq!(row.render(), b"    ");
    }

    #[test]
    fn render_without_tabs_is_raw() {
        let row = Row::new(b"plain text", TAB);
        assert_eq!(row.render(), row.raw());
    }

    #[test]
    fn cx_to_rx_counts_tab_width() {
        let row = Row::new(b"a\tb", TAB);
        assert_eq!(row.cx_to_rx(0, TAB), 0);
        assert_eq!(row.cx_to_rx(1, TAB), 1);
        assert_eq!(row.cx_to_rx(2, TAB), 4);
        assert_eq!(row.cx_to_rx(3, TAB), 5);
    }

    #[test]
    fn rx_inside_a_tab_maps_to_the_tab() {
        let row = Row::new(b"a\tb", TAB);
        assert_eq!(row.rx_to_cx(2, TAB), 1);
        assert_eq!(row.rx_to_cx(3, TAB), 1);
        assert_eq!(row.rx_to_cx(4, TAB), 2);
    }

    #[test]
    fn rx_past_the_end_clamps_to_length() {
        let row = Row::new(b"a\tb", TAB);
        assert_eq!(row.rx_to_cx(50, TAB), 3);
        assert_eq!(Row::new(b"", TAB).rx_to_cx(3, TAB), 0);
    }

    #[test]
    fn insert_clamps_column_and_rerenders() {
        let mut row = Row::new(b"ab", TAB);
        row.insert(99, b'\t', TAB);
        assert_eq!(row.raw(), b"ab\t");
        assert_eq!(row.render(), b"ab  ");
    }

    #[test]
    fn remove_out_of_range_is_a_noop() {
        let mut row = Row::new(b"ab", TAB);
        assert!(!row.remove(2, TAB));
        assert_eq!(row.raw(), b"ab");
    }

    #[test]
    fn split_off_keeps_head_and_returns_tail() {
        let mut row = Row::new(b"he\tllo", TAB);
        let tail = row.split_off(2, TAB);
        assert_eq!(row.raw(), b"he");
        assert_eq!(row.render(), b"he");
        assert_eq!(tail, b"\tllo");
    }

    #[test]
    fn other_tab_stops_are_respected() {
        let row = Row::new(b"a\tb", 8);
        assert_eq!(row.render(), b"a       b");
        assert_eq!(row.cx_to_rx(2, 8), 8);
    }
}
