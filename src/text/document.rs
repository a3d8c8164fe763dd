//! The row store. Owns every [`Row`] and counts unsaved mutations.
//!
//! Index arguments that fall outside the document are ignored rather than
//! reported: they can only come from editor logic, and a no-op keeps the
//! document intact.

use super::row::{Row, DEFAULT_TAB_STOP};

#[derive(Debug, Clone)]
pub struct Document {
    rows: Vec<Row>,
    dirty: usize,
    tab_stop: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}

impl Document {
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            dirty: 0,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Builds a clean document, one row per line.
    pub fn from_lines<I, L>(lines: I, tab_stop: usize) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut doc = Self::new(tab_stop);
        doc.rows = lines
            .into_iter()
            .map(|line| Row::new(line.as_ref(), doc.tab_stop))
            .collect();
        doc
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_len(&self, at: usize) -> usize {
        self.rows.get(at).map_or(0, Row::len)
    }

    pub fn dirty(&self) -> usize {
        self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// Called after a successful load or save.
    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    pub fn cx_to_rx(&self, at: usize, cx: usize) -> usize {
        self.rows.get(at).map_or(0, |row| row.cx_to_rx(cx, self.tab_stop))
    }

    pub fn rx_to_cx(&self, at: usize, rx: usize) -> usize {
        self.rows.get(at).map_or(0, |row| row.rx_to_cx(rx, self.tab_stop))
    }

    pub fn insert_row(&mut self, at: usize, content: &[u8]) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(content, self.tab_stop));
        self.dirty += 1;
    }

    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.dirty += 1;
    }

    pub fn insert_char(&mut self, at: usize, col: usize, byte: u8) {
        let tab_stop = self.tab_stop;
        if let Some(row) = self.rows.get_mut(at) {
            row.insert(col, byte, tab_stop);
            self.dirty += 1;
        }
    }

    pub fn delete_char(&mut self, at: usize, col: usize) {
        let tab_stop = self.tab_stop;
        if let Some(row) = self.rows.get_mut(at) {
            if row.remove(col, tab_stop) {
                self.dirty += 1;
            }
        }
    }

    pub fn append_bytes(&mut self, at: usize, bytes: &[u8]) {
        let tab_stop = self.tab_stop;
        if let Some(row) = self.rows.get_mut(at) {
            row.append(bytes, tab_stop);
            self.dirty += 1;
        }
    }

    /// Breaks row `at` at column `col`. The tail becomes a new row right
    /// after it; at column 0 an empty row is inserted in front instead.
    pub fn split_row(&mut self, at: usize, col: usize) {
        if at >= self.rows.len() {
            return;
        }
        if col == 0 {
            self.insert_row(at, b"");
            return;
        }
        let tab_stop = self.tab_stop;
        let tail = self.rows[at].split_off(col, tab_stop);
        self.insert_row(at + 1, &tail);
    }

    /// Appends row `at` onto the previous row and removes it. Returns the
    /// column in the previous row where the joined content starts.
    pub fn join_with_previous(&mut self, at: usize) -> Option<usize> {
        if at == 0 || at >= self.rows.len() {
            return None;
        }
        let joint = self.rows[at - 1].len();
        let moved = self.rows.remove(at);
        self.append_bytes(at - 1, moved.raw());
        self.dirty += 1;
        Some(joint)
    }
}

/// Offset of the first occurrence of `needle` in `haystack`.
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_rows(doc: &Document) -> Vec<Vec<u8>> {
        doc.rows().iter().map(|r| r.raw().to_vec()).collect()
    }

    #[test]
    fn from_lines_is_clean() {
        let doc = Document::from_lines(["a", "b"], 4);
        assert_eq!(doc.len(), 2);
        assert!(!doc.is_dirty());
    }

    #[test]
    fn insert_row_past_end_is_ignored() {
        let mut doc = Document::from_lines(["a"], 4);
        doc.insert_row(5, b"x");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.dirty(), 0);
    }

    #[test]
    fn insert_row_shifts_following_rows() {
        let mut doc = Document::from_lines(["a", "c"], 4);
        doc.insert_row(1, b"b");
        assert_eq!(raw_rows(&doc), vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
        assert_eq!(doc.dirty(), 1);
    }

    #[test]
    fn delete_row_out_of_range_is_ignored() {
        let mut doc = Document::from_lines(["a"], 4);
        doc.delete_row(1);
        assert_eq!(doc.len(), 1);
        doc.delete_row(0);
        assert!(doc.is_empty());
        assert!(doc.is_dirty());
    }

    #[test]
    fn insert_then_delete_restores_row() {
        let mut doc = Document::from_lines(["hello"], 4);
        doc.insert_char(0, 2, b'X');
        assert_eq!(doc.row(0).unwrap().raw(), b"heXllo");
        doc.delete_char(0, 2);
        assert_eq!(doc.row(0).unwrap().raw(), b"hello");
        assert_eq!(doc.dirty(), 2);
    }

    #[test]
    fn delete_char_out_of_range_does_not_dirty() {
        let mut doc = Document::from_lines(["ab"], 4);
        doc.delete_char(0, 2);
        doc.delete_char(3, 0);
        assert_eq!(doc.dirty(), 0);
    }

    #[test]
    fn split_at_zero_inserts_empty_row_before() {
        let mut doc = Document::from_lines(["abc"], 4);
        doc.split_row(0, 0);
        assert_eq!(raw_rows(&doc), vec![b"".to_vec(), b"abc".to_vec()]);
    }

    #[test]
    fn split_then_join_restores_row() {
        let mut doc = Document::from_lines(["ab\tcd"], 4);
        doc.split_row(0, 3);
        assert_eq!(raw_rows(&doc), vec![b"ab\t".to_vec(), b"cd".to_vec()]);
        assert_eq!(doc.row(0).unwrap().render(), b"ab  ");
        assert_eq!(doc.join_with_previous(1), Some(3));
        assert_eq!(raw_rows(&doc), vec![b"ab\tcd".to_vec()]);
        assert_eq!(doc.row(0).unwrap().render(), b"ab  cd");
    }

    #[test]
    fn join_first_row_is_ignored() {
        let mut doc = Document::from_lines(["a", "b"], 4);
        assert_eq!(doc.join_with_previous(0), None);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn mark_clean_resets_counter() {
        let mut doc = Document::new(4);
        doc.insert_row(0, b"x");
        assert!(doc.is_dirty());
        doc.mark_clean();
        assert!(!doc.is_dirty());
    }

    #[test]
    fn find_bytes_locates_first_occurrence() {
        assert_eq!(find_bytes(b"fdede", b"de"), Some(1));
        assert_eq!(find_bytes(b"abc", b"de"), None);
        assert_eq!(find_bytes(b"d", b"de"), None);
    }
}
