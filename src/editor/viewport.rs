/// The visible window onto the document, in render coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rowoff: usize,
    pub coloff: usize,
    pub screen_rows: usize,
    pub screen_cols: usize,
}

impl Viewport {
    pub fn new(screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            rowoff: 0,
            coloff: 0,
            screen_rows: screen_rows.max(1),
            screen_cols: screen_cols.max(1),
        }
    }

    pub fn resize(&mut self, screen_rows: usize, screen_cols: usize) {
        self.screen_rows = screen_rows.max(1);
        self.screen_cols = screen_cols.max(1);
    }

    /// Moves the offsets just far enough for `(row, rx)` to be visible.
    pub fn scroll_to(&mut self, row: usize, rx: usize) {
        if row < self.rowoff {
            self.rowoff = row;
        }
        if row >= self.rowoff + self.screen_rows {
            self.rowoff = row + 1 - self.screen_rows;
        }
        if rx < self.coloff {
            self.coloff = rx;
        }
        if rx >= self.coloff + self.screen_cols {
            self.coloff = rx + 1 - self.screen_cols;
        }
    }

    pub fn contains(&self, row: usize, rx: usize) -> bool {
        (self.rowoff..self.rowoff + self.screen_rows).contains(&row)
            && (self.coloff..self.coloff + self.screen_cols).contains(&rx)
    }
}
