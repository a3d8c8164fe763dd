//! Cursor movement and editing operations on a [`Document`].
//!
//! The cursor lives in raw coordinates (`cx`, `cy`); `rx` is its render
//! column and is only refreshed by [`Editor::scroll`], right before a frame
//! is drawn. `cy == document.len()` is the "past the last line" position
//! where typing appends a new row.

pub mod viewport;

use crate::keys::Key;
use crate::text::Document;

pub use viewport::Viewport;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub cx: usize,
    pub cy: usize,
    pub rx: usize,
}

/// Cursor and viewport, saved when a prompt opens so a cancel can put
/// everything back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    cursor: Cursor,
    viewport: Viewport,
}

#[derive(Debug, Clone)]
pub struct Editor {
    pub document: Document,
    pub cursor: Cursor,
    pub viewport: Viewport,
}

impl Editor {
    pub fn new(document: Document, screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            document,
            cursor: Cursor::default(),
            viewport: Viewport::new(screen_rows, screen_cols),
        }
    }

    fn current_row_len(&self) -> usize {
        self.document.row_len(self.cursor.cy)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cursor: self.cursor,
            viewport: self.viewport,
        }
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.cursor = snapshot.cursor;
        self.viewport.rowoff = snapshot.viewport.rowoff;
        self.viewport.coloff = snapshot.viewport.coloff;
    }

    /// Refreshes `rx` and scrolls the viewport until the cursor is visible.
    pub fn scroll(&mut self) {
        self.cursor.rx = if self.cursor.cy < self.document.len() {
            self.document.cx_to_rx(self.cursor.cy, self.cursor.cx)
        } else {
            0
        };
        self.viewport.scroll_to(self.cursor.cy, self.cursor.rx);
    }

    /// Arrow key movement. Left and Right wrap across line ends; every move
    /// snaps `cx` back onto the (possibly shorter) destination row.
    pub fn move_cursor(&mut self, key: Key) {
        let numrows = self.document.len();
        let on_row = self.cursor.cy < numrows;
        match key {
            Key::ArrowLeft => {
                if self.cursor.cx > 0 {
                    self.cursor.cx -= 1;
                } else if self.cursor.cy > 0 {
                    self.cursor.cy -= 1;
                    self.cursor.cx = self.current_row_len();
                }
            }
            Key::ArrowRight if on_row => {
                if self.cursor.cx < self.current_row_len() {
                    self.cursor.cx += 1;
                } else {
                    self.cursor.cy += 1;
                    self.cursor.cx = 0;
                }
            }
            Key::ArrowUp => {
                self.cursor.cy = self.cursor.cy.saturating_sub(1);
            }
            Key::ArrowDown if self.cursor.cy < numrows => {
                self.cursor.cy += 1;
            }
            _ => {}
        }
        self.cursor.cx = self.cursor.cx.min(self.current_row_len());
    }

    /// Page Up/Down: one screen height up or down, clamped to the document
    /// (the row past the end included).
    pub fn page(&mut self, key: Key) {
        let height = self.viewport.screen_rows;
        self.cursor.cy = match key {
            Key::PageUp => self.cursor.cy.saturating_sub(height),
            Key::PageDown => (self.cursor.cy + height).min(self.document.len()),
            _ => return,
        };
        self.cursor.cx = self.cursor.cx.min(self.current_row_len());
    }

    pub fn home(&mut self) {
        self.cursor.cx = 0;
    }

    pub fn end(&mut self) {
        self.cursor.cx = self.current_row_len();
    }

    pub fn insert_char(&mut self, byte: u8) {
        if self.cursor.cy == self.document.len() {
            self.document.insert_row(self.cursor.cy, b"");
        }
        self.document.insert_char(self.cursor.cy, self.cursor.cx, byte);
        self.cursor.cx += 1;
    }

    pub fn insert_newline(&mut self) {
        if self.cursor.cy == self.document.len() {
            self.document.insert_row(self.cursor.cy, b"");
        } else {
            self.document.split_row(self.cursor.cy, self.cursor.cx);
        }
        self.cursor.cy += 1;
        self.cursor.cx = 0;
    }

    /// Backspace. At column 0 the row is joined onto the previous one; at
    /// the very start of the document, or past its end, nothing happens.
    pub fn delete_backward(&mut self) {
        if self.cursor.cy >= self.document.len() {
            return;
        }
        if self.cursor.cx == 0 && self.cursor.cy == 0 {
            return;
        }
        if self.cursor.cx > 0 {
            self.document.delete_char(self.cursor.cy, self.cursor.cx - 1);
            self.cursor.cx -= 1;
        } else if let Some(joint) = self.document.join_with_previous(self.cursor.cy) {
            self.cursor.cy -= 1;
            self.cursor.cx = joint;
        }
    }

    /// Delete key: the byte under the cursor, or the line break at its end.
    pub fn delete_forward(&mut self) {
        let before = self.cursor;
        self.move_cursor(Key::ArrowRight);
        if self.cursor != before {
            self.delete_backward();
        }
    }
}
