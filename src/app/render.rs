//! Frame assembly: the whole screen goes into one buffer, written at once.

use super::*;

use std::io::Write;

use crossterm::{cursor, queue};

use crate::append_buffer::AppendBuffer;
use crate::components::rows::{self, RowsInfo};
use crate::components::status::{self, StatusInfo};

fn banner() -> String {
    format!("Kilo editor -- version {}", env!("CARGO_PKG_VERSION"))
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

impl App {
    /// Scrolls the viewport to the cursor and builds the frame shown at
    /// `now`: hidden cursor, text rows, status bar, message bar, cursor
    /// placement, visible cursor.
    pub fn render(&mut self, now: Instant) -> io::Result<AppendBuffer> {
        self.editor.scroll();

        let mut ab = AppendBuffer::new();
        queue!(ab, cursor::Hide, cursor::MoveTo(0, 0))?;

        let banner = banner();
        rows::render(
            &mut ab,
            RowsInfo {
                document: &self.editor.document,
                viewport: &self.editor.viewport,
                banner: &banner,
            },
        )?;

        let filename = self.filename.as_ref().map(|p| p.to_string_lossy());
        status::render(
            &mut ab,
            StatusInfo {
                filename: filename.as_deref(),
                line: self.editor.cursor.cy + 1,
                total_lines: self.editor.document.len(),
                modified: self.editor.document.is_dirty(),
                width: self.editor.viewport.screen_cols,
            },
        )?;

        let message = self.visible_message(now);
        status::render_message(&mut ab, message.as_deref(), self.editor.viewport.screen_cols)?;

        let cursor = self.editor.cursor;
        let viewport = self.editor.viewport;
        queue!(
            ab,
            cursor::MoveTo(
                to_u16(cursor.rx - viewport.coloff),
                to_u16(cursor.cy - viewport.rowoff)
            ),
            cursor::Show
        )?;
        Ok(ab)
    }

    /// Renders a frame and writes it to `out` in a single write.
    ///
    /// # Errors
    ///
    /// Propagates the write failure; the terminal is then unusable.
    pub fn refresh_screen<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.render(Instant::now())?.flush_to(out)
    }
}
