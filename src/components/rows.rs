use std::io;

use crossterm::{
    queue,
    terminal::{Clear, ClearType},
};

use crate::append_buffer::AppendBuffer;
use crate::editor::Viewport;
use crate::text::Document;

pub struct RowsInfo<'a> {
    pub document: &'a Document,
    pub viewport: &'a Viewport,
    /// Shown a third of the way down, only while the document is empty.
    pub banner: &'a str,
}

/// Draws one line per screen row: the visible slice of a document row, or
/// a `~` past the end of the document. Every line clears whatever the
/// previous frame left to its right.
pub fn render(ab: &mut AppendBuffer, info: RowsInfo) -> io::Result<()> {
    let vp = info.viewport;
    for y in 0..vp.screen_rows {
        let filerow = y + vp.rowoff;
        match info.document.row(filerow) {
            Some(row) => {
                let render = row.render();
                let start = vp.coloff.min(render.len());
                let end = (start + vp.screen_cols).min(render.len());
                ab.append(&render[start..end]);
            }
            None if info.document.is_empty() && y == vp.screen_rows / 3 => {
                render_banner(ab, info.banner, vp.screen_cols);
            }
            None => ab.append(b"~"),
        }
        queue!(ab, Clear(ClearType::UntilNewLine))?;
        ab.append(b"\r\n");
    }
    Ok(())
}

fn render_banner(ab: &mut AppendBuffer, banner: &str, width: usize) {
    let banner = &banner.as_bytes()[..banner.len().min(width)];
    let mut padding = (width - banner.len()) / 2;
    if padding > 0 {
        ab.append(b"~");
        padding -= 1;
    }
    ab.append(&b" ".repeat(padding));
    ab.append(banner);
}
