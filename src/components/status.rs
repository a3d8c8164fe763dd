use std::io;

use crossterm::{
    queue,
    style::{Attribute, SetAttribute},
    terminal::{Clear, ClearType},
};

use crate::append_buffer::AppendBuffer;

/// The filename is cut to this many bytes in the status bar.
const FILENAME_MAX_BYTES: usize = 20;

pub struct StatusInfo<'a> {
    pub filename: Option<&'a str>,
    /// 1-based line of the cursor.
    pub line: usize,
    pub total_lines: usize,
    pub modified: bool,
    pub width: usize,
}

/// Inverse-video bar: filename, line count and modified flag on the left,
/// `line/total` flush right when it fits.
pub fn render(ab: &mut AppendBuffer, info: StatusInfo) -> io::Result<()> {
    queue!(ab, SetAttribute(Attribute::Reverse))?;

    let name = info.filename.unwrap_or("[No Name]").as_bytes();
    let mut left = name[..name.len().min(FILENAME_MAX_BYTES)].to_vec();
    left.extend_from_slice(
        format!(
            " - {} lines {}",
            info.total_lines,
            if info.modified { "(modified)" } else { "" }
        )
        .as_bytes(),
    );
    let right = format!("{}/{}", info.line, info.total_lines);

    let mut len = left.len().min(info.width);
    ab.append(&left[..len]);
    while len < info.width {
        if info.width - len == right.len() {
            ab.append(right.as_bytes());
            break;
        }
        ab.append(b" ");
        len += 1;
    }

    queue!(ab, SetAttribute(Attribute::Reset))?;
    ab.append(b"\r\n");
    Ok(())
}

/// Bottom line: the status message, if any, cut to the screen width.
pub fn render_message(ab: &mut AppendBuffer, message: Option<&str>, width: usize) -> io::Result<()> {
    queue!(ab, Clear(ClearType::UntilNewLine))?;
    if let Some(message) = message {
        let bytes = message.as_bytes();
        ab.append(&bytes[..bytes.len().min(width)]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(info: StatusInfo) -> String {
        let mut ab = AppendBuffer::new();
        render(&mut ab, info).unwrap();
        String::from_utf8(ab.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn right_status_is_flush_right() {
        let out = bar(StatusInfo {
            filename: Some("notes.txt"),
            line: 2,
            total_lines: 10,
            modified: true,
            width: 40,
        });
        let body = out
            .strip_prefix("\x1b[7m")
            .and_then(|s| s.strip_suffix("\x1b[0m\r\n"))
            .unwrap();
        assert_eq!(body.len(), 40);
        assert!(body.starts_with("notes.txt - 10 lines (modified)"));
        assert!(body.ends_with("2/10"));
    }

    #[test]
    fn placeholder_and_truncated_filename() {
        let out = bar(StatusInfo {
            filename: None,
            line: 1,
            total_lines: 0,
            modified: false,
            width: 80,
        });
        assert!(out.contains("[No Name] - 0 lines"));

        let out = bar(StatusInfo {
            filename: Some("a-very-long-file-name-indeed.txt"),
            line: 1,
            total_lines: 0,
            modified: false,
            width: 80,
        });
        assert!(out.contains("a-very-long-file-nam - 0 lines"));
    }

    #[test]
    fn filename_is_cut_by_bytes_not_chars() {
        let out = bar(StatusInfo {
            filename: Some("\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}.txt"),
            line: 1,
            total_lines: 1,
            modified: false,
            width: 80,
        });
        let twenty_bytes = "\u{e9}".repeat(10);
        assert!(out.contains(&format!("\x1b[7m{twenty_bytes} - 1 lines")), "{out:?}");
    }

    #[test]
    fn narrow_screen_drops_right_status() {
        let out = bar(StatusInfo {
            filename: Some("f"),
            line: 1,
            total_lines: 1,
            modified: false,
            width: 5,
        });
        assert_eq!(out, "\x1b[7mf - 1\x1b[0m\r\n");
    }

    #[test]
    fn message_is_cut_to_width() {
        let mut ab = AppendBuffer::new();
        render_message(&mut ab, Some("hello world"), 5).unwrap();
        assert_eq!(ab.as_bytes(), b"\x1b[Khello");
    }
}
