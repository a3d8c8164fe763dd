//! Loading rows from disk and writing them back.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use crate::text::Row;

/// Reads `path` as one entry per line, with line terminators (`\n`, `\r`)
/// stripped. A missing file reads as no lines at all.
///
/// # Errors
///
/// Any I/O error other than the file not existing.
pub fn load(path: &Path) -> io::Result<Vec<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(split_lines(&bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Splits file content the way a line reader would: a final line without a
/// newline still counts, a trailing newline does not start another one.
pub fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n')
        .map(|line| {
            let end = line
                .iter()
                .rposition(|&b| b != b'\r')
                .map_or(0, |i| i + 1);
            line[..end].to_vec()
        })
        .collect()
}

/// Joins rows, each terminated by `\n`.
pub fn serialize(rows: &[Row]) -> Vec<u8> {
    let total = rows.iter().map(|row| row.len() + 1).sum();
    let mut blob = Vec::with_capacity(total);
    for row in rows {
        blob.extend_from_slice(row.raw());
        blob.push(b'\n');
    }
    blob
}

/// Writes `blob` to `path`, creating it with mode 0644. The file is resized
/// to the new length and then overwritten in place. Returns the number of
/// bytes written.
///
/// # Errors
///
/// The first failing open, resize or write.
pub fn save(path: &Path, blob: &[u8]) -> io::Result<usize> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .mode(0o644)
        .open(path)?;
    file.set_len(blob.len() as u64)?;
    file.write_all(blob)?;
    file.flush()?;
    Ok(blob.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_strips_newlines_and_carriage_returns() {
        assert_eq!(
            split_lines(b"one\r\ntwo\n\nthree"),
            vec![b"one".to_vec(), b"two".to_vec(), b"".to_vec(), b"three".to_vec()]
        );
    }

    #[test]
    fn trailing_newline_does_not_add_a_row() {
        assert_eq!(split_lines(b"a\n"), vec![b"a".to_vec()]);
        assert_eq!(split_lines(b"a\n\n"), vec![b"a".to_vec(), b"".to_vec()]);
        assert_eq!(split_lines(b"\n"), vec![b"".to_vec()]);
        assert!(split_lines(b"").is_empty());
    }

    #[test]
    fn serialize_terminates_every_row() {
        let rows = vec![Row::new(b"a\tb", 4), Row::new(b"", 4)];
        assert_eq!(serialize(&rows), b"a\tb\n\n");
        assert!(serialize(&[]).is_empty());
    }
}
