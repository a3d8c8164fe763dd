//! Frame accumulator: every escape sequence and text slice of one repaint is
//! appended here, then handed to the terminal in a single write so a partial
//! frame is never visible.

use std::io::{self, Write};

#[derive(Debug, Default)]
pub struct AppendBuffer {
    bytes: Vec<u8>,
}

impl AppendBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes the whole frame with one `write_all` and flushes. Consumes the
    /// buffer: a frame is never reused.
    pub fn flush_to<W: Write>(self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.bytes)?;
        out.flush()
    }
}

// Lets crossterm's `queue!` emit escape sequences straight into the frame.
impl Write for AppendBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
