//! Shared helpers for the integration tests.

use std::collections::VecDeque;
use std::io;

use kilo::keys::ByteSource;

/// Terminal input replayed from a script. `None` entries stand for a read
/// timeout; a used-up script reports `UnexpectedEof`.
#[derive(Debug, Default)]
pub struct ScriptedBytes {
    script: VecDeque<Option<u8>>,
}

impl ScriptedBytes {
    pub fn new<I: IntoIterator<Item = Option<u8>>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// The bytes arrive back to back, followed by one read timeout so a
    /// trailing ESC resolves the way it does on a real terminal.
    pub fn typed(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().copied().map(Some).chain([None]))
    }
}

impl ByteSource for ScriptedBytes {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        self.script
            .pop_front()
            .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
    }
}
