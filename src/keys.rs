//! Turns the raw byte stream of a terminal in raw mode into key events.
//!
//! Special keys arrive as escape sequences (`ESC [ A`, `ESC [ 5 ~`, ...).
//! The source has a short read timeout, so a lone ESC is told apart from the
//! start of a sequence by the follow-up read coming back empty.

use std::io;

const ESC: u8 = 0x1b;
const DEL: u8 = 127;

pub const ENTER: u8 = b'\r';

/// Byte produced by Ctrl plus the given letter.
pub const fn ctrl_key(key: u8) -> u8 {
    key & 0x1f
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Any byte without a symbolic meaning, printable or control.
    Char(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Delete,
    PageUp,
    PageDown,
    Backspace,
    Escape,
}

/// A byte source with a per-read timeout.
pub trait ByteSource {
    /// `Ok(None)` means the timeout expired without input.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// Blocks until one full key event is available.
///
/// Timeouts before the first byte are retried; timeouts inside an escape
/// sequence resolve it to [`Key::Escape`].
pub fn read_key<S: ByteSource + ?Sized>(source: &mut S) -> io::Result<Key> {
    let byte = loop {
        if let Some(byte) = source.read_byte()? {
            break byte;
        }
    };

    let key = match byte {
        ESC => read_escape(source)?,
        DEL => Key::Backspace,
        other => Key::Char(other),
    };
    tracing::trace!(?key, "decoded key");
    Ok(key)
}

fn read_escape<S: ByteSource + ?Sized>(source: &mut S) -> io::Result<Key> {
    let Some(first) = source.read_byte()? else {
        return Ok(Key::Escape);
    };
    let Some(second) = source.read_byte()? else {
        return Ok(Key::Escape);
    };

    let key = match (first, second) {
        (b'[', digit @ b'0'..=b'9') => match source.read_byte()? {
            Some(b'~') => numeric_key(digit),
            _ => None,
        },
        (b'[', letter) => bracket_key(letter),
        (b'O', letter) => ss3_key(letter),
        _ => None,
    };
    Ok(key.unwrap_or(Key::Escape))
}

fn numeric_key(digit: u8) -> Option<Key> {
    match digit {
        b'1' | b'7' => Some(Key::Home),
        b'3' => Some(Key::Delete),
        b'4' | b'8' => Some(Key::End),
        b'5' => Some(Key::PageUp),
        b'6' => Some(Key::PageDown),
        _ => None,
    }
}

fn bracket_key(letter: u8) -> Option<Key> {
    match letter {
        b'A' => Some(Key::ArrowUp),
        b'B' => Some(Key::ArrowDown),
        b'C' => Some(Key::ArrowRight),
        b'D' => Some(Key::ArrowLeft),
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        _ => None,
    }
}

fn ss3_key(letter: u8) -> Option<Key> {
    match letter {
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        _ => None,
    }
}

/// Scripted input: `None` entries stand for a read timeout. Once the script
/// is used up every read fails with `UnexpectedEof`, so a caller waiting for
/// a key never spins forever.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedBytes {
    script: std::collections::VecDeque<Option<u8>>,
}

#[cfg(test)]
impl ScriptedBytes {
    pub(crate) fn new<I: IntoIterator<Item = Option<u8>>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Every byte arrives without a timeout in between.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().copied().map(Some))
    }

    pub(crate) fn remaining(&self) -> usize {
        self.script.len()
    }
}

#[cfg(test)]
impl ByteSource for ScriptedBytes {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        self.script
            .pop_front()
            .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
    }
}
