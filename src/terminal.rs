//! Raw-mode terminal plumbing: termios setup and teardown, timed byte reads
//! from stdin, and window size discovery.

use std::io::{self, Read, Write};
use std::os::raw::c_int;
use std::sync::Mutex;
use std::{panic, process, thread};

use crossterm::{
    cursor, execute, queue,
    terminal::{self, Clear, ClearType},
};
use nix::sys::termios::{
    tcgetattr, tcsetattr, ControlFlags, InputFlags, LocalFlags, OutputFlags, SetArg,
    SpecialCharacterIndices, Termios,
};
use signal_hook::consts::{SIGHUP, SIGQUIT, SIGTERM};
use signal_hook::iterator::Signals;

use crate::keys::ByteSource;
use crate::{Error, Result};

/// Longest cursor position report we are willing to read.
const REPORT_MAX_LEN: usize = 32;

/// Signals that would otherwise kill the process with the terminal still raw.
const TERMINATING_SIGNALS: [c_int; 3] = [SIGTERM, SIGHUP, SIGQUIT];

/// Keeps the terminal in raw mode for as long as it is alive; dropping it
/// restores the settings that were active before.
#[derive(Debug)]
pub struct RawMode {
    original: Termios,
}

impl RawMode {
    /// Disables echo, canonical input, signal keys, `Ctrl-V`, flow control,
    /// CR/NL translation and output processing. Reads return after at most
    /// 100 ms (`VMIN = 0`, `VTIME = 1`).
    ///
    /// # Errors
    ///
    /// Fails when stdin is not a terminal or the settings cannot be applied.
    pub fn enable() -> Result<Self> {
        let original = tcgetattr(io::stdin()).map_err(|source| Error::Termios {
            context: "tcgetattr",
            source,
        })?;

        let mut raw = original.clone();
        raw.input_flags.remove(
            InputFlags::BRKINT
                | InputFlags::ICRNL
                | InputFlags::INPCK
                | InputFlags::ISTRIP
                | InputFlags::IXON,
        );
        raw.output_flags.remove(OutputFlags::OPOST);
        raw.control_flags.insert(ControlFlags::CS8);
        raw.local_flags.remove(
            LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::IEXTEN | LocalFlags::ISIG,
        );
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 0;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 1;

        tcsetattr(io::stdin(), SetArg::TCSAFLUSH, &raw).map_err(|source| Error::Termios {
            context: "tcsetattr",
            source,
        })?;
        tracing::debug!("raw mode enabled");
        Ok(Self { original })
    }

    /// Restores the terminal (and clears the screen) before any panic
    /// message is printed, then defers to the previous hook.
    pub fn install_panic_hook(&self) {
        let original = Mutex::new(self.original.clone());
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if let Ok(termios) = original.lock() {
                restore(&termios);
            }
            let _ = clear_screen(&mut io::stdout());
            previous(info);
        }));
    }

    /// Spawns a watcher thread for SIGTERM, SIGHUP and SIGQUIT. On the first
    /// one it restores the terminal, clears the screen and exits with
    /// `128 + signal`.
    ///
    /// # Errors
    ///
    /// [`Error::Signal`] when the handlers or the thread cannot be set up.
    pub fn install_signal_handlers(&self) -> Result<()> {
        let mut signals = Signals::new(TERMINATING_SIGNALS).map_err(Error::Signal)?;
        let original = self.original.clone();
        thread::Builder::new()
            .name("kilo-signals".into())
            .spawn(move || {
                if let Some(signal) = signals.forever().next() {
                    tracing::info!(signal, "terminating on signal");
                    restore(&original);
                    let _ = clear_screen(&mut io::stdout());
                    process::exit(128 + signal);
                }
            })
            .map_err(Error::Signal)?;
        tracing::debug!("signal handlers installed");
        Ok(())
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        restore(&self.original);
    }
}

fn restore(termios: &Termios) {
    if let Err(e) = tcsetattr(io::stdin(), SetArg::TCSAFLUSH, termios) {
        tracing::error!("failed to restore terminal mode: {e}");
    }
}

/// Stdin as a [`ByteSource`]. Relies on the read timeout set by [`RawMode`].
#[derive(Debug)]
pub struct TerminalInput {
    stdin: io::Stdin,
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalInput {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl ByteSource for TerminalInput {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.stdin.read(&mut byte) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(byte[0])),
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Terminal size as `(rows, cols)`.
///
/// Asks the kernel first; when that fails or reports zero columns, falls
/// back to moving the cursor to the far corner and asking the terminal
/// where it ended up.
///
/// # Errors
///
/// [`Error::WindowSize`] when neither method yields a size.
pub fn window_size<S, W>(input: &mut S, out: &mut W) -> Result<(usize, usize)>
where
    S: ByteSource + ?Sized,
    W: Write,
{
    match terminal::size() {
        Ok((cols, rows)) if cols > 0 => Ok((usize::from(rows), usize::from(cols))),
        other => {
            tracing::debug!(?other, "window size ioctl unusable, querying cursor position");
            query_window_size(input, out)
        }
    }
}

/// The `ESC [ 6 n` fallback of [`window_size`].
///
/// # Errors
///
/// I/O errors while talking to the terminal, or [`Error::WindowSize`] when
/// the reply is missing or malformed.
pub fn query_window_size<S, W>(input: &mut S, out: &mut W) -> Result<(usize, usize)>
where
    S: ByteSource + ?Sized,
    W: Write,
{
    queue!(out, cursor::MoveRight(999), cursor::MoveDown(999))?;
    out.write_all(b"\x1b[6n")?;
    out.flush()?;

    let mut report = Vec::with_capacity(REPORT_MAX_LEN);
    while report.len() < REPORT_MAX_LEN {
        match input.read_byte()? {
            Some(b'R') | None => break,
            Some(byte) => report.push(byte),
        }
    }
    parse_cursor_report(&report).ok_or(Error::WindowSize)
}

/// Parses `ESC [ rows ; cols` (the terminating `R` is optional).
pub fn parse_cursor_report(report: &[u8]) -> Option<(usize, usize)> {
    let body = report.strip_prefix(b"\x1b[")?;
    let body = body.strip_suffix(b"R").unwrap_or(body);
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    Some((rows.parse().ok()?, cols.parse().ok()?))
}

/// Full clear plus cursor home. Only used on the way out.
///
/// # Errors
///
/// Propagates write failures.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))
}
