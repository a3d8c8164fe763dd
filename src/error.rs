//! Errors that end the editor session. Everything recoverable (a failed save,
//! a malformed escape sequence) is handled in place and never becomes one of
//! these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{context}: {source}")]
    Termios {
        context: &'static str,
        #[source]
        source: nix::errno::Errno,
    },

    #[error("cannot install signal handlers: {0}")]
    Signal(#[source] std::io::Error),

    #[error("unable to determine the terminal window size")]
    WindowSize,

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
