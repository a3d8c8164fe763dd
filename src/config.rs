use std::path::PathBuf;
use std::time::Duration;

use crate::text::row::DEFAULT_TAB_STOP;
use crate::{Error, Result};

/// Consecutive Ctrl-Q presses needed to leave with unsaved changes.
pub const DEFAULT_QUIT_TIMES: u32 = 3;

/// How long a status message stays on screen.
pub const DEFAULT_MESSAGE_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tab_stop: usize,
    pub quit_times: u32,
    pub message_duration: Duration,
    /// Where diagnostics go. `None` disables logging entirely.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_stop: DEFAULT_TAB_STOP,
            quit_times: DEFAULT_QUIT_TIMES,
            message_duration: DEFAULT_MESSAGE_DURATION,
            log_file: None,
        }
    }
}

impl Config {
    /// # Errors
    ///
    /// Fails when the tab stop is zero or implausibly wide.
    pub fn validate(self) -> Result<Self> {
        if self.tab_stop == 0 || self.tab_stop > 64 {
            return Err(Error::Config(format!(
                "tab stop must be between 1 and 64, got {}",
                self.tab_stop
            )));
        }
        Ok(self)
    }
}
