//! Diagnostics go to a file: the terminal itself is the editing surface, so
//! nothing may ever be printed to it.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives (`info` by default).
pub const LOG_ENV: &str = "KILO_LOG";

/// Installs the global subscriber writing to `path`. Without a path no
/// subscriber is installed and every `tracing` macro is a no-op.
///
/// # Errors
///
/// Returns the error from opening the log file.
pub fn init(path: Option<&Path>) -> std::io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
