use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::Config;
use crate::editor::Editor;
use crate::file_io;
use crate::keys::{ctrl_key, Key, ENTER};
use crate::text::Document;

pub use prompt::{PromptCallback, PromptPurpose};
pub use search::IncrementalSearch;

use prompt::Prompt;

/// Shown on startup.
pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

/// Rows taken by the status bar and the message bar.
const BAR_ROWS: usize = 2;

/// Who currently receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Editing,
    Prompting,
}

pub struct App {
    // --- Core state ---
    pub editor: Editor,
    pub filename: Option<PathBuf>,
    pub should_quit: bool,
    config: Config,

    // --- Modal prompt (save as, search) ---
    prompt: Option<Prompt>,

    // --- Status bar ---
    pub status_message: String,
    pub status_time: Option<Instant>,

    // --- Quit confirmation ---
    /// Ctrl-Q presses still needed while the document is dirty.
    quit_times: u32,
}

impl App {
    /// `screen_rows` and `screen_cols` are the full terminal size; two rows
    /// are kept for the status and message bars.
    pub fn new(config: Config, screen_rows: usize, screen_cols: usize) -> Self {
        let document = Document::new(config.tab_stop);
        Self {
            editor: Editor::new(document, screen_rows.saturating_sub(BAR_ROWS), screen_cols),
            filename: None,
            should_quit: false,
            quit_times: config.quit_times,
            config,
            prompt: None,
            status_message: String::new(),
            status_time: None,
        }
    }

    /// Replaces the document with the content of `path`. A path that does
    /// not exist yet gives an empty document that will be saved there.
    ///
    /// # Errors
    ///
    /// Any read error other than the file being missing.
    pub fn open(&mut self, path: &Path) -> io::Result<()> {
        let lines = file_io::load(path)?;
        tracing::info!(path = %path.display(), rows = lines.len(), "opened file");
        self.editor.document = Document::from_lines(lines, self.config.tab_stop);
        self.editor.cursor = Default::default();
        self.editor.viewport.rowoff = 0;
        self.editor.viewport.coloff = 0;
        self.filename = Some(path.to_path_buf());
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        if self.prompt.is_some() {
            Mode::Prompting
        } else {
            Mode::Editing
        }
    }

    /// Shows a message in the message bar for the configured duration.
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = msg.to_string();
        self.status_time = Some(Instant::now());
    }

    /// The message bar content at `now`. An open prompt always shows; a
    /// status message only until it expires (it stays stored regardless).
    pub fn visible_message(&self, now: Instant) -> Option<String> {
        if let Some(prompt) = &self.prompt {
            return Some(prompt.message());
        }
        let shown_at = self.status_time?;
        let fresh = now.saturating_duration_since(shown_at) < self.config.message_duration;
        (fresh && !self.status_message.is_empty()).then(|| self.status_message.clone())
    }

    /// Adapts the viewport to a new terminal size.
    pub fn resize(&mut self, screen_rows: usize, screen_cols: usize) {
        self.editor
            .viewport
            .resize(screen_rows.saturating_sub(BAR_ROWS), screen_cols);
    }
}

mod input;
mod prompt;
mod render;
mod save;
mod search;
