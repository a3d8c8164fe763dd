//! The modal prompt: a one-line input in the message bar that owns every
//! key until it is committed with Enter or cancelled with ESC.

use super::input::BACKSPACE_CTRL;
use super::*;

use crate::editor::Snapshot;

/// Live hook run after every key the prompt receives, whether or not the
/// key changed the input.
pub trait PromptCallback {
    fn on_keystroke(&mut self, editor: &mut Editor, input: &str, key: Key);
}

/// What a committed input is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    SaveAs,
    Search,
}

enum Outcome {
    Committed,
    Cancelled,
}

pub(super) struct Prompt {
    /// `{}` marks where the input goes.
    template: &'static str,
    input: String,
    purpose: PromptPurpose,
    callback: Option<Box<dyn PromptCallback>>,
    snapshot: Snapshot,
}

impl Prompt {
    pub(super) fn message(&self) -> String {
        self.template.replace("{}", &self.input)
    }
}

impl App {
    pub(super) fn start_prompt(
        &mut self,
        template: &'static str,
        purpose: PromptPurpose,
        callback: Option<Box<dyn PromptCallback>>,
    ) {
        tracing::debug!(?purpose, "prompt opened");
        self.prompt = Some(Prompt {
            template,
            input: String::new(),
            purpose,
            callback,
            snapshot: self.editor.snapshot(),
        });
    }

    /// Current prompt input, if a prompt is open.
    pub fn prompt_input(&self) -> Option<&str> {
        self.prompt.as_ref().map(|p| p.input.as_str())
    }

    pub(super) fn handle_prompt_key(&mut self, key: Key) {
        let Some(mut prompt) = self.prompt.take() else {
            return;
        };

        let outcome = match key {
            Key::Backspace | Key::Delete | Key::Char(BACKSPACE_CTRL) => {
                prompt.input.pop();
                None
            }
            Key::Escape => Some(Outcome::Cancelled),
            Key::Char(ENTER) if !prompt.input.is_empty() => Some(Outcome::Committed),
            Key::Char(byte) if byte.is_ascii() && !byte.is_ascii_control() => {
                prompt.input.push(char::from(byte));
                None
            }
            _ => None,
        };

        if let Some(callback) = prompt.callback.as_mut() {
            callback.on_keystroke(&mut self.editor, &prompt.input, key);
        }

        match outcome {
            None => self.prompt = Some(prompt),
            Some(Outcome::Cancelled) => {
                tracing::debug!(purpose = ?prompt.purpose, "prompt cancelled");
                self.set_status("");
                self.editor.restore(prompt.snapshot);
                self.finish_prompt(prompt.purpose, None);
            }
            Some(Outcome::Committed) => {
                tracing::debug!(purpose = ?prompt.purpose, "prompt committed");
                self.set_status("");
                self.finish_prompt(prompt.purpose, Some(prompt.input));
            }
        }
    }

    fn finish_prompt(&mut self, purpose: PromptPurpose, input: Option<String>) {
        match (purpose, input) {
            (PromptPurpose::SaveAs, Some(name)) => {
                self.filename = Some(PathBuf::from(name));
                self.save();
            }
            (PromptPurpose::SaveAs, None) => self.set_status("Save aborted"),
            (PromptPurpose::Search, _) => {}
        }
    }
}
