//! Key dispatch: prompt keys first, then the editing keymap.

use super::*;

const QUIT: u8 = ctrl_key(b'q');
const SAVE: u8 = ctrl_key(b's');
const FIND: u8 = ctrl_key(b'f');
const REFRESH: u8 = ctrl_key(b'l');
pub(super) const BACKSPACE_CTRL: u8 = ctrl_key(b'h');

impl App {
    /// Applies one key event. Every key except Ctrl-Q re-arms the quit
    /// confirmation counter.
    pub fn handle_key(&mut self, key: Key) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            self.quit_times = self.config.quit_times;
            return;
        }

        match key {
            Key::Char(ENTER) => self.editor.insert_newline(),
            Key::Char(QUIT) => {
                self.request_quit();
                return;
            }
            Key::Char(SAVE) => self.save(),
            Key::Char(FIND) => self.find(),
            Key::Backspace | Key::Char(BACKSPACE_CTRL) => self.editor.delete_backward(),
            Key::Delete => self.editor.delete_forward(),
            Key::PageUp | Key::PageDown => self.editor.page(key),
            Key::Home => self.editor.home(),
            Key::End => self.editor.end(),
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => {
                self.editor.move_cursor(key);
            }
            Key::Escape | Key::Char(REFRESH) => {}
            Key::Char(byte) => self.editor.insert_char(byte),
        }

        self.quit_times = self.config.quit_times;
    }

    /// Quits right away on a clean document. A dirty one needs
    /// `quit_times` presses in a row; the ones before the last only warn.
    fn request_quit(&mut self) {
        if self.editor.document.is_dirty() {
            self.quit_times = self.quit_times.saturating_sub(1);
            if self.quit_times > 0 {
                let times = self.quit_times;
                let plural = if times == 1 { "" } else { "s" };
                self.set_status(&format!(
                    "WARNING!!! File has unsaved changes. Press Ctrl-Q {times} more time{plural} to quit."
                ));
                return;
            }
        }
        tracing::info!(dirty = self.editor.document.dirty(), "quitting");
        self.should_quit = true;
    }
}
