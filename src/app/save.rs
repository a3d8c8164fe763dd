//! Writing the document to disk.

use super::*;

const SAVE_AS_PROMPT: &str = "Save as: {} (ESC to cancel)";

impl App {
    /// Saves to the current filename, or asks for one first. Failures only
    /// produce a status message; the document stays dirty.
    pub(super) fn save(&mut self) {
        let Some(path) = self.filename.clone() else {
            self.start_prompt(SAVE_AS_PROMPT, PromptPurpose::SaveAs, None);
            return;
        };

        let blob = file_io::serialize(self.editor.document.rows());
        match file_io::save(&path, &blob) {
            Ok(written) => {
                tracing::info!(path = %path.display(), bytes = written, "saved");
                self.editor.document.mark_clean();
                self.set_status(&format!("{written} bytes written to disk"));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "save failed");
                self.set_status(&format!("Can't save! I/O error: {e}"));
            }
        }
    }
}
