//! Incremental search, run as the callback of a search prompt.

use super::*;

use crate::text::document::find_bytes;

const SEARCH_PROMPT: &str = "Search: {} (Use ESC/Arrows/Enter)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Remembers the last matching row between keystrokes so the arrow keys can
/// step from one match to the next.
#[derive(Debug)]
pub struct IncrementalSearch {
    last_match: Option<usize>,
    direction: Direction,
}

impl Default for IncrementalSearch {
    fn default() -> Self {
        Self {
            last_match: None,
            direction: Direction::Forward,
        }
    }
}

impl IncrementalSearch {
    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    fn reset(&mut self) {
        self.last_match = None;
        self.direction = Direction::Forward;
    }

    /// Row after (or before) `from`, wrapping at both ends.
    fn step(&self, from: Option<usize>, numrows: usize) -> usize {
        match (self.direction, from) {
            (Direction::Forward, None) => 0,
            (Direction::Forward, Some(at)) if at + 1 >= numrows => 0,
            (Direction::Forward, Some(at)) => at + 1,
            (Direction::Backward, None | Some(0)) => numrows - 1,
            (Direction::Backward, Some(at)) => at - 1,
        }
    }
}

impl PromptCallback for IncrementalSearch {
    /// Arrow keys move to the next (Right/Down) or previous (Left/Up) match.
    /// Any other key restarts the search from the top with the updated query.
    fn on_keystroke(&mut self, editor: &mut Editor, query: &str, key: Key) {
        match key {
            Key::Char(ENTER) | Key::Escape => {
                self.reset();
                return;
            }
            Key::ArrowRight | Key::ArrowDown => self.direction = Direction::Forward,
            Key::ArrowLeft | Key::ArrowUp => self.direction = Direction::Backward,
            _ => self.reset(),
        }
        if self.last_match.is_none() {
            self.direction = Direction::Forward;
        }
        if query.is_empty() {
            return;
        }

        let numrows = editor.document.len();
        let mut current = self.last_match;
        for _ in 0..numrows {
            let at = self.step(current, numrows);
            current = Some(at);
            let Some(row) = editor.document.row(at) else {
                continue;
            };
            if let Some(rx) = find_bytes(row.render(), query.as_bytes()) {
                self.last_match = Some(at);
                editor.cursor.cy = at;
                editor.cursor.cx = editor.document.rx_to_cx(at, rx);
                // Past every row: the next scroll puts the match at the top.
                editor.viewport.rowoff = numrows;
                break;
            }
        }
    }
}

impl App {
    pub(super) fn find(&mut self) {
        self.start_prompt(
            SEARCH_PROMPT,
            PromptPurpose::Search,
            Some(Box::new(IncrementalSearch::default())),
        );
    }
}
