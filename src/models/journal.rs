use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntryId;

/// Number of characters shown for an entry in the history list.
pub const PREVIEW_CHARS: usize = 100;

/// A free-text journal entry.
///
/// Prompts are inserted straight into `body`, so `prompt_text` is empty for
/// every entry written by this crate. The field is kept because stored
/// entries carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub prompt_text: String,
    pub body: String,
    pub emoji: String,
}

impl JournalEntry {
    /// The body cut to [`PREVIEW_CHARS`] characters, with `...` when cut.
    pub fn preview(&self) -> String {
        match self.body.char_indices().nth(PREVIEW_CHARS) {
            Some((idx, _)) => format!("{}...", &self.body[..idx]),
            None => self.body.clone(),
        }
    }

    /// Whether [`preview`](Self::preview) hides part of the body.
    pub fn is_truncated(&self) -> bool {
        self.body.chars().count() > PREVIEW_CHARS
    }
}
