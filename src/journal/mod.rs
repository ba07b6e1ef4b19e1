//! The journal: free-text entries kept in local storage.

pub mod prompts;

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::models::{EntryId, JournalEntry};
use crate::store::{envelope, KeyValueStore};

pub use prompts::{insert_prompt_into_draft, MICRO_PROMPTS};

/// Storage key for the persisted journal.
pub const STORAGE_KEY: &str = "journalEntries";

/// Markers handed out in rotation as entries are added.
pub const CALMING_EMOJIS: [&str; 10] = [
    "🌿", "🌊", "🌙", "☁️", "✨", "🌸", "🕊️", "🌅", "🫧", "🌱",
];

/// Journal entries, newest first, mirrored to storage on every save.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Restore the journal persisted under [`STORAGE_KEY`].
    ///
    /// Missing or unreadable data gives an empty journal; only a failing store
    /// is an error.
    pub fn load_on_init(store: &impl KeyValueStore) -> Result<Self> {
        let entries: Vec<JournalEntry> = envelope::read_list(store, STORAGE_KEY)?;
        tracing::debug!("Loaded {} journal entries", entries.len());
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Save `text` as a new entry and write the journal back to `store`.
    ///
    /// Blank text is ignored: nothing changes and nothing is written.
    pub fn save_entry(
        &mut self,
        store: &impl KeyValueStore,
        text: &str,
    ) -> Result<Option<JournalEntry>> {
        self.save_entry_at(store, text, Utc::now())
    }

    /// Like [`save_entry`](Self::save_entry) with an explicit timestamp.
    pub fn save_entry_at(
        &mut self,
        store: &impl KeyValueStore,
        text: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<JournalEntry>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let entry = JournalEntry {
            id: EntryId::generate(),
            timestamp: at,
            prompt_text: String::new(),
            body: text.to_string(),
            emoji: emoji_for(self.entries.len()).to_string(),
        };

        let mut updated = Vec::with_capacity(self.entries.len() + 1);
        updated.push(entry.clone());
        updated.extend(self.entries.iter().cloned());

        envelope::write_list(store, STORAGE_KEY, &updated)?;
        self.entries = updated;

        tracing::info!("Saved journal entry {}", entry.id);
        Ok(Some(entry))
    }
}

/// Emoji for the entry saved when the journal already holds `count` entries.
pub fn emoji_for(count: usize) -> &'static str {
    CALMING_EMOJIS[count % CALMING_EMOJIS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emoji_rotation() {
        assert_eq!(emoji_for(0), "🌿");
        assert_eq!(emoji_for(1), "🌊");
        assert_eq!(emoji_for(10), "🌿");
        assert_eq!(emoji_for(19), "🌱");
    }
}
