//! The pain log: an ordered, newest-first list of check-ins.

pub mod insights;

use anyhow::Result;
use chrono::{DateTime, Local, TimeZone, Utc};

use crate::models::*;
use crate::store::{envelope, KeyValueStore};

/// Storage key for the persisted pain log.
pub const STORAGE_KEY: &str = "painEntries";

/// Pain entries for the current session, newest first.
///
/// Entries are only ever prepended, so list order is creation order reversed.
#[derive(Debug, Clone, Default)]
pub struct PainLog {
    entries: Vec<PainEntry>,
}

impl PainLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from entries already in newest-first (call) order.
    pub fn from_entries(entries: Vec<PainEntry>) -> Self {
        Self { entries }
    }

    /// Restore the log persisted under [`STORAGE_KEY`], keeping stored order.
    ///
    /// Order is never derived from `date`, so a clock that stepped back
    /// cannot move an older entry ahead of the one recorded last.
    pub fn load(store: &impl KeyValueStore) -> Result<Self> {
        let entries = envelope::read_list(store, STORAGE_KEY)?;
        Ok(Self::from_entries(entries))
    }

    /// Write the whole log under [`STORAGE_KEY`].
    pub fn persist(&self, store: &impl KeyValueStore) -> Result<()> {
        envelope::write_list(store, STORAGE_KEY, &self.entries)
    }

    pub fn entries(&self) -> &[PainEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn most_recent(&self) -> Option<&PainEntry> {
        self.entries.first()
    }

    pub fn get(&self, id: &EntryId) -> Option<&PainEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Record a new entry from the current form state.
    pub fn record_entry(&mut self, input: RecordPainInput) -> PainEntry {
        self.record_entry_at(input, Utc::now())
    }

    /// Record a new entry with an explicit creation time.
    pub fn record_entry_at(&mut self, input: RecordPainInput, at: DateTime<Utc>) -> PainEntry {
        let entry = PainEntry {
            id: EntryId::generate(),
            date: at,
            intensity: input.intensity,
            location: dedup_labels(input.location),
            quality: dedup_labels(input.quality),
            impact: input.impact,
            context: dedup_labels(input.context),
            notes: clip_notes(&input.notes),
            wellbeing: input.wellbeing,
            helped: None,
            helped_effectiveness: None,
        };

        tracing::debug!("Recorded pain entry {} (intensity {})", entry.id, entry.intensity);
        self.entries.insert(0, entry.clone());
        entry
    }

    /// Attach relief data to the entry with `id`.
    ///
    /// Returns the amended entry, or `None` if no entry has that id. Amending
    /// twice replaces the earlier relief data.
    pub fn amend(&mut self, id: &EntryId, relief: ReliefInput) -> Option<PainEntry> {
        let Some(entry) = self.entries.iter_mut().find(|e| &e.id == id) else {
            tracing::debug!("No pain entry {} to amend", id);
            return None;
        };

        entry.helped = Some(dedup_labels(relief.helped));
        entry.helped_effectiveness = Some(relief.effectiveness);
        Some(entry.clone())
    }

    /// Attach relief data to the most recently recorded entry.
    ///
    /// Does nothing and returns `None` when the log is empty.
    pub fn amend_most_recent(&mut self, relief: ReliefInput) -> Option<PainEntry> {
        let id = self.most_recent()?.id.clone();
        self.amend(&id, relief)
    }

    /// Insights as of now, bucketing days by the local calendar.
    pub fn compute_insights(&self) -> Insights {
        self.compute_insights_at(Local::now())
    }

    /// Insights as of `now`, bucketing days by `now`'s time zone.
    pub fn compute_insights_at<Tz: TimeZone>(&self, now: DateTime<Tz>) -> Insights {
        insights::compute(&self.entries, now)
    }
}

/// Keep the first occurrence of each label, preserving selection order.
fn dedup_labels<T: PartialEq>(labels: Vec<T>) -> Vec<T> {
    let mut unique = Vec::with_capacity(labels.len());
    for label in labels {
        if !unique.contains(&label) {
            unique.push(label);
        }
    }
    unique
}

fn clip_notes(notes: &str) -> Option<String> {
    if notes.trim().is_empty() {
        return None;
    }
    Some(notes.chars().take(NOTES_MAX_CHARS).collect())
}
