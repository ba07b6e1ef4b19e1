//! Application context: owns the storage handle and both entry stores.

use anyhow::Result;

use crate::config::AppConfig;
use crate::journal::Journal;
use crate::models::*;
use crate::pain::PainLog;
use crate::store::KeyValueStore;

pub struct Wellness<S: KeyValueStore> {
    store: S,
    config: AppConfig,
    pain: PainLog,
    journal: Journal,
}

impl<S: KeyValueStore> Wellness<S> {
    /// Load persisted state from `store`.
    ///
    /// The pain log starts empty unless `config.persist_pain_log` is set.
    pub fn open(store: S, config: AppConfig) -> Result<Self> {
        let journal = Journal::load_on_init(&store)?;
        let pain = if config.persist_pain_log {
            PainLog::load(&store)?
        } else {
            PainLog::new()
        };

        Ok(Self {
            store,
            config,
            pain,
            journal,
        })
    }

    pub fn pain(&self) -> &PainLog {
        &self.pain
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Record a check-in. The log is written before it changes in memory,
    /// so a failed write leaves both as they were.
    pub fn record_pain(&mut self, input: RecordPainInput) -> Result<PainEntry> {
        let mut next = self.pain.clone();
        let entry = next.record_entry(input);
        self.commit_pain(next)?;
        Ok(entry)
    }

    /// Attach relief data to the most recent pain entry, if there is one.
    pub fn amend_most_recent(&mut self, relief: ReliefInput) -> Result<Option<PainEntry>> {
        let mut next = self.pain.clone();
        let amended = next.amend_most_recent(relief);
        if amended.is_some() {
            self.commit_pain(next)?;
        }
        Ok(amended)
    }

    pub fn amend(&mut self, id: &EntryId, relief: ReliefInput) -> Result<Option<PainEntry>> {
        let mut next = self.pain.clone();
        let amended = next.amend(id, relief);
        if amended.is_some() {
            self.commit_pain(next)?;
        }
        Ok(amended)
    }

    pub fn insights(&self) -> Insights {
        self.pain.compute_insights()
    }

    pub fn save_journal_entry(&mut self, text: &str) -> Result<Option<JournalEntry>> {
        self.journal.save_entry(&self.store, text)
    }

    fn commit_pain(&mut self, next: PainLog) -> Result<()> {
        if self.config.persist_pain_log {
            next.persist(&self.store)?;
        }
        self.pain = next;
        Ok(())
    }
}
