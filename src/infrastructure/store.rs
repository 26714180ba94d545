//! Entry store
//!
//! Owns the in-memory entry sequence for one invocation and keeps the two
//! persistence sinks in line with it:
//! - the snapshot is read once on load and rewritten on [`EntryStore::save`];
//! - the entry log receives one write per mutation and is never read.
//!
//! There is no transaction spanning both sinks and no file locking. A failed
//! log write leaves the in-memory sequence already mutated; the caller is
//! expected to abort without saving.

use crate::domain::{Clock, Entry, EntryQuery, IdGenerator, Sha256Ids, SystemClock};
use crate::error::Result;
use crate::infrastructure::{Config, EntryLog, JsonSnapshot, SnapshotSink, SqliteEntryLog};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::Path;

pub struct EntryStore {
    entries: Vec<Entry>,
    snapshot: Box<dyn SnapshotSink>,
    log: Box<dyn EntryLog>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl EntryStore {
    /// Load entries from `snapshot` and make sure the log schema exists.
    pub fn load(
        snapshot: impl SnapshotSink + 'static,
        log: impl EntryLog + 'static,
    ) -> Result<Self> {
        let entries = snapshot.load()?;
        log.ensure_schema()?;

        Ok(EntryStore {
            entries,
            snapshot: Box::new(snapshot),
            log: Box::new(log),
            ids: Box::new(Sha256Ids),
            clock: Box::new(SystemClock),
        })
    }

    /// Open the file-backed sinks configured for `root`.
    pub fn open(root: &Path, config: &Config) -> Result<Self> {
        let snapshot = JsonSnapshot::new(config.snapshot_path(root));
        let log_path = config.log_path(root);
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let log = SqliteEntryLog::open(&log_path)?;
        Self::load(snapshot, log)
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry with `id`
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Create an entry and mirror it into the log. Returns the new id.
    ///
    /// `date` defaults to the clock's current day, `tags` to none.
    pub fn add(
        &mut self,
        text: &str,
        date: Option<NaiveDate>,
        tags: Option<Vec<String>>,
    ) -> Result<String> {
        let date = date.unwrap_or_else(|| self.clock.today());
        let tags = tags.unwrap_or_default();

        let id = {
            let existing: HashSet<&str> = self.entries.iter().map(|e| e.id.as_str()).collect();
            self.ids.generate(text, &existing, self.clock.as_ref())
        };

        let entry = Entry::new(id.clone(), date, text.to_string(), tags);
        self.entries.push(entry);
        if let Some(entry) = self.entries.last() {
            self.log.insert(entry)?;
        }

        tracing::debug!(id = %id, %date, "entry added");
        Ok(id)
    }

    /// Replace the text of the first entry with `id`. Unknown ids are ignored.
    pub fn edit(&mut self, id: &str, text: &str) -> Result<()> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            tracing::debug!(id, "edit target not found");
            return Ok(());
        };

        entry.text = text.to_string();
        self.log.update_text(id, text)?;
        tracing::debug!(id, "entry edited");
        Ok(())
    }

    /// Remove the first entry with `id`. Returns whether one was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            tracing::debug!(id, "delete target not found");
            return Ok(false);
        };

        self.entries.remove(index);
        self.log.delete(id)?;
        tracing::debug!(id, "entry deleted");
        Ok(true)
    }

    /// Entries matching `query`, in store order
    pub fn query(&self, query: &EntryQuery) -> Vec<&Entry> {
        query.apply(&self.entries)
    }

    /// Overwrite the snapshot with the current sequence.
    pub fn save(&self) -> Result<()> {
        self.snapshot.save(&self.entries)
    }
}
