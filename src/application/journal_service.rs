//! Journal use cases

use crate::application::JournalCommand;
use crate::domain::{Entry, EntryQuery};
use crate::error::Result;
use crate::infrastructure::EntryStore;
use chrono::NaiveDate;

/// Result of one journal operation, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(String),
    Found(Vec<Entry>),
    Edited(String),
    Deleted(String),
    NotFound(String),
}

/// Service running journal operations against an entry store
pub struct JournalService {
    store: EntryStore,
}

impl JournalService {
    /// Create a new journal service
    pub fn new(store: EntryStore) -> Self {
        JournalService { store }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Add an entry, returning its id
    pub fn add(
        &mut self,
        text: &str,
        date: Option<NaiveDate>,
        tags: Option<Vec<String>>,
    ) -> Result<String> {
        self.store.add(text, date, tags)
    }

    /// Entries matching `query`
    pub fn get(&self, query: &EntryQuery) -> Vec<Entry> {
        if query.has_half_open_range() {
            tracing::warn!("date range needs both start and end date; range ignored");
        }
        self.store.query(query).into_iter().cloned().collect()
    }

    /// Replace an entry's text. Unknown ids are silently ignored.
    pub fn edit(&mut self, id: &str, text: &str) -> Result<()> {
        self.store.edit(id, text)
    }

    /// Delete an entry, returning whether it existed
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        self.store.delete(id)
    }

    /// Dispatch a single command
    pub fn run(&mut self, command: JournalCommand) -> Result<Outcome> {
        match command {
            JournalCommand::Add { text, date, tags } => {
                self.add(&text, date, tags).map(Outcome::Added)
            }
            JournalCommand::Get(query) => Ok(Outcome::Found(self.get(&query))),
            JournalCommand::Edit { id, text } => {
                self.edit(&id, &text)?;
                Ok(Outcome::Edited(id))
            }
            JournalCommand::Delete { id } => {
                if self.delete(&id)? {
                    Ok(Outcome::Deleted(id))
                } else {
                    Ok(Outcome::NotFound(id))
                }
            }
        }
    }

    /// Persist the snapshot; called once at the end of every invocation
    pub fn finish(self) -> Result<()> {
        self.store.save()
    }
}
