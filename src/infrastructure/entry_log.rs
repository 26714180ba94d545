//! Row-per-entry SQLite mirror
//!
//! The log is written on every mutation but never read back by the store:
//! the snapshot stays the only source of entries on load. If the snapshot is
//! lost, nothing rehydrates from here.

use crate::domain::{Entry, DATE_FORMAT};
use crate::error::Result;
use rusqlite::{params, Connection};
use std::path::Path;

const SCHEMA: &str =
    "CREATE TABLE IF NOT EXISTS entries (id TEXT PRIMARY KEY, date TEXT, text TEXT, tags TEXT)";

/// Durable per-entry log keyed by id.
pub trait EntryLog {
    /// Create the entries table if missing. Idempotent.
    fn ensure_schema(&self) -> Result<()>;

    /// Insert a new row. Fails if the id is already present.
    fn insert(&self, entry: &Entry) -> Result<()>;

    /// Replace the text of the row with `id`.
    fn update_text(&self, id: &str, text: &str) -> Result<()>;

    /// Remove the row with `id`.
    fn delete(&self, id: &str) -> Result<()>;
}

/// SQLite implementation of [`EntryLog`].
pub struct SqliteEntryLog {
    conn: Connection,
}

impl SqliteEntryLog {
    /// Opens or creates the log database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(SqliteEntryLog { conn })
    }

    /// Opens an in-memory log.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(SqliteEntryLog { conn })
    }
}

impl EntryLog for SqliteEntryLog {
    fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    fn insert(&self, entry: &Entry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO entries (id, date, text, tags) VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.id,
                entry.date.format(DATE_FORMAT).to_string(),
                entry.text,
                entry.joined_tags()
            ],
        )?;
        tracing::debug!(id = %entry.id, "log row inserted");
        Ok(())
    }

    fn update_text(&self, id: &str, text: &str) -> Result<()> {
        let rows = self.conn.execute(
            "UPDATE entries SET text = ?1 WHERE id = ?2",
            params![text, id],
        )?;
        tracing::debug!(id, rows, "log row updated");
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?1", params![id])?;
        tracing::debug!(id, rows, "log row deleted");
        Ok(())
    }
}
