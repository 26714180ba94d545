//! Infrastructure layer - Persistence sinks, entry store and configuration

pub mod config;
pub mod entry_log;
pub mod snapshot;
pub mod store;

pub use config::Config;
pub use entry_log::{EntryLog, SqliteEntryLog};
pub use snapshot::{JsonSnapshot, SnapshotSink};
pub use store::EntryStore;
