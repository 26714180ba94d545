//! Application layer - Use cases and orchestration

pub mod command;
pub mod journal_service;

pub use command::JournalCommand;
pub use journal_service::{JournalService, Outcome};
