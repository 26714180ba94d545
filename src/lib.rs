//! journo - Terminal journaling tool
//!
//! Records dated, tagged text entries and retrieves them by tag or date range.
//! Entries live in a JSON snapshot that is loaded once per invocation and
//! mirrored row-by-row into a SQLite log on every mutation.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JournoError;
