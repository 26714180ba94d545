//! Typed journal operations

use crate::domain::EntryQuery;
use chrono::NaiveDate;

/// One journal operation with its arguments already validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalCommand {
    Add {
        text: String,
        date: Option<NaiveDate>,
        tags: Option<Vec<String>>,
    },
    Get(EntryQuery),
    Edit {
        id: String,
        text: String,
    },
    Delete {
        id: String,
    },
}
