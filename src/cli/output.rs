//! Output formatting utilities

use crate::application::Outcome;
use crate::domain::{Entry, DATE_FORMAT};

/// `id - date - text - tag1 tag2`
pub fn format_entry(entry: &Entry) -> String {
    format!(
        "{} - {} - {} - {}",
        entry.id,
        entry.date.format(DATE_FORMAT),
        entry.text,
        entry.tags.join(" ")
    )
}

/// One line per entry; empty when there are no entries
pub fn format_entry_list(entries: &[Entry]) -> String {
    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_entry(entry));
        output.push('\n');
    }
    output
}

/// Text printed for the outcome of a journal command
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Added(id) => format!("Entry added with ID {}\n", id),
        Outcome::Found(entries) => format_entry_list(entries),
        Outcome::Edited(id) => format!("Entry {} edited\n", id),
        Outcome::Deleted(id) => format!("Entry {} deleted\n", id),
        Outcome::NotFound(id) => format!("No entry found with ID {}\n", id),
    }
}
