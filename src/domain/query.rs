//! Entry filtering
//!
//! Filters compose conjunctively: an entry is kept only when every supplied
//! filter accepts it. Results keep the input order.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use journo::domain::{Entry, EntryQuery};
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let entries = vec![
//!     Entry::new("1".into(), day, "a".into(), vec!["work".into()]),
//!     Entry::new("2".into(), day, "b".into(), vec!["home".into()]),
//! ];
//!
//! let query = EntryQuery::new().with_tags(vec!["work".into()]);
//! let ids: Vec<&str> = query.apply(&entries).iter().map(|e| e.id.as_str()).collect();
//! assert_eq!(ids, vec!["1"]);
//! ```

use crate::domain::Entry;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Read-only filter over a sequence of entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryQuery {
    /// Keep entries sharing at least one tag with this list
    pub tags: Option<Vec<String>>,
    /// Keep entries dated exactly on this day
    pub date: Option<NaiveDate>,
    /// Inclusive range start; only applied together with `end_date`
    pub start_date: Option<NaiveDate>,
    /// Inclusive range end; only applied together with `start_date`
    pub end_date: Option<NaiveDate>,
}

impl EntryQuery {
    /// A query with no filters, matching every entry
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// True when exactly one range bound is set, so the range is ignored.
    pub fn has_half_open_range(&self) -> bool {
        self.start_date.is_some() != self.end_date.is_some()
    }

    /// Check a single entry against every supplied filter
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(tags) = &self.tags {
            let wanted: HashSet<&str> = tags.iter().map(|s| s.as_str()).collect();
            if !entry.tags.iter().any(|t| wanted.contains(t.as_str())) {
                return false;
            }
        }

        if let Some(date) = self.date {
            if entry.date != date {
                return false;
            }
        }

        // NaiveDate ordering matches lexicographic order of the YYYY-MM-DD form.
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if entry.date < start || entry.date > end {
                return false;
            }
        }

        true
    }

    /// Stable subsequence of `entries` matching this query
    pub fn apply<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}
