//! Journal entry record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One journal record.
///
/// `id` is assigned once at creation. Only `text` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Entry {
    pub fn new(id: String, date: NaiveDate, text: String, tags: Vec<String>) -> Self {
        Entry {
            id,
            date,
            text,
            tags,
        }
    }

    /// Tags as stored in the entry log: `"a, b, c"`.
    pub fn joined_tags(&self) -> String {
        self.tags.join(", ")
    }
}

/// Persisted dates are always `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

mod date_format {
    use super::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
