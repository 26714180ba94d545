//! Date argument parsing

use crate::domain::entry::DATE_FORMAT;
use crate::error::{JournoError, Result};
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| JournoError::InvalidDate(input.to_string()))
}

/// Parse an optional date argument, keeping `None` as `None`.
pub fn parse_optional_date(input: Option<&str>) -> Result<Option<NaiveDate>> {
    input.map(parse_date).transpose()
}
