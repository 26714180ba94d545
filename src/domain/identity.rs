//! Entry id derivation
//!
//! Ids are content-derived: the SHA-256 of the entry text, hex encoded. When
//! that id is already taken, one fallback id is derived from the text plus the
//! current timestamp. A second collision is accepted as is; there is no retry
//! loop, so uniqueness is only as strong as the timestamp resolution.

use chrono::{DateTime, Local, NaiveDate};
use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    /// Calendar day used when an entry is added without a date
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Derives the id of a new entry.
pub trait IdGenerator {
    fn generate(&self, text: &str, existing: &HashSet<&str>, clock: &dyn Clock) -> String;
}

/// SHA-256 content ids with a single timestamped fallback
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Ids;

impl Sha256Ids {
    fn digest(input: &str) -> String {
        hex::encode(Sha256::digest(input.as_bytes()))
    }
}

impl IdGenerator for Sha256Ids {
    fn generate(&self, text: &str, existing: &HashSet<&str>, clock: &dyn Clock) -> String {
        let candidate = Self::digest(text);
        if !existing.contains(candidate.as_str()) {
            return candidate;
        }

        // Seconds since the epoch with microsecond fraction, e.g. 1704110400.123456
        let stamp = clock.now().format("%s%.6f").to_string();
        tracing::warn!(id = %candidate, %stamp, "entry id collision, using timestamped id");
        Self::digest(&format!("{}{}", text, stamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn clock() -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_digest_is_sha256_hex() {
        let id = Sha256Ids.generate("hello", &HashSet::new(), &clock());
        assert_eq!(
            id,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_deterministic_without_existing_ids() {
        let empty = HashSet::new();
        let first = Sha256Ids.generate("some text", &empty, &clock());
        let second = Sha256Ids.generate("some text", &empty, &SystemClock);
        assert_eq!(first, second);
        assert_ne!(first, Sha256Ids.generate("other text", &empty, &clock()));
    }

    #[test]
    fn test_collision_uses_fallback() {
        let original = Sha256Ids.generate("dup", &HashSet::new(), &clock());
        let existing: HashSet<&str> = [original.as_str()].into_iter().collect();

        let fallback = Sha256Ids.generate("dup", &existing, &clock());
        assert_ne!(fallback, original);
        assert_eq!(fallback.len(), 64);

        let stamp = clock().now().format("%s%.6f").to_string();
        assert_eq!(fallback, Sha256Ids::digest(&format!("dup{}", stamp)));
    }

    #[test]
    fn test_second_collision_is_not_retried() {
        let original = Sha256Ids.generate("dup", &HashSet::new(), &clock());
        let fallback = {
            let existing: HashSet<&str> = [original.as_str()].into_iter().collect();
            Sha256Ids.generate("dup", &existing, &clock())
        };
        let existing: HashSet<&str> = [original.as_str(), fallback.as_str()]
            .into_iter()
            .collect();

        // Same clock instant: the fallback id repeats.
        assert_eq!(Sha256Ids.generate("dup", &existing, &clock()), fallback);
    }

    #[test]
    fn test_fixed_clock_today() {
        assert_eq!(
            clock().today(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }
}
