//! Domain layer - Entry model, id derivation and filtering

pub mod date;
pub mod entry;
pub mod identity;
pub mod query;

pub use date::{parse_date, parse_optional_date};
pub use entry::{Entry, DATE_FORMAT};
pub use identity::{Clock, FixedClock, IdGenerator, Sha256Ids, SystemClock};
pub use query::EntryQuery;
