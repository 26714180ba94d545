//! Error types for journo

use thiserror::Error;

/// Main error type for journo application
#[derive(Debug, Error)]
pub enum JournoError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Entry log error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Snapshot error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JournoError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournoError::InvalidDate(_) => 3,
            JournoError::Config(_) | JournoError::TomlDeserialize(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournoError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Examples:\n\
                    journo add \"text\" --date 2024-01-31\n\
                    journo get --start-date 2024-01-01 --end-date 2024-01-31",
                    input
                )
            }
            JournoError::Io(e) => {
                format!(
                    "IO error: {}\n\n\
                    Suggestions:\n\
                    • Check that the journal directory is writable\n\
                    • Set JOURNO_ROOT to a directory you own",
                    e
                )
            }
            JournoError::Json(e) => {
                format!(
                    "Snapshot error: {}\n\n\
                    The snapshot file could not be parsed. Restore it from a backup\n\
                    or move it aside to start an empty journal.",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournoError
pub type Result<T> = std::result::Result<T, JournoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_suggestions() {
        let err = JournoError::InvalidDate("31-01-2024".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("31-01-2024"));
        assert!(msg.contains("Examples"));
    }

    #[test]
    fn test_io_error_suggestions() {
        let err = JournoError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("JOURNO_ROOT"));
        assert!(msg.contains("writable"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(JournoError::InvalidDate("x".into()).exit_code(), 3);
        assert_eq!(JournoError::Config("x".into()).exit_code(), 2);
        let io = JournoError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x"));
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = JournoError::Config("bad key".to_string());
        assert_eq!(err.display_with_suggestions(), "Configuration error: bad key");
    }
}
