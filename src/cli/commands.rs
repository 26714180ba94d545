//! CLI command definitions

use crate::application::JournalCommand;
use crate::domain::{parse_optional_date, EntryQuery};
use crate::error::Result;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "journo")]
#[command(about = "Journaling app", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new entry
    Add {
        /// Text of the entry
        text: String,

        /// Date of the entry (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Tags of the entry
        #[arg(short, long, num_args = 1..)]
        tags: Option<Vec<String>>,
    },

    /// Get entries
    Get {
        /// Tags of the entries
        #[arg(short, long, num_args = 1..)]
        tags: Option<Vec<String>>,

        /// Date of the entries (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Start date of the date range (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,

        /// End date of the date range (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,
    },

    /// Edit an entry
    Edit {
        /// ID of the entry to edit
        entry_id: String,

        /// New text of the entry
        text: String,
    },

    /// Delete an entry by ID
    Delete {
        /// ID of the entry to delete
        entry_id: String,
    },

    /// Show the resolved snapshot and entry log paths
    Config,
}

impl Commands {
    /// Validate arguments into a journal operation.
    ///
    /// Returns `None` for commands that do not touch the journal.
    /// Malformed dates fail here, before any store is opened.
    pub fn into_journal_command(self) -> Result<Option<JournalCommand>> {
        let command = match self {
            Commands::Add { text, date, tags } => JournalCommand::Add {
                text,
                date: parse_optional_date(date.as_deref())?,
                tags,
            },
            Commands::Get {
                tags,
                date,
                start_date,
                end_date,
            } => JournalCommand::Get(EntryQuery {
                tags,
                date: parse_optional_date(date.as_deref())?,
                start_date: parse_optional_date(start_date.as_deref())?,
                end_date: parse_optional_date(end_date.as_deref())?,
            }),
            Commands::Edit { entry_id, text } => JournalCommand::Edit { id: entry_id, text },
            Commands::Delete { entry_id } => JournalCommand::Delete { id: entry_id },
            Commands::Config => return Ok(None),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournoError;
    use chrono::NaiveDate;

    fn parse(args: &[&str]) -> Commands {
        let mut argv = vec!["journo"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command.unwrap()
    }

    #[test]
    fn test_add_with_date_and_tags() {
        let command = parse(&["add", "hello", "-d", "2024-01-01", "-t", "a", "b"])
            .into_journal_command()
            .unwrap()
            .unwrap();
        assert_eq!(
            command,
            JournalCommand::Add {
                text: "hello".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1),
                tags: Some(vec!["a".into(), "b".into()]),
            }
        );
    }

    #[test]
    fn test_get_range() {
        let command = parse(&["get", "--start-date", "2024-01-02", "--end-date", "2024-01-10"])
            .into_journal_command()
            .unwrap()
            .unwrap();
        let JournalCommand::Get(query) = command else {
            panic!("expected Get");
        };
        assert_eq!(query.start_date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(query.end_date, NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(query.tags, None);
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let result = parse(&["get", "--date", "01/02/2024"]).into_journal_command();
        assert!(matches!(result, Err(JournoError::InvalidDate(_))));
    }

    #[test]
    fn test_config_is_not_a_journal_command() {
        assert_eq!(parse(&["config"]).into_journal_command().unwrap(), None);
    }

    #[test]
    fn test_tags_require_a_value() {
        assert!(Cli::try_parse_from(["journo", "add", "x", "--tags"]).is_err());
    }
}
