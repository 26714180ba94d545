//! Whole-file JSON snapshot of all entries

use crate::domain::Entry;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Persists the full entry sequence as one document.
pub trait SnapshotSink {
    /// Read every entry. An absent snapshot is an empty journal.
    fn load(&self) -> Result<Vec<Entry>>;

    /// Overwrite the snapshot with `entries`.
    fn save(&self, entries: &[Entry]) -> Result<()>;
}

/// JSON array of `{id, date, text, tags}` objects in a single file.
///
/// Saving rewrites the file in place; an interrupted save can leave it truncated.
#[derive(Debug, Clone)]
pub struct JsonSnapshot {
    path: PathBuf,
}

impl JsonSnapshot {
    pub fn new(path: PathBuf) -> Self {
        JsonSnapshot { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSink for JsonSnapshot {
    fn load(&self) -> Result<Vec<Entry>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no snapshot, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let entries: Vec<Entry> = serde_json::from_str(&contents)?;
        tracing::info!(path = %self.path.display(), count = entries.len(), "snapshot loaded");
        Ok(entries)
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string(entries)?;
        fs::write(&self.path, contents)?;
        tracing::info!(path = %self.path.display(), count = entries.len(), "snapshot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournoError;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn entry(id: &str, text: &str) -> Entry {
        Entry::new(
            id.to_string(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            text.to_string(),
            vec!["t".to_string()],
        )
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let snapshot = JsonSnapshot::new(temp.path().join("entries.json"));
        assert!(snapshot.load().unwrap().is_empty());
        assert!(!snapshot.path().exists());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let snapshot = JsonSnapshot::new(temp.path().join("entries.json"));
        let entries = vec![entry("1", "first"), entry("2", "second")];

        snapshot.save(&entries).unwrap();
        assert_eq!(snapshot.load().unwrap(), entries);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let temp = TempDir::new().unwrap();
        let snapshot = JsonSnapshot::new(temp.path().join("entries.json"));

        snapshot.save(&[entry("1", "a"), entry("2", "b")]).unwrap();
        snapshot.save(&[entry("3", "c")]).unwrap();

        let loaded = snapshot.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "3");
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let snapshot = JsonSnapshot::new(temp.path().join("nested/dir/entries.json"));
        snapshot.save(&[]).unwrap();
        assert_eq!(fs::read_to_string(snapshot.path()).unwrap(), "[]");
    }

    #[test]
    fn test_reads_python_style_spacing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("entries.json");
        fs::write(
            &path,
            r#"[{"id": "x", "date": "2024-01-01", "text": "hi", "tags": ["a", "b"]}]"#,
        )
        .unwrap();

        let loaded = JsonSnapshot::new(path).load().unwrap();
        assert_eq!(loaded[0].tags, vec!["a", "b"]);
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("entries.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            JsonSnapshot::new(path).load(),
            Err(JournoError::Json(_))
        ));
    }
}
