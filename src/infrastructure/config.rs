//! Configuration management

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional config file in the journal root
pub const CONFIG_FILE: &str = "journo.toml";

/// Environment variable overriding the journal root
pub const ROOT_ENV: &str = "JOURNO_ROOT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON snapshot file, relative to the journal root unless absolute
    #[serde(default = "default_snapshot")]
    pub snapshot: PathBuf,
    /// SQLite entry log file, relative to the journal root unless absolute
    #[serde(default = "default_log")]
    pub log: PathBuf,
}

fn default_snapshot() -> PathBuf {
    PathBuf::from("entries.json")
}

fn default_log() -> PathBuf {
    PathBuf::from("entries.db")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            snapshot: default_snapshot(),
            log: default_log(),
        }
    }
}

impl Config {
    /// Load config from journo.toml in the given directory.
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(e.into()),
        };

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to journo.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Resolved snapshot path under `root`
    pub fn snapshot_path(&self, root: &Path) -> PathBuf {
        root.join(&self.snapshot)
    }

    /// Resolved entry log path under `root`
    pub fn log_path(&self, root: &Path) -> PathBuf {
        root.join(&self.log)
    }

    /// Journal root: JOURNO_ROOT if set, otherwise the current directory
    pub fn resolve_root() -> Result<PathBuf> {
        match std::env::var_os(ROOT_ENV) {
            Some(root) if !root.is_empty() => Ok(PathBuf::from(root)),
            _ => Ok(std::env::current_dir()?),
        }
    }
}
