//! Configuration management

use crate::domain::journal::DEFAULT_JOURNAL_FILE;
use crate::error::{DecisionError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "decisions.toml";

/// Overrides `journal_file`
pub const FILE_ENV: &str = "DECISIONS_FILE";

/// Overrides `review_after_days`
pub const REVIEW_DAYS_ENV: &str = "DECISIONS_REVIEW_DAYS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub journal_file: PathBuf,
    pub review_after_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_file: PathBuf::from(DEFAULT_JOURNAL_FILE),
            review_after_days: 30,
        }
    }
}

impl Config {
    /// Load decisions.toml from the given directory, falling back to defaults
    /// when the file does not exist
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(DecisionError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| DecisionError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))
    }

    /// Save config to decisions.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    /// Whether a config file exists in the directory
    pub fn exists_in(path: &Path) -> bool {
        path.join(CONFIG_FILE).is_file()
    }

    /// Journal path, checking the environment first
    pub fn get_journal_file(&self) -> PathBuf {
        std::env::var_os(FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| self.journal_file.clone())
    }

    /// Pending review threshold, checking the environment first
    pub fn get_review_after_days(&self) -> Result<i64> {
        match std::env::var(REVIEW_DAYS_ENV) {
            Ok(value) => parse_days(&value),
            Err(_) => Ok(self.review_after_days),
        }
    }
}

/// Parse a day count for the review threshold
pub fn parse_days(value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| DecisionError::Config(format!("Invalid day count: '{}'", value)))
}
