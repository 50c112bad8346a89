//! Config management use case

use crate::error::{DecisionError, Result};
use crate::infrastructure::config::{parse_days, Config};
use std::path::PathBuf;

/// Service for managing journal configuration
pub struct ConfigService {
    root: PathBuf,
}

impl ConfigService {
    /// Create a config service for decisions.toml in `root`
    pub fn new(root: PathBuf) -> Self {
        ConfigService { root }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.root)?;

        match key {
            "journal_file" => Ok(config.journal_file.display().to_string()),
            "review_after_days" => Ok(config.review_after_days.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.root)?;

        match key {
            "journal_file" => {
                if value.trim().is_empty() {
                    return Err(DecisionError::Config(
                        "journal_file cannot be empty".to_string(),
                    ));
                }
                config.journal_file = PathBuf::from(value);
            }
            "review_after_days" => {
                config.review_after_days = parse_days(value)?;
            }
            _ => return Err(unknown_key(key)),
        }

        config.save_to_dir(&self.root)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }
}

fn unknown_key(key: &str) -> DecisionError {
    DecisionError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: journal_file, review_after_days",
        key
    ))
}
