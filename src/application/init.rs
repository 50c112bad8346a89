//! Initialize journal use case

use crate::domain::Journal;
use crate::error::{DecisionError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write a default decisions.toml and an empty journal into `path`.
/// Returns the journal file location.
pub fn init(path: &Path) -> Result<PathBuf> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    if Config::exists_in(path) {
        return Err(DecisionError::Config(format!(
            "Directory already initialized: {}",
            path.display()
        )));
    }

    let config = Config::default();
    config.save_to_dir(path)?;

    // Keep any journal that already exists; only the config is new
    let journal_path = path.join(&config.journal_file);
    if !journal_path.exists() {
        Journal::new(&journal_path).save()?;
    }

    info!(path = %path.display(), "initialized decision journal");
    Ok(journal_path)
}
