//! Journal aggregate root

use crate::domain::Entry;
use crate::error::{DecisionError, Result};
use crate::infrastructure::store;
use chrono::{Duration, Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default journal file name
pub const DEFAULT_JOURNAL_FILE: &str = "decisions.json";

/// Quality label that counts toward the calibration score
pub const GOOD_QUALITY: &str = "good";

/// An ordered collection of decision entries bound to a JSON file
#[derive(Debug, Clone)]
pub struct Journal {
    filepath: PathBuf,
    entries: Vec<Entry>,
}

impl Default for Journal {
    fn default() -> Self {
        Journal::new(DEFAULT_JOURNAL_FILE)
    }
}

impl Journal {
    /// Create an empty journal bound to `filepath`. Nothing is read or written.
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Journal {
            filepath: filepath.into(),
            entries: Vec::new(),
        }
    }

    /// Load a journal previously written by `save`
    pub fn load(filepath: impl Into<PathBuf>) -> Result<Self> {
        let filepath = filepath.into();
        let entries = store::read_entries(&filepath)?;
        debug!(path = %filepath.display(), count = entries.len(), "loaded journal");
        Ok(Journal { filepath, entries })
    }

    /// Load the journal if its file exists, otherwise start empty
    pub fn open(filepath: impl Into<PathBuf>) -> Result<Self> {
        let filepath = filepath.into();
        if filepath.exists() {
            Self::load(filepath)
        } else {
            debug!(path = %filepath.display(), "journal file missing, starting empty");
            Ok(Self::new(filepath))
        }
    }

    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry and return its 1-based number
    pub fn add_entry(&mut self, entry: Entry) -> usize {
        info!(title = %entry.title(), "adding decision");
        self.entries.push(entry);
        self.entries.len()
    }

    /// Look up an entry by its 1-based number
    pub fn entry(&self, number: usize) -> Result<&Entry> {
        number
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .ok_or(DecisionError::EntryNotFound(number))
    }

    /// Mutable lookup by 1-based number
    pub fn entry_mut(&mut self, number: usize) -> Result<&mut Entry> {
        number
            .checked_sub(1)
            .and_then(|i| self.entries.get_mut(i))
            .ok_or(DecisionError::EntryNotFound(number))
    }

    /// Overwrite the journal file with every entry as a pretty JSON array
    pub fn save(&self) -> Result<()> {
        store::write_entries(&self.filepath, &self.entries)?;
        info!(path = %self.filepath.display(), count = self.entries.len(), "saved journal");
        Ok(())
    }

    /// Unreviewed entries created more than `days` days ago
    pub fn pending_reviews(&self, days: i64) -> Result<Vec<&Entry>> {
        self.pending_reviews_at(Local::now().naive_local(), days)
    }

    /// `pending_reviews` against an explicit clock
    pub fn pending_reviews_at(&self, now: NaiveDateTime, days: i64) -> Result<Vec<&Entry>> {
        Ok(self
            .pending_numbered_at(now, days)?
            .into_iter()
            .map(|(_, entry)| entry)
            .collect())
    }

    /// Pending entries paired with their 1-based numbers
    pub fn pending_numbered(&self, days: i64) -> Result<Vec<(usize, &Entry)>> {
        self.pending_numbered_at(Local::now().naive_local(), days)
    }

    fn pending_numbered_at(&self, now: NaiveDateTime, days: i64) -> Result<Vec<(usize, &Entry)>> {
        let cutoff = Duration::try_days(days)
            .and_then(|window| now.checked_sub_signed(window))
            .ok_or_else(|| {
                DecisionError::Config(format!("Review window out of range: {} days", days))
            })?;
        debug!(%cutoff, "collecting pending reviews");

        let mut pending = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            // Reviewed entries are skipped before their timestamp is parsed
            if entry.is_reviewed() {
                continue;
            }
            if entry.created_at()? < cutoff {
                pending.push((i + 1, entry));
            }
        }
        Ok(pending)
    }

    /// Fraction of reviewed entries whose quality is "good".
    /// `None` when nothing has been reviewed.
    pub fn calibration_score(&self) -> Option<f64> {
        let reviewed: Vec<_> = self.entries.iter().filter_map(Entry::review).collect();
        if reviewed.is_empty() {
            return None;
        }
        let good = reviewed
            .iter()
            .filter(|review| review.quality == GOOD_QUALITY)
            .count();
        Some(good as f64 / reviewed.len() as f64)
    }
}
