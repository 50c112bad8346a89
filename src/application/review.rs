//! Review decisions use case

use crate::domain::{Entry, Journal};
use crate::error::Result;
use tracing::info;

/// Service for post-decision reviews and the metrics built on them
pub struct ReviewService {
    journal: Journal,
}

impl ReviewService {
    pub fn new(journal: Journal) -> Self {
        ReviewService { journal }
    }

    /// Record (or replace) the review of a decision and save
    pub fn review(&mut self, number: usize, outcome: &str, quality: &str, lessons: &str) -> Result<()> {
        self.journal
            .entry_mut(number)?
            .add_review(outcome, quality, lessons);
        info!(number, quality, "recorded review");
        self.journal.save()
    }

    /// Numbered decisions older than `days` that still lack a review
    pub fn pending(&self, days: i64) -> Result<Vec<(usize, &Entry)>> {
        self.journal.pending_numbered(days)
    }

    pub fn calibration(&self) -> Option<f64> {
        self.journal.calibration_score()
    }

    pub fn reviewed_count(&self) -> usize {
        self.journal.entries().iter().filter(|e| e.is_reviewed()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};
    use tempfile::TempDir;

    fn journal_with(temp: &TempDir, entries: Vec<Entry>) -> Journal {
        let mut journal = Journal::new(temp.path().join("decisions.json"));
        for entry in entries {
            journal.add_entry(entry);
        }
        journal
    }

    #[test]
    fn test_review_persists_latest_only() {
        let temp = TempDir::new().unwrap();
        let mut service = ReviewService::new(journal_with(&temp, vec![Entry::new("Hire", "")]));

        service.review(1, "Rough start", "bad", "Onboard better").unwrap();
        service.review(1, "Great hire", "good", "Trust the process").unwrap();

        let saved = Journal::load(temp.path().join("decisions.json")).unwrap();
        let review = saved.entry(1).unwrap().review().unwrap();
        assert_eq!(review.outcome, "Great hire");
        assert_eq!(review.quality, "good");
        assert_eq!(service.reviewed_count(), 1);
        assert_eq!(service.calibration(), Some(1.0));
    }

    #[test]
    fn test_pending_numbers() {
        let temp = TempDir::new().unwrap();
        let old = (Local::now() - Duration::days(45)).naive_local();
        let mut reviewed = Entry::with_timestamp("Old reviewed", "", old);
        reviewed.add_review("ok", "good", "");

        let service = ReviewService::new(journal_with(
            &temp,
            vec![
                Entry::new("Fresh", ""),
                reviewed,
                Entry::with_timestamp("Old open", "", old),
            ],
        ));

        let pending = service.pending(30).unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].0, 3);
        assert_eq!(pending[0].1.title(), "Old open");
    }
}
