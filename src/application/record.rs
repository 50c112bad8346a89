//! Record decision use case

use crate::domain::{Entry, Journal};
use crate::error::Result;
use tracing::info;

/// Fields captured when a decision is first written down
#[derive(Debug, Clone, Default)]
pub struct NewDecision {
    pub title: String,
    pub context: String,
    pub expected_outcome: String,
    pub emotional_state: String,
}

/// Service for creating and filling in decisions. Every change is saved.
pub struct RecordService {
    journal: Journal,
}

impl RecordService {
    pub fn new(journal: Journal) -> Self {
        RecordService { journal }
    }

    /// Add a new decision and return its number
    pub fn add(&mut self, decision: NewDecision) -> Result<usize> {
        let mut entry = Entry::new(decision.title, decision.context);
        entry.set_expected_outcome(decision.expected_outcome);
        entry.set_emotional_state(decision.emotional_state);

        let number = self.journal.add_entry(entry);
        self.journal.save()?;
        Ok(number)
    }

    pub fn add_option(
        &mut self,
        number: usize,
        name: &str,
        pros: Vec<String>,
        cons: Vec<String>,
    ) -> Result<()> {
        self.journal.entry_mut(number)?.add_option(name, pros, cons);
        info!(number, option = name, "added option");
        self.journal.save()
    }

    pub fn choose(
        &mut self,
        number: usize,
        option: &str,
        reasoning: &str,
        confidence: f64,
    ) -> Result<()> {
        self.journal
            .entry_mut(number)?
            .choose(option, reasoning, confidence);
        info!(number, option, confidence, "recorded choice");
        self.journal.save()
    }

    pub fn set_expected_outcome(&mut self, number: usize, expected: &str) -> Result<()> {
        self.journal.entry_mut(number)?.set_expected_outcome(expected);
        info!(number, "updated expected outcome");
        self.journal.save()
    }
}
