//! A single decision record

use crate::domain::timestamp;
use crate::error::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// One option considered while making a decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub name: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Post-decision review. Only the latest review is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "date")]
    pub reviewed_at: String,
    pub outcome: String,
    pub quality: String,
    pub lessons: String,
}

/// A documented decision: context, options, the choice and an optional review.
///
/// Field order and names match the persisted record shape; serializing an
/// `Entry` is its record form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    title: String,
    #[serde(rename = "date")]
    created_at: String,
    context: String,
    options: Vec<DecisionOption>,
    chosen_option: Option<String>,
    reasoning: String,
    #[serde(deserialize_with = "null_as_nan")]
    confidence: f64,
    expected_outcome: String,
    emotional_state: String,
    review: Option<Review>,
}

/// JSON has no NaN or infinity; serde_json writes them as `null`, which
/// reads back as NaN.
fn null_as_nan<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl Entry {
    /// Confidence recorded before any choice is made
    pub const DEFAULT_CONFIDENCE: f64 = 0.5;

    /// Create a new entry stamped with the current local time
    pub fn new(title: impl Into<String>, context: impl Into<String>) -> Self {
        Self::from_stamp(title.into(), context.into(), timestamp::now())
    }

    /// Create an entry with an explicit creation instant
    pub fn with_timestamp(
        title: impl Into<String>,
        context: impl Into<String>,
        at: NaiveDateTime,
    ) -> Self {
        Self::from_stamp(title.into(), context.into(), timestamp::format(at))
    }

    fn from_stamp(title: String, context: String, created_at: String) -> Self {
        Entry {
            title,
            created_at,
            context,
            options: Vec::new(),
            chosen_option: None,
            reasoning: String::new(),
            confidence: Self::DEFAULT_CONFIDENCE,
            expected_outcome: String::new(),
            emotional_state: String::new(),
            review: None,
        }
    }

    /// Append an option. Names are not deduplicated.
    pub fn add_option(&mut self, name: impl Into<String>, pros: Vec<String>, cons: Vec<String>) {
        self.options.push(DecisionOption {
            name: name.into(),
            pros,
            cons,
        });
    }

    /// Record the choice. The name is not checked against `options`.
    pub fn choose(
        &mut self,
        option_name: impl Into<String>,
        reasoning: impl Into<String>,
        confidence: f64,
    ) {
        self.chosen_option = Some(option_name.into());
        self.reasoning = reasoning.into();
        self.confidence = confidence;
    }

    /// Record a review, replacing any earlier one
    pub fn add_review(
        &mut self,
        outcome: impl Into<String>,
        quality: impl Into<String>,
        lessons: impl Into<String>,
    ) {
        self.review = Some(Review {
            reviewed_at: timestamp::now(),
            outcome: outcome.into(),
            quality: quality.into(),
            lessons: lessons.into(),
        });
    }

    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
    }

    pub fn set_expected_outcome(&mut self, expected: impl Into<String>) {
        self.expected_outcome = expected.into();
    }

    pub fn set_emotional_state(&mut self, state: impl Into<String>) {
        self.emotional_state = state.into();
    }

    /// Stored creation timestamp, exactly as persisted
    pub fn date(&self) -> &str {
        &self.created_at
    }

    /// Parse the creation timestamp
    pub fn created_at(&self) -> Result<NaiveDateTime> {
        timestamp::parse(&self.created_at)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn expected_outcome(&self) -> &str {
        &self.expected_outcome
    }

    pub fn emotional_state(&self) -> &str {
        &self.emotional_state
    }

    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    pub fn chosen_option(&self) -> Option<&str> {
        self.chosen_option.as_deref()
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn review(&self) -> Option<&Review> {
        self.review.as_ref()
    }

    pub fn is_reviewed(&self) -> bool {
        self.review.is_some()
    }

    /// Plain key/value snapshot of every field
    pub fn to_record(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
