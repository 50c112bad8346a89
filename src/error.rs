//! Error types for decisions

use thiserror::Error;

/// Main error type for the decision journal
#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("Entry not found: #{0}")]
    EntryNotFound(usize),

    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DecisionError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DecisionError::Config(_) => 2,
            DecisionError::EntryNotFound(_) => 3,
            DecisionError::InvalidTimestamp { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DecisionError::EntryNotFound(index) => {
                format!(
                    "No decision with number {}\n\n\
                    Suggestions:\n\
                    • Run 'decisions list' to see recorded decisions\n\
                    • Decisions are numbered from 1 in the order they were added",
                    index
                )
            }
            DecisionError::InvalidTimestamp { value, .. } => {
                format!(
                    "Invalid timestamp in journal: '{}'\n\n\
                    Expected ISO-8601, e.g. 2025-01-17T09:30:00 or 2025-01-17\n\
                    Fix the \"date\" field in the journal file and retry",
                    value
                )
            }
            DecisionError::Json(e) => {
                format!(
                    "{}\n\n\
                    The journal file must be a JSON array of decision records.\n\
                    Point at another file with --file or DECISIONS_FILE",
                    e
                )
            }
            DecisionError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: decisions config review_after_days 14",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DecisionError
pub type Result<T> = std::result::Result<T, DecisionError>;
