//! decisions - Personal decision journal
//!
//! Records decisions before their outcomes are known (context, options, the
//! choice, confidence) and reviews them afterwards. Entries persist to a flat
//! JSON file and render to Markdown.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Entry, Journal};
pub use error::DecisionError;
