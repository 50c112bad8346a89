//! Domain layer - Decision records and journal analytics

pub mod entry;
pub mod journal;
pub mod markdown;
pub mod timestamp;

pub use entry::{DecisionOption, Entry, Review};
pub use journal::Journal;
