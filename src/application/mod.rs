//! Application layer - Use cases and orchestration

pub mod demo;
pub mod export;
pub mod init;
pub mod manage_config;
pub mod record;
pub mod review;

pub use export::ExportService;
pub use manage_config::ConfigService;
pub use record::{NewDecision, RecordService};
pub use review::ReviewService;
