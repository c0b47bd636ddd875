#![warn(clippy::pedantic)]

pub mod config;
pub mod driver;
pub mod error;
pub mod render_json;
pub mod render_text;
pub mod stats;

pub use config::{DriverConfig, OutputMode};
pub use driver::{DriverOutput, FeedDriver};
pub use error::DriverError;
pub use render_json::JsonRenderer;
pub use render_text::TextRenderer;
pub use stats::{FeedSummary, FinalStats, ThroughputReport, ThroughputStats, TypeTally};
