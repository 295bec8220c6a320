//! Vitals Insight - Deterministic insight engine for daily wellness metrics
//!
//! The engine consumes an ordered series of daily health records (sleep,
//! steps, heart rate, water, mood) and derives weekly summaries, trend
//! classifications, a weekly-focus recommendation, achievement badges, and
//! rule-based insight text. Every operation is a pure function of its
//! arguments: no shared state, no I/O, safe to call concurrently.
//!
//! ## Modules
//!
//! - **stats**: averaging, split-half trend detection, Pearson correlation
//! - **summary / focus / insights / badges**: windowed derivations over a record series
//! - **report**: aggregate JSON payload for the presentation layer

pub mod badges;
pub mod config;
pub mod error;
pub mod focus;
pub mod insights;
pub mod record;
pub mod report;
pub mod series;
pub mod stats;
pub mod summary;
pub mod types;

pub use badges::{Badge, BadgeKind};
pub use config::AnalyticsConfig;
pub use error::AnalyticsError;
pub use focus::FocusCategory;
pub use record::RecordAdapter;
pub use report::{ReportBuilder, REPORT_VERSION};
pub use stats::{average, pearson_correlation, trend};
pub use types::{DailyRecord, InsightReport, Metric, Polarity, TrendDirection, TrendResult};

/// Engine version embedded in all report payloads
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for report payloads
pub const PRODUCER_NAME: &str = "vitals-insight";
