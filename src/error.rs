//! Error types for the insight engine

use thiserror::Error;

/// Errors surfaced by the analytics engine
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A statistical operation received zero data points where at least one
    /// is required.
    #[error("empty input: at least one data point is required")]
    EmptyInput,

    /// Paired series passed to correlation must have equal lengths.
    #[error("length mismatch: paired series of {left} and {right} points")]
    LengthMismatch { left: usize, right: usize },

    #[error("failed to parse records: {0}")]
    ParseError(String),

    #[error("invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
