// File: crates/stream-chart/src/error.rs
// Summary: Error type shared by the chart component and engine adapters.

use thiserror::Error;

/// Errors surfaced by the streaming chart component.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("xRange must be at least 1 sample")]
    InvalidXRange,

    #[error("refresh rate must be a finite, non-negative number of seconds (got {0})")]
    InvalidRefreshRate(f64),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("plot engine error: {0}")]
    Engine(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using [`ChartError`].
pub type Result<T> = std::result::Result<T, ChartError>;
