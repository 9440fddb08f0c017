use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the learning dashboard.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A source table could not be opened, read, or understood.
    #[error("Failed to load {table} data from {path}: {reason}")]
    DataLoad {
        table: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// A query referenced a column that does not exist in the merged dataset.
    #[error("Unknown column: {0}")]
    Schema(String),

    /// A numeric operation was requested on a categorical column.
    #[error("Column is not numeric: {0}")]
    NotNumeric(String),

    /// A view name is not one of the dashboard sections.
    #[error("Invalid view: {0}")]
    InvalidView(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A JSON document could not be produced or parsed.
    #[error("Failed to process JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DashboardError {
    /// Build a [`DashboardError::DataLoad`] for `table` read from `path`.
    pub fn data_load(table: &'static str, path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::DataLoad {
            table,
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience alias used throughout the dashboard crates.
pub type Result<T> = std::result::Result<T, DashboardError>;
