//! Shared building blocks for the learning dashboard.
//!
//! Record models and the column schema, the error taxonomy, derived-column
//! rules (age groups, month buckets), statistics helpers, number formatting
//! and CLI settings.

pub mod derive;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod stats;

pub use error::{DashboardError, Result};
pub use models::{CellValue, Column, MergedRecord};
