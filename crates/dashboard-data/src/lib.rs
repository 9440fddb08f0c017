//! Data layer for the learning dashboard.
//!
//! Loads the three CSV tables, joins them into an immutable
//! [`LearningDataset`], answers aggregate queries over it and assembles the
//! per-view report sections.

pub mod aggregator;
pub mod dataset;
pub mod reader;
pub mod reports;

pub use dashboard_core as core;
pub use dataset::LearningDataset;
pub use reader::PipelineConfig;
