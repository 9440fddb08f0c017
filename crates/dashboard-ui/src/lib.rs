//! Terminal UI layer for the learning dashboard.
//!
//! Provides themes, the sidebar and bar components, the view dispatch table,
//! section rendering for the TUI and plain-text output, and the application
//! event loop built on [`ratatui`].

pub mod app;
pub mod components;
pub mod narrative;
pub mod section_view;
pub mod text_view;
pub mod themes;
pub mod views;

pub use dashboard_data as data;
pub use views::{ViewKind, VIEWS};
