//! The five dashboard views and the table that maps each one to the function
//! building its sections.

use std::fmt;
use std::str::FromStr;

use dashboard_core::error::DashboardError;
use dashboard_data::reports::{self, Section};
use dashboard_data::LearningDataset;

use crate::narrative;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Eda,
    Visualizations,
    Insights,
    Trends,
    Recommendations,
}

impl ViewKind {
    /// CLI spelling, e.g. `"eda"`.
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Eda => "eda",
            ViewKind::Visualizations => "visualizations",
            ViewKind::Insights => "insights",
            ViewKind::Trends => "trends",
            ViewKind::Recommendations => "recommendations",
        }
    }

    /// Position of this view in [`VIEWS`].
    pub fn index(&self) -> usize {
        VIEWS.iter().position(|v| v.kind == *self).unwrap_or(0)
    }
}

impl FromStr for ViewKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VIEWS
            .iter()
            .map(|v| v.kind)
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DashboardError::InvalidView(s.to_string()))
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Dispatch table ────────────────────────────────────────────────────────────

pub struct ViewEntry {
    pub kind: ViewKind,
    pub title: &'static str,
    pub build: fn(&LearningDataset) -> Vec<Section>,
}

/// Sidebar order.
pub const VIEWS: &[ViewEntry] = &[
    ViewEntry {
        kind: ViewKind::Eda,
        title: "Exploratory Data Analysis",
        build: reports::eda_report,
    },
    ViewEntry {
        kind: ViewKind::Visualizations,
        title: "Visualizations",
        build: reports::visualizations_report,
    },
    ViewEntry {
        kind: ViewKind::Insights,
        title: "Key Insights",
        build: build_insights,
    },
    ViewEntry {
        kind: ViewKind::Trends,
        title: "Trends Over Time",
        build: reports::trends_report,
    },
    ViewEntry {
        kind: ViewKind::Recommendations,
        title: "Recommendations",
        build: build_recommendations,
    },
];

pub fn entry(kind: ViewKind) -> &'static ViewEntry {
    &VIEWS[kind.index()]
}

/// Compute the sections of `kind` from scratch.
pub fn build_view(kind: ViewKind, ds: &LearningDataset) -> Vec<Section> {
    (entry(kind).build)(ds)
}

fn build_insights(ds: &LearningDataset) -> Vec<Section> {
    let mut sections = reports::insights_report(ds);
    sections.extend(narrative::insights());
    sections
}

fn build_recommendations(_ds: &LearningDataset) -> Vec<Section> {
    narrative::recommendations()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
