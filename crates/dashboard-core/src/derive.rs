//! Derived columns: age groups and month buckets.
//!
//! Both derivations are pure and are applied exactly once per merged record
//! when the dataset is built.

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{DashboardError, Result};

/// Label used for rows without a usable age.
pub const UNKNOWN_AGE_GROUP: &str = "Unknown";

/// Date patterns tried, in order, when bucketing a date string by month.
pub const DEFAULT_DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%Y/%m/%d"];

// ── AgeBuckets ────────────────────────────────────────────────────────────────

/// Fixed age boundaries mapping a numeric age to a categorical label.
///
/// Each bound is an exclusive upper limit; ages at or above the last bound
/// fall into the overflow label. There is no upper validation.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeBuckets {
    bounds: Vec<(f64, String)>,
    overflow: String,
}

impl Default for AgeBuckets {
    /// `<18`, `18-25`, `26-35`, `36-50`, `50+`.
    fn default() -> Self {
        Self {
            bounds: vec![
                (18.0, "<18".to_string()),
                (26.0, "18-25".to_string()),
                (36.0, "26-35".to_string()),
                (51.0, "36-50".to_string()),
            ],
            overflow: "50+".to_string(),
        }
    }
}

impl AgeBuckets {
    /// Build buckets from `(exclusive_upper_bound, label)` pairs.
    ///
    /// Bounds must be strictly ascending and finite.
    pub fn new(bounds: Vec<(f64, String)>, overflow: impl Into<String>) -> Result<Self> {
        if bounds.iter().any(|(b, _)| !b.is_finite()) {
            return Err(DashboardError::Config(
                "age bucket bounds must be finite".to_string(),
            ));
        }
        if bounds.windows(2).any(|w| w[0].0 >= w[1].0) {
            return Err(DashboardError::Config(
                "age bucket bounds must be strictly ascending".to_string(),
            ));
        }
        Ok(Self {
            bounds,
            overflow: overflow.into(),
        })
    }

    /// Map `age` to its bucket label. Missing or NaN ages map to `"Unknown"`.
    pub fn bucket(&self, age: Option<f64>) -> &str {
        let Some(age) = age.filter(|a| !a.is_nan()) else {
            return UNKNOWN_AGE_GROUP;
        };
        self.bounds
            .iter()
            .find(|(bound, _)| age < *bound)
            .map(|(_, label)| label.as_str())
            .unwrap_or(self.overflow.as_str())
    }

    /// All labels in ascending age order, followed by `"Unknown"`.
    pub fn labels(&self) -> Vec<&str> {
        self.bounds
            .iter()
            .map(|(_, l)| l.as_str())
            .chain([self.overflow.as_str(), UNKNOWN_AGE_GROUP])
            .collect()
    }
}

// ── Month bucketing ───────────────────────────────────────────────────────────

/// Parse `raw` with the first matching pattern in `formats`.
///
/// Returns `None` for empty or unparseable input.
pub fn parse_date(raw: &str, formats: &[&str]) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Truncate a date string to its `YYYY-MM` month.
///
/// Unparseable strings yield `None` (with a warning) and are excluded from
/// month-based aggregates.
pub fn month_bucket(raw: &str, formats: &[&str]) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    match parse_date(raw, formats) {
        Some(date) => Some(date.format("%Y-%m").to_string()),
        None => {
            warn!("Could not parse date \"{}\"; excluded from monthly buckets", raw);
            None
        }
    }
}

// ── Derivation ────────────────────────────────────────────────────────────────

/// Derived values attached to one merged record.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedColumns {
    pub age_group: String,
    pub month: Option<String>,
    pub enrolment_month: Option<String>,
}

/// The single derivation step applied to every merged record.
#[derive(Debug, Clone)]
pub struct Derivation {
    pub age_buckets: AgeBuckets,
    pub date_formats: Vec<String>,
}

impl Default for Derivation {
    fn default() -> Self {
        Self {
            age_buckets: AgeBuckets::default(),
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Derivation {
    /// Compute age group, activity month and enrolment month.
    pub fn apply(
        &self,
        age: Option<f64>,
        activity_date: &str,
        enrolment_date: Option<&str>,
    ) -> DerivedColumns {
        let formats: Vec<&str> = self.date_formats.iter().map(String::as_str).collect();
        DerivedColumns {
            age_group: self.age_buckets.bucket(age).to_string(),
            month: month_bucket(activity_date, &formats),
            enrolment_month: enrolment_date.and_then(|d| month_bucket(d, &formats)),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
