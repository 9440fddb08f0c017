//! Presentation-neutral report sections for each dashboard view.
//!
//! A report is a list of [`Section`]s. Sections are built independently: a
//! query that fails turns into an [`SectionBody::Error`] and the rest of the
//! report is still produced.

use std::collections::BTreeMap;

use dashboard_core::error::Result;
use dashboard_core::formatting::{format_metric, format_minutes, format_number, percentage};
use dashboard_core::models::Column;
use serde::Serialize;
use tracing::warn;

use crate::dataset::LearningDataset;

const ENGAGEMENT: &str = "Time_Spent_Minutes";
const COMPLETION: &str = "Completion_Percentage";
const RATING: &str = "Rating";

/// Rating histogram edges (1-star to 5-star buckets).
pub const RATING_EDGES: &[f64] = &[1.0, 2.0, 3.0, 4.0, 5.0];

pub const PREVIEW_ROWS: usize = 5;

// ── Section model ─────────────────────────────────────────────────────────────

/// One titled block of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub body: SectionBody,
}

/// A labelled value, used for bar charts and time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    Scalar { label: String, value: String },
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
    Bars { unit: String, bars: Vec<Bar> },
    Series { unit: String, points: Vec<Bar> },
    Text { lines: Vec<String> },
    Error { message: String },
}

impl Section {
    pub fn new(title: impl Into<String>, body: SectionBody) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.body, SectionBody::Error { .. })
    }
}

/// Build a section, turning a query failure into an error section.
fn section(title: &str, build: impl FnOnce() -> Result<SectionBody>) -> Section {
    match build() {
        Ok(body) => Section::new(title, body),
        Err(e) => {
            warn!("Section \"{}\" failed: {}", title, e);
            Section::new(
                title,
                SectionBody::Error {
                    message: e.to_string(),
                },
            )
        }
    }
}

fn bars(unit: &str, pairs: impl IntoIterator<Item = (String, f64)>) -> SectionBody {
    SectionBody::Bars {
        unit: unit.to_string(),
        bars: pairs
            .into_iter()
            .map(|(label, value)| Bar { label, value })
            .collect(),
    }
}

fn series(unit: &str, points: BTreeMap<String, f64>) -> SectionBody {
    SectionBody::Series {
        unit: unit.to_string(),
        points: points
            .into_iter()
            .map(|(label, value)| Bar { label, value })
            .collect(),
    }
}

/// Age-group means in age order rather than lexical order.
fn by_age_group(ds: &LearningDataset, value_col: &str) -> Result<Vec<(String, f64)>> {
    let mut means = ds.mean_by(Column::AgeGroup.name(), value_col)?;
    Ok(ds
        .age_group_labels()
        .into_iter()
        .filter_map(|label| means.remove(label).map(|v| (label.to_string(), v)))
        .collect())
}

fn course_with_minutes(entry: Option<&(String, f64)>) -> String {
    match entry {
        Some((course, minutes)) => format!("{} ({} avg)", course, format_minutes(*minutes)),
        None => "n/a".to_string(),
    }
}

// ── EDA ───────────────────────────────────────────────────────────────────────

pub fn eda_report(ds: &LearningDataset) -> Vec<Section> {
    vec![
        section("Merged Data Preview", || {
            Ok(SectionBody::Table {
                headers: Column::ALL.iter().map(|c| c.name().to_string()).collect(),
                rows: ds
                    .preview(PREVIEW_ROWS)
                    .iter()
                    .map(|r| Column::ALL.iter().map(|c| r.value(*c).to_string()).collect())
                    .collect(),
            })
        }),
        section("Overall Average Completion Rate", || {
            let mean = ds.mean(COMPLETION)?;
            Ok(SectionBody::Scalar {
                label: "Average completion".to_string(),
                value: format!("{}%", format_metric(mean.unwrap_or(f64::NAN), 2)),
            })
        }),
        section("Highest Engagement Course", || {
            let top = ds.top_n(Column::CourseId.name(), ENGAGEMENT, 1)?;
            Ok(SectionBody::Scalar {
                label: "Course".to_string(),
                value: course_with_minutes(top.first()),
            })
        }),
        section("Lowest Engagement Course", || {
            let bottom = ds.bottom_n(Column::CourseId.name(), ENGAGEMENT, 1)?;
            Ok(SectionBody::Scalar {
                label: "Course".to_string(),
                value: course_with_minutes(bottom.first()),
            })
        }),
        section("Engagement by Course", || {
            let ranked = ds.top_n(Column::CourseId.name(), ENGAGEMENT, usize::MAX)?;
            Ok(bars("min", ranked))
        }),
        section("Engagement by Age Group", || {
            Ok(bars("min", by_age_group(ds, ENGAGEMENT)?))
        }),
        section("Top 5 Locations by Engagement", || {
            Ok(bars("min", ds.top_n(Column::Location.name(), ENGAGEMENT, 5)?))
        }),
        section("Average Feedback Rating per Course", || {
            Ok(bars(
                "rating",
                ds.top_n(Column::CourseId.name(), RATING, usize::MAX)?,
            ))
        }),
        section("Completion vs Rating Correlation", || {
            let matrix = ds.correlation_matrix(&[COMPLETION, RATING])?;
            let mut headers = vec![String::new()];
            headers.extend(matrix.columns.iter().cloned());
            let rows = matrix
                .columns
                .iter()
                .zip(&matrix.values)
                .map(|(name, row)| {
                    std::iter::once(name.clone())
                        .chain(row.iter().map(|v| format_metric(*v, 3)))
                        .collect()
                })
                .collect();
            Ok(SectionBody::Table { headers, rows })
        }),
        section("Top 3 Students by Engagement and Satisfaction", || {
            let ranked = ds.rank_students(&[(ENGAGEMENT, 1.0), (RATING, 1.0)])?;
            let rows = ranked
                .iter()
                .take(3)
                .map(|s| {
                    vec![
                        s.student_id.clone(),
                        format_number(s.metrics[ENGAGEMENT], 1),
                        format_number(s.metrics[RATING], 2),
                        format_number(s.score, 2),
                    ]
                })
                .collect();
            Ok(SectionBody::Table {
                headers: ["Student_ID", "Engagement", "Satisfaction", "ESI"]
                    .iter()
                    .map(|h| h.to_string())
                    .collect(),
                rows,
            })
        }),
        section("Missing Feedback", || {
            let missing = ds.null_count(RATING)?;
            Ok(SectionBody::Scalar {
                label: "Activity rows without a rating".to_string(),
                value: format!(
                    "{} of {} ({}%)",
                    missing,
                    ds.len(),
                    format_number(percentage(missing as f64, ds.len() as f64, 1), 1)
                ),
            })
        }),
    ]
}

// ── Visualizations ────────────────────────────────────────────────────────────

pub fn visualizations_report(ds: &LearningDataset) -> Vec<Section> {
    vec![
        section("Average Engagement by Course", || {
            let ranked = ds.bottom_n(Column::CourseId.name(), ENGAGEMENT, usize::MAX)?;
            Ok(bars("min", ranked))
        }),
        section("Average Engagement by Gender", || {
            Ok(bars("min", ds.mean_by(Column::Gender.name(), ENGAGEMENT)?))
        }),
        section("Average Engagement by Age Group", || {
            Ok(bars("min", by_age_group(ds, ENGAGEMENT)?))
        }),
        section("Feedback Ratings by Course", || {
            let summary = ds.summary_by(Column::CourseId.name(), RATING)?;
            let rows = summary
                .iter()
                .map(|(course, s)| {
                    vec![
                        course.clone(),
                        format_number(s.min, 1),
                        format_number(s.q1, 2),
                        format_number(s.median, 2),
                        format_number(s.q3, 2),
                        format_number(s.max, 1),
                        s.count.to_string(),
                    ]
                })
                .collect();
            Ok(SectionBody::Table {
                headers: ["Course_ID", "Min", "Q1", "Median", "Q3", "Max", "N"]
                    .iter()
                    .map(|h| h.to_string())
                    .collect(),
                rows,
            })
        }),
        section("Rating Distribution", || {
            let bins = ds.bin_counts(RATING, RATING_EDGES)?;
            let last = bins.len().saturating_sub(1);
            Ok(bars(
                "rows",
                bins.iter().enumerate().map(|(i, b)| {
                    let close = if i == last { "]" } else { ")" };
                    (
                        format!("[{}, {}{}", b.lower, b.upper, close),
                        b.count as f64,
                    )
                }),
            ))
        }),
        section("Engagement by Enrolment Month", || {
            Ok(series(
                "min",
                ds.mean_by(Column::EnrolmentMonth.name(), ENGAGEMENT)?,
            ))
        }),
    ]
}

// ── Trends ────────────────────────────────────────────────────────────────────

pub fn trends_report(ds: &LearningDataset) -> Vec<Section> {
    vec![
        section("Monthly Average Engagement Time", || {
            Ok(series("min", ds.mean_by(Column::Month.name(), ENGAGEMENT)?))
        }),
        section("Monthly Course Completion", || {
            Ok(series("%", ds.mean_by(Column::Month.name(), COMPLETION)?))
        }),
        section("Student Enrolments per Month", || {
            let counts = ds
                .enrolments_by_month()
                .into_iter()
                .map(|(m, n)| (m, n as f64))
                .collect();
            Ok(series("students", counts))
        }),
    ]
}

// ── Insights ──────────────────────────────────────────────────────────────────

/// Headline figures computed from the data, shown above the narrative
/// insights.
pub fn insights_report(ds: &LearningDataset) -> Vec<Section> {
    vec![section("Key Figures", || {
        let course = ds.top_n(Column::CourseId.name(), ENGAGEMENT, usize::MAX)?;
        let ages = by_age_group(ds, ENGAGEMENT)?;
        let genders = ds.top_n(Column::Gender.name(), ENGAGEMENT, usize::MAX)?;
        let completion = ds.mean(COMPLETION)?;
        let correlation = ds.correlation(COMPLETION, RATING)?;
        let missing = ds.null_count(RATING)?;

        let mut lines = Vec::new();
        if let (Some(high), Some(low)) = (course.first(), course.last()) {
            lines.push(format!(
                "Highest engagement: {} at {}; lowest: {} at {}",
                high.0,
                format_minutes(high.1),
                low.0,
                format_minutes(low.1)
            ));
        }
        if let Some((group, minutes)) = ages.iter().max_by(|a, b| a.1.total_cmp(&b.1)) {
            lines.push(format!(
                "Most engaged age group: {} ({})",
                group,
                format_minutes(*minutes)
            ));
        }
        if let Some((gender, minutes)) = genders.first() {
            lines.push(format!(
                "Most engaged gender: {} ({})",
                gender,
                format_minutes(*minutes)
            ));
        }
        lines.push(format!(
            "Average completion: {}%",
            format_metric(completion.unwrap_or(f64::NAN), 2)
        ));
        lines.push(format!(
            "Completion/rating correlation: {}",
            format_metric(correlation, 3)
        ));
        lines.push(format!("Activity rows missing feedback: {}", missing));
        Ok(SectionBody::Text { lines })
    })]
}

/// Serialise a report for `--format json`.
pub fn to_json_pretty(view: &str, sections: &[Section]) -> Result<String> {
    #[derive(Serialize)]
    struct Report<'a> {
        view: &'a str,
        sections: &'a [Section],
    }
    Ok(serde_json::to_string_pretty(&Report { view, sections })?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
