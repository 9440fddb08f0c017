use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// One row of `students.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Unique student identifier.
    #[serde(rename = "Student_ID")]
    pub student_id: String,
    /// Age in years; empty cells load as `None`.
    #[serde(rename = "Age", default)]
    pub age: Option<f64>,
    #[serde(rename = "Gender", default)]
    pub gender: String,
    #[serde(rename = "Location", default)]
    pub location: String,
    /// Raw enrolment date string, parsed lazily by the month derivation.
    #[serde(rename = "Enrolment_Date", default)]
    pub enrolment_date: String,
}

/// One row of `course_activity.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Foreign key into the student table.
    #[serde(rename = "Student_ID")]
    pub student_id: String,
    #[serde(rename = "Course_ID")]
    pub course_id: String,
    /// Minutes spent on the course in this activity entry. Blank cells
    /// load as `None`; a literal `NaN` loads as a number and reads as null.
    #[serde(rename = "Time_Spent_Minutes", default)]
    pub time_spent_minutes: Option<f64>,
    /// Completion in percent (0–100).
    #[serde(rename = "Completion_Percentage", default)]
    pub completion_percentage: Option<f64>,
    /// Raw activity date string.
    #[serde(rename = "Date", default)]
    pub date: String,
}

/// One row of `feedback.csv`, keyed by (`Student_ID`, `Course_ID`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    #[serde(rename = "Student_ID")]
    pub student_id: String,
    #[serde(rename = "Course_ID")]
    pub course_id: String,
    /// Rating on the platform's numeric scale.
    #[serde(rename = "Rating")]
    pub rating: f64,
}

/// An activity row joined with its student and feedback rows.
///
/// Student and feedback fields are `None` when the left join found no match.
/// The last three fields are derived once when the dataset is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRecord {
    pub student_id: String,
    pub course_id: String,
    pub time_spent_minutes: Option<f64>,
    pub completion_percentage: Option<f64>,
    pub date: String,
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub enrolment_date: Option<String>,
    pub rating: Option<f64>,
    pub age_group: String,
    pub month: Option<String>,
    pub enrolment_month: Option<String>,
}

impl MergedRecord {
    /// Read the cell for `column`.
    pub fn value(&self, column: Column) -> CellValue<'_> {
        match column {
            Column::StudentId => CellValue::Text(&self.student_id),
            Column::CourseId => CellValue::Text(&self.course_id),
            Column::TimeSpentMinutes => CellValue::number(self.time_spent_minutes),
            Column::CompletionPercentage => CellValue::number(self.completion_percentage),
            Column::Date => CellValue::text(&self.date),
            Column::Age => CellValue::number(self.age),
            Column::Gender => CellValue::opt_text(self.gender.as_deref()),
            Column::Location => CellValue::opt_text(self.location.as_deref()),
            Column::EnrolmentDate => CellValue::opt_text(self.enrolment_date.as_deref()),
            Column::Rating => CellValue::number(self.rating),
            Column::AgeGroup => CellValue::Text(&self.age_group),
            Column::Month => CellValue::opt_text(self.month.as_deref()),
            Column::EnrolmentMonth => CellValue::opt_text(self.enrolment_month.as_deref()),
        }
    }
}

// ── CellValue ─────────────────────────────────────────────────────────────────

/// A borrowed view of a single cell in the merged dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Number(f64),
    Null,
}

impl<'a> CellValue<'a> {
    fn text(s: &'a str) -> Self {
        if s.is_empty() {
            CellValue::Null
        } else {
            CellValue::Text(s)
        }
    }

    fn opt_text(s: Option<&'a str>) -> Self {
        s.map(Self::text).unwrap_or(CellValue::Null)
    }

    fn number(n: Option<f64>) -> Self {
        match n {
            Some(v) if !v.is_nan() => CellValue::Number(v),
            _ => CellValue::Null,
        }
    }

    /// The numeric payload, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// String form used as a group-by key. `None` for null cells.
    ///
    /// Integral numbers print without a fractional part (`17`, not `17.0`).
    pub fn as_key(&self) -> Option<String> {
        match self {
            CellValue::Text(s) => Some((*s).to_string()),
            CellValue::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => {
                Some(format!("{}", *v as i64))
            }
            CellValue::Number(v) => Some(v.to_string()),
            CellValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_key() {
            Some(s) => f.write_str(&s),
            None => f.write_str("-"),
        }
    }
}

// ── Column ────────────────────────────────────────────────────────────────────

/// Every column of the merged dataset, including derived ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    StudentId,
    CourseId,
    TimeSpentMinutes,
    CompletionPercentage,
    Date,
    Age,
    Gender,
    Location,
    EnrolmentDate,
    Rating,
    AgeGroup,
    Month,
    EnrolmentMonth,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 13] = [
        Column::StudentId,
        Column::CourseId,
        Column::TimeSpentMinutes,
        Column::CompletionPercentage,
        Column::Date,
        Column::Age,
        Column::Gender,
        Column::Location,
        Column::EnrolmentDate,
        Column::Rating,
        Column::AgeGroup,
        Column::Month,
        Column::EnrolmentMonth,
    ];

    /// The header name as it appears in the source CSV files.
    pub fn name(&self) -> &'static str {
        match self {
            Column::StudentId => "Student_ID",
            Column::CourseId => "Course_ID",
            Column::TimeSpentMinutes => "Time_Spent_Minutes",
            Column::CompletionPercentage => "Completion_Percentage",
            Column::Date => "Date",
            Column::Age => "Age",
            Column::Gender => "Gender",
            Column::Location => "Location",
            Column::EnrolmentDate => "Enrolment_Date",
            Column::Rating => "Rating",
            Column::AgeGroup => "Age_Group",
            Column::Month => "Month",
            Column::EnrolmentMonth => "Enrolment_Month",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Column::Age | Column::TimeSpentMinutes | Column::CompletionPercentage | Column::Rating
        )
    }

    /// Resolve a column by header name, failing with [`DashboardError::Schema`].
    pub fn lookup(name: &str) -> crate::error::Result<Column> {
        name.parse()
    }

    /// Resolve a numeric column, failing with [`DashboardError::NotNumeric`]
    /// for categorical ones.
    pub fn lookup_numeric(name: &str) -> crate::error::Result<Column> {
        let column = Self::lookup(name)?;
        if column.is_numeric() {
            Ok(column)
        } else {
            Err(DashboardError::NotNumeric(name.to_string()))
        }
    }
}

impl FromStr for Column {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| DashboardError::Schema(s.to_string()))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
