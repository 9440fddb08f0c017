//! CSV loading for the three source tables.
//!
//! Reads `students.csv`, `course_activity.csv` and `feedback.csv` from a
//! configured directory and deserialises them into typed records.

use std::path::{Path, PathBuf};

use dashboard_core::derive::Derivation;
use dashboard_core::error::{DashboardError, Result};
use dashboard_core::models::{ActivityRecord, FeedbackRecord, StudentRecord};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const STUDENTS_FILE: &str = "students.csv";
pub const ACTIVITY_FILE: &str = "course_activity.csv";
pub const FEEDBACK_FILE: &str = "feedback.csv";

const STUDENT_COLUMNS: &[&str] = &["Student_ID", "Age", "Gender", "Location", "Enrolment_Date"];
const ACTIVITY_COLUMNS: &[&str] = &[
    "Student_ID",
    "Course_ID",
    "Time_Spent_Minutes",
    "Completion_Percentage",
    "Date",
];
const FEEDBACK_COLUMNS: &[&str] = &["Student_ID", "Course_ID", "Rating"];

// ── PipelineConfig ────────────────────────────────────────────────────────────

/// Everything the pipeline needs to build a dataset: file locations and the
/// derivation rules.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub data_dir: PathBuf,
    pub students_file: String,
    pub activity_file: String,
    pub feedback_file: String,
    pub derivation: Derivation,
}

impl PipelineConfig {
    /// Default file names under `data_dir` with the default derivation.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            students_file: STUDENTS_FILE.to_string(),
            activity_file: ACTIVITY_FILE.to_string(),
            feedback_file: FEEDBACK_FILE.to_string(),
            derivation: Derivation::default(),
        }
    }

    /// Replace the derivation rules (age buckets, date formats).
    pub fn with_derivation(mut self, derivation: Derivation) -> Self {
        self.derivation = derivation;
        self
    }

    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(&self.students_file)
    }

    pub fn activity_path(&self) -> PathBuf {
        self.data_dir.join(&self.activity_file)
    }

    pub fn feedback_path(&self) -> PathBuf {
        self.data_dir.join(&self.feedback_file)
    }
}

// ── SourceTables ──────────────────────────────────────────────────────────────

/// The three tables exactly as read from disk.
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub students: Vec<StudentRecord>,
    pub activity: Vec<ActivityRecord>,
    pub feedback: Vec<FeedbackRecord>,
}

/// Load all three tables. Any missing or malformed file is fatal.
pub fn load_tables(config: &PipelineConfig) -> Result<SourceTables> {
    let students = read_table("students", &config.students_path(), STUDENT_COLUMNS)?;
    let activity = read_table("activity", &config.activity_path(), ACTIVITY_COLUMNS)?;
    let feedback = read_table("feedback", &config.feedback_path(), FEEDBACK_COLUMNS)?;

    debug!(
        "Loaded {} students, {} activity rows, {} feedback rows from {}",
        students.len(),
        activity.len(),
        feedback.len(),
        config.data_dir.display()
    );

    Ok(SourceTables {
        students,
        activity,
        feedback,
    })
}

/// Read one CSV table with a header row into typed records.
///
/// Fails with [`DashboardError::DataLoad`] when the file cannot be opened or
/// a `required` column is absent from the header. Rows that fail to parse
/// are skipped with a warning each.
pub fn read_table<T: DeserializeOwned>(
    table: &'static str,
    path: &Path,
    required: &[&str],
) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| DashboardError::data_load(table, path, e))?;

    let headers = rdr
        .headers()
        .map_err(|e| DashboardError::data_load(table, path, e))?
        .clone();

    if let Some(missing) = required.iter().find(|c| !headers.iter().any(|h| h == **c)) {
        return Err(DashboardError::data_load(
            table,
            path,
            format!("missing required column {}", missing),
        ));
    }

    let mut rows: Vec<T> = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.deserialize::<T>() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                skipped += 1;
                let line = e
                    .position()
                    .map(|p| p.line().to_string())
                    .unwrap_or_else(|| "?".to_string());
                warn!(
                    "Skipping malformed {} row at {}:{}: {}",
                    table,
                    path.display(),
                    line,
                    e
                );
            }
        }
    }

    if skipped > 0 {
        warn!(
            "{}: {} rows read, {} malformed rows skipped",
            path.display(),
            rows.len(),
            skipped
        );
    }

    Ok(rows)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn write_all(dir: &Path) {
        write_csv(
            dir,
            STUDENTS_FILE,
            "Student_ID,Age,Gender,Location,Enrolment_Date\n\
             S1,17,Female,Lagos,10/01/2024\n\
             S2,,Male,Paris,2024-02-03\n",
        );
        write_csv(
            dir,
            ACTIVITY_FILE,
            "Student_ID,Course_ID,Date,Time_Spent_Minutes,Completion_Percentage\n\
             S1,C1,05/03/2024,100,80.5\n\
             S2,C1,06/03/2024,50,40\n",
        );
        write_csv(
            dir,
            FEEDBACK_FILE,
            "Student_ID,Course_ID,Rating\nS1,C1,4\n",
        );
    }

    // ── load_tables ───────────────────────────────────────────────────────────

    #[test]
    fn test_load_tables_basic() {
        let dir = TempDir::new().unwrap();
        write_all(dir.path());

        let tables = load_tables(&PipelineConfig::new(dir.path())).unwrap();
        assert_eq!(tables.students.len(), 2);
        assert_eq!(tables.activity.len(), 2);
        assert_eq!(tables.feedback.len(), 1);
        assert_eq!(tables.students[0].age, Some(17.0));
        assert_eq!(tables.students[1].age, None);
        assert_eq!(tables.activity[0].completion_percentage, Some(80.5));
    }

    #[test]
    fn test_load_tables_missing_file_is_data_load_error() {
        let dir = TempDir::new().unwrap();
        write_all(dir.path());
        std::fs::remove_file(dir.path().join(FEEDBACK_FILE)).unwrap();

        let err = load_tables(&PipelineConfig::new(dir.path())).unwrap_err();
        assert!(matches!(err, DashboardError::DataLoad { table: "feedback", .. }));
    }

    #[test]
    fn test_load_tables_custom_file_names() {
        let dir = TempDir::new().unwrap();
        write_all(dir.path());
        std::fs::rename(
            dir.path().join(STUDENTS_FILE),
            dir.path().join("learners.csv"),
        )
        .unwrap();

        let mut config = PipelineConfig::new(dir.path());
        config.students_file = "learners.csv".to_string();
        assert_eq!(load_tables(&config).unwrap().students.len(), 2);
    }

    // ── read_table ────────────────────────────────────────────────────────────

    #[test]
    fn test_read_table_missing_column() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "f.csv", "Student_ID,Course_ID\nS1,C1\n");

        let err = read_table::<FeedbackRecord>("feedback", &path, FEEDBACK_COLUMNS).unwrap_err();
        assert!(err.to_string().contains("missing required column Rating"));
    }

    #[test]
    fn test_read_table_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "f.csv", "");

        let err = read_table::<FeedbackRecord>("feedback", &path, FEEDBACK_COLUMNS).unwrap_err();
        assert!(matches!(err, DashboardError::DataLoad { .. }));
    }

    #[test]
    fn test_read_table_header_only() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "f.csv", "Student_ID,Course_ID,Rating\n");

        let rows = read_table::<FeedbackRecord>("feedback", &path, FEEDBACK_COLUMNS).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_read_table_skips_malformed_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "f.csv",
            "Student_ID,Course_ID,Rating\nS1,C1,4\nS2,C1,excellent\nS3,C2,5\n",
        );

        let rows = read_table::<FeedbackRecord>("feedback", &path, FEEDBACK_COLUMNS).unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.student_id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S3"]);
    }

    #[test]
    fn test_read_activity_keeps_rows_with_missing_metrics() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            ACTIVITY_FILE,
            "Student_ID,Course_ID,Date,Time_Spent_Minutes,Completion_Percentage
             S1,C1,05/03/2024,100,50
             S1,C2,06/03/2024,,70
             S2,C1,07/03/2024,NaN,
",
        );

        let rows = read_table::<ActivityRecord>("activity", &path, ACTIVITY_COLUMNS).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].time_spent_minutes, None);
        assert_eq!(rows[1].completion_percentage, Some(70.0));
        assert!(rows[2].time_spent_minutes.is_some_and(f64::is_nan));
        assert_eq!(rows[2].completion_percentage, None);
    }

    #[test]
    fn test_read_table_trims_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "f.csv",
            "Student_ID , Course_ID , Rating\n S1 , C1 , 3.5 \n",
        );

        let rows = read_table::<FeedbackRecord>("feedback", &path, FEEDBACK_COLUMNS).unwrap();
        assert_eq!(rows[0].student_id, "S1");
        assert_eq!(rows[0].rating, 3.5);
    }
}
