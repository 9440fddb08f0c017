//! The joined, immutable working dataset.
//!
//! [`LearningDataset`] is built once from the three source tables: activity
//! rows are left-joined to students on `Student_ID`, then to feedback on
//! (`Student_ID`, `Course_ID`), and every merged row gets its derived columns.
//! All query methods take `&self`.

use std::collections::HashMap;

use dashboard_core::derive::{AgeBuckets, Derivation};
use dashboard_core::error::Result;
use dashboard_core::models::{MergedRecord, StudentRecord};
use tracing::{debug, warn};

use crate::reader::{load_tables, PipelineConfig, SourceTables};

/// A student row with its derived enrolment month.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub record: StudentRecord,
    pub enrolment_month: Option<String>,
}

/// Merged activity/student/feedback rows plus the student table.
#[derive(Debug, Clone)]
pub struct LearningDataset {
    pub(crate) records: Vec<MergedRecord>,
    pub(crate) students: Vec<StudentRow>,
    pub(crate) age_buckets: AgeBuckets,
}

impl LearningDataset {
    /// Load the three tables described by `config` and build the dataset.
    pub fn load(config: &PipelineConfig) -> Result<Self> {
        let tables = load_tables(config)?;
        Ok(Self::from_tables(tables, &config.derivation))
    }

    /// Join and derive from already-loaded tables.
    pub fn from_tables(tables: SourceTables, derivation: &Derivation) -> Self {
        let SourceTables {
            students,
            activity,
            feedback,
        } = tables;

        // First occurrence wins so the joins never multiply activity rows.
        let mut student_index: HashMap<&str, &StudentRecord> = HashMap::new();
        let mut duplicate_students = 0usize;
        for s in &students {
            if student_index.insert_if_absent(s.student_id.as_str(), s) {
                duplicate_students += 1;
            }
        }

        let mut rating_index: HashMap<(&str, &str), f64> = HashMap::new();
        let mut duplicate_feedback = 0usize;
        for f in &feedback {
            let key = (f.student_id.as_str(), f.course_id.as_str());
            if rating_index.insert_if_absent(key, f.rating) {
                duplicate_feedback += 1;
            }
        }

        if duplicate_students > 0 {
            warn!(
                "{} duplicate Student_ID rows in student table; first occurrence used",
                duplicate_students
            );
        }
        if duplicate_feedback > 0 {
            warn!(
                "{} duplicate (Student_ID, Course_ID) rows in feedback table; first occurrence used",
                duplicate_feedback
            );
        }

        let mut unmatched_students = 0usize;
        let mut unmatched_feedback = 0usize;

        let records: Vec<MergedRecord> = activity
            .into_iter()
            .map(|a| {
                let student = student_index.get(a.student_id.as_str()).copied();
                let rating = rating_index
                    .get(&(a.student_id.as_str(), a.course_id.as_str()))
                    .copied();
                if student.is_none() {
                    unmatched_students += 1;
                }
                if rating.is_none() {
                    unmatched_feedback += 1;
                }

                let age = student.and_then(|s| s.age);
                let enrolment_date = student.map(|s| s.enrolment_date.clone());
                let derived = derivation.apply(age, &a.date, enrolment_date.as_deref());

                MergedRecord {
                    student_id: a.student_id,
                    course_id: a.course_id,
                    time_spent_minutes: a.time_spent_minutes,
                    completion_percentage: a.completion_percentage,
                    date: a.date,
                    age,
                    gender: student.map(|s| s.gender.clone()),
                    location: student.map(|s| s.location.clone()),
                    enrolment_date,
                    rating,
                    age_group: derived.age_group,
                    month: derived.month,
                    enrolment_month: derived.enrolment_month,
                }
            })
            .collect();

        debug!(
            "Merged {} activity rows ({} without student, {} without feedback)",
            records.len(),
            unmatched_students,
            unmatched_feedback
        );

        let students: Vec<StudentRow> = students
            .into_iter()
            .map(|record| {
                let enrolment_month = derivation
                    .apply(record.age, "", Some(&record.enrolment_date))
                    .enrolment_month;
                StudentRow {
                    record,
                    enrolment_month,
                }
            })
            .collect();

        Self {
            records,
            students,
            age_buckets: derivation.age_buckets.clone(),
        }
    }

    /// All merged rows, in activity-file order.
    pub fn records(&self) -> &[MergedRecord] {
        &self.records
    }

    /// The student table (including rows no activity refers to).
    pub fn students(&self) -> &[StudentRow] {
        &self.students
    }

    /// Age-group labels in ascending age order, `Unknown` last.
    pub fn age_group_labels(&self) -> Vec<&str> {
        self.age_buckets.labels()
    }

    /// First `n` merged rows.
    pub fn preview(&self, n: usize) -> &[MergedRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// `HashMap::insert` that keeps the existing value. Returns `true` when the
/// key was already present.
trait InsertIfAbsent<K, V> {
    fn insert_if_absent(&mut self, key: K, value: V) -> bool;
}

impl<K: std::hash::Hash + Eq, V> InsertIfAbsent<K, V> for HashMap<K, V> {
    fn insert_if_absent(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => true,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                false
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
