//! Aggregate queries over a [`LearningDataset`].
//!
//! Every query takes column names as they appear in the CSV headers (plus the
//! derived `Age_Group`, `Month` and `Enrolment_Month`), resolves them against
//! the schema and fails with a schema error naming the column if it does not
//! exist. A failing query leaves the dataset untouched.

use std::collections::BTreeMap;
use std::fmt;

use dashboard_core::error::{DashboardError, Result};
use dashboard_core::models::Column;
use dashboard_core::stats::{self, FiveNumberSummary};
use serde::Serialize;
use tracing::{debug, warn};

use crate::dataset::LearningDataset;

// ── Result types ──────────────────────────────────────────────────────────────

/// Non-fatal: a group had no non-null values for the averaged column, so it
/// was left out of the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyGroupWarning {
    pub group_column: String,
    pub group: String,
    pub value_column: String,
}

impl fmt::Display for EmptyGroupWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "group {}={} has no values for {}",
            self.group_column, self.group, self.value_column
        )
    }
}

/// Group means together with the groups that were omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedMean {
    pub means: BTreeMap<String, f64>,
    pub empty_groups: Vec<EmptyGroupWarning>,
}

/// Pairwise Pearson coefficients; `values[i][j]` pairs `columns[i]` with
/// `columns[j]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// One student's per-metric means and weighted composite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentScore {
    pub student_id: String,
    pub metrics: BTreeMap<String, f64>,
    pub score: f64,
}

/// Histogram bucket `[lower, upper)`; the last bucket also includes `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinCount {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

// ── Queries ───────────────────────────────────────────────────────────────────

impl LearningDataset {
    /// Mean of `value_col` per distinct `group_col` value, plus a warning for
    /// each group whose values were all null.
    pub fn mean_by_detailed(&self, group_col: &str, value_col: &str) -> Result<GroupedMean> {
        let group = Column::lookup(group_col)?;
        let value = Column::lookup_numeric(value_col)?;
        let grouped = self.group_means(group, value);

        for w in &grouped.empty_groups {
            warn!("{}; omitted from result", w);
        }
        Ok(grouped)
    }

    /// Mean of `value_col` per distinct `group_col` value.
    ///
    /// Rows with a null group are excluded; groups with no non-null values
    /// are omitted.
    pub fn mean_by(&self, group_col: &str, value_col: &str) -> Result<BTreeMap<String, f64>> {
        Ok(self.mean_by_detailed(group_col, value_col)?.means)
    }

    /// Row count per distinct `group_col` value.
    pub fn count_by(&self, group_col: &str) -> Result<BTreeMap<String, usize>> {
        let group = Column::lookup(group_col)?;
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for key in self.records.iter().filter_map(|r| r.value(group).as_key()) {
            *counts.entry(key).or_default() += 1;
        }
        Ok(counts)
    }

    /// Overall mean of a numeric column. `None` when every value is null.
    pub fn mean(&self, col: &str) -> Result<Option<f64>> {
        let column = Column::lookup_numeric(col)?;
        Ok(stats::mean(&self.values(column)))
    }

    /// Number of rows where `col` is null.
    pub fn null_count(&self, col: &str) -> Result<usize> {
        let column = Column::lookup(col)?;
        Ok(self
            .records
            .iter()
            .filter(|r| r.value(column).is_null())
            .count())
    }

    /// Pearson correlation over rows where both columns are non-null.
    ///
    /// `NaN` with fewer than two pairs or zero variance in either column.
    pub fn correlation(&self, col_a: &str, col_b: &str) -> Result<f64> {
        let a = Column::lookup_numeric(col_a)?;
        let b = Column::lookup_numeric(col_b)?;
        Ok(self.pearson(a, b))
    }

    /// Correlation of every pair drawn from `cols`.
    pub fn correlation_matrix(&self, cols: &[&str]) -> Result<CorrelationMatrix> {
        let columns = cols
            .iter()
            .map(|c| Column::lookup_numeric(c))
            .collect::<Result<Vec<_>>>()?;

        let values: Vec<Vec<f64>> = columns
            .iter()
            .map(|&a| columns.iter().map(|&b| self.pearson(a, b)).collect::<Vec<f64>>())
            .collect();

        Ok(CorrelationMatrix {
            columns: columns.iter().map(|c| c.name().to_string()).collect(),
            values,
        })
    }

    /// The `n` groups with the highest mean `score_col`, descending.
    /// Ties are broken by group value ascending.
    pub fn top_n(&self, group_col: &str, score_col: &str, n: usize) -> Result<Vec<(String, f64)>> {
        let mut ranked = self.ranked(group_col, score_col, false)?;
        ranked.truncate(n);
        Ok(ranked)
    }

    /// The `n` groups with the lowest mean `score_col`, ascending.
    pub fn bottom_n(
        &self,
        group_col: &str,
        score_col: &str,
        n: usize,
    ) -> Result<Vec<(String, f64)>> {
        let mut ranked = self.ranked(group_col, score_col, true)?;
        ranked.truncate(n);
        Ok(ranked)
    }

    /// Per-student composite score: the weighted sum of the student's mean
    /// value for each weighted column. Sorted by score descending, ties by
    /// student id ascending.
    ///
    /// Students lacking a value for any weighted column are left out.
    pub fn rank_students(&self, weights: &[(&str, f64)]) -> Result<Vec<StudentScore>> {
        self.score_students(weights, false)
    }

    /// Like [`rank_students`](Self::rank_students) but each metric is
    /// min-max normalised across the ranked students before weighting, so
    /// metrics on different scales contribute comparably.
    pub fn rank_students_normalized(&self, weights: &[(&str, f64)]) -> Result<Vec<StudentScore>> {
        self.score_students(weights, true)
    }

    /// Histogram of `col` over `edges`. Values outside `[first, last]` and
    /// nulls are not counted.
    pub fn bin_counts(&self, col: &str, edges: &[f64]) -> Result<Vec<BinCount>> {
        let column = Column::lookup_numeric(col)?;
        if edges.len() < 2 {
            return Err(DashboardError::Config(
                "bin edges need at least two values".to_string(),
            ));
        }
        if edges.iter().any(|e| !e.is_finite()) || edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(DashboardError::Config(
                "bin edges must be finite and strictly ascending".to_string(),
            ));
        }

        let mut bins: Vec<BinCount> = edges
            .windows(2)
            .map(|w| BinCount {
                lower: w[0],
                upper: w[1],
                count: 0,
            })
            .collect();
        let last = bins.len() - 1;

        for v in self.values(column) {
            let idx = bins
                .iter()
                .position(|b| v >= b.lower && v < b.upper)
                .or_else(|| (v == bins[last].upper).then_some(last));
            if let Some(i) = idx {
                bins[i].count += 1;
            }
        }
        Ok(bins)
    }

    /// Five-number summary of `value_col` per `group_col` value.
    pub fn summary_by(
        &self,
        group_col: &str,
        value_col: &str,
    ) -> Result<BTreeMap<String, FiveNumberSummary>> {
        let group = Column::lookup(group_col)?;
        let value = Column::lookup_numeric(value_col)?;

        let mut buckets: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for r in &self.records {
            let (Some(key), Some(v)) = (r.value(group).as_key(), r.value(value).as_f64()) else {
                continue;
            };
            buckets.entry(key).or_default().push(v);
        }

        Ok(buckets
            .into_iter()
            .filter_map(|(k, vs)| FiveNumberSummary::from_values(&vs).map(|s| (k, s)))
            .collect())
    }

    /// Students per enrolment month (`YYYY-MM`), from the student table.
    /// Students whose enrolment date did not parse are not counted.
    pub fn enrolments_by_month(&self) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for month in self.students.iter().filter_map(|s| s.enrolment_month.clone()) {
            *counts.entry(month).or_default() += 1;
        }
        counts
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn values(&self, column: Column) -> Vec<f64> {
        self.records
            .iter()
            .filter_map(|r| r.value(column).as_f64())
            .collect()
    }

    fn pearson(&self, a: Column, b: Column) -> f64 {
        let pairs: Vec<(f64, f64)> = self
            .records
            .iter()
            .filter_map(|r| Some((r.value(a).as_f64()?, r.value(b).as_f64()?)))
            .collect();
        stats::pearson(&pairs)
    }

    fn group_means(&self, group: Column, value: Column) -> GroupedMean {
        let mut acc: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        for r in &self.records {
            let Some(key) = r.value(group).as_key() else {
                continue;
            };
            let slot = acc.entry(key).or_insert((0.0, 0));
            if let Some(v) = r.value(value).as_f64() {
                slot.0 += v;
                slot.1 += 1;
            }
        }

        let mut out = GroupedMean::default();
        for (key, (sum, count)) in acc {
            if count == 0 {
                out.empty_groups.push(EmptyGroupWarning {
                    group_column: group.name().to_string(),
                    group: key,
                    value_column: value.name().to_string(),
                });
            } else {
                out.means.insert(key, sum / count as f64);
            }
        }
        out
    }

    fn ranked(&self, group_col: &str, score_col: &str, ascending: bool) -> Result<Vec<(String, f64)>> {
        let mut ranked: Vec<(String, f64)> =
            self.mean_by(group_col, score_col)?.into_iter().collect();
        ranked.sort_by(|a, b| {
            let by_score = if ascending {
                a.1.total_cmp(&b.1)
            } else {
                b.1.total_cmp(&a.1)
            };
            by_score.then_with(|| a.0.cmp(&b.0))
        });
        Ok(ranked)
    }

    fn score_students(&self, weights: &[(&str, f64)], normalize: bool) -> Result<Vec<StudentScore>> {
        if weights.is_empty() {
            return Err(DashboardError::Config(
                "student ranking needs at least one weighted column".to_string(),
            ));
        }

        let metrics = weights
            .iter()
            .map(|(name, w)| {
                let column = Column::lookup_numeric(name)?;
                Ok((column, *w, self.group_means(Column::StudentId, column).means))
            })
            .collect::<Result<Vec<_>>>()?;

        // Only students with a mean for every weighted metric.
        let ids: Vec<&String> = metrics[0]
            .2
            .keys()
            .filter(|id| metrics.iter().all(|(_, _, m)| m.contains_key(*id)))
            .collect();

        let mut per_metric: Vec<Vec<f64>> = metrics
            .iter()
            .map(|(_, _, m)| ids.iter().map(|id| m[*id]).collect())
            .collect();
        if normalize {
            per_metric = per_metric
                .iter()
                .map(|vs| stats::min_max_normalize(vs))
                .collect();
        }

        let mut scores: Vec<StudentScore> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let score = metrics
                    .iter()
                    .zip(&per_metric)
                    .map(|((_, w, _), vs)| w * vs[i])
                    .sum::<f64>();
                StudentScore {
                    student_id: (*id).clone(),
                    metrics: metrics
                        .iter()
                        .zip(&per_metric)
                        .map(|((c, _, _), vs)| (c.name().to_string(), vs[i]))
                        .collect(),
                    score,
                }
            })
            .collect();

        scores.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.student_id.cmp(&b.student_id))
        });

        debug!("Ranked {} students on {} metrics", scores.len(), metrics.len());
        Ok(scores)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::{activity, build, feedback, student};
    use crate::reader::SourceTables;

    fn sample() -> LearningDataset {
        build(SourceTables {
            students: vec![
                student("S1", Some(17.0), "Female", "Lagos"),
                student("S2", Some(22.0), "Male", "Paris"),
                student("S3", None, "Female", "Lagos"),
            ],
            activity: vec![
                activity("S1", "C1", 100.0, 80.0),
                activity("S2", "C1", 50.0, 40.0),
                activity("S2", "C2", 30.0, 20.0),
                activity("S3", "C3", 10.0, 90.0),
            ],
            feedback: vec![
                feedback("S1", "C1", 5.0),
                feedback("S2", "C1", 3.0),
                feedback("S2", "C2", 2.0),
            ],
        })
    }

    // ── mean_by ───────────────────────────────────────────────────────────────

    #[test]
    fn test_mean_by_without_matches() {
        let ds = build(SourceTables {
            students: vec![],
            activity: vec![activity("S1", "C1", 100.0, 0.0), activity("S2", "C1", 50.0, 0.0)],
            feedback: vec![],
        });
        let means = ds.mean_by("Course_ID", "Time_Spent_Minutes").unwrap();
        assert_eq!(means.len(), 1);
        assert_eq!(means["C1"], 75.0);
    }

    #[test]
    fn test_mean_by_unknown_column_is_schema_error() {
        let err = sample().mean_by("NoSuchCol", "Time_Spent_Minutes").unwrap_err();
        assert!(matches!(err, DashboardError::Schema(ref c) if c == "NoSuchCol"));

        let err = sample().mean_by("Course_ID", "Minutes").unwrap_err();
        assert!(matches!(err, DashboardError::Schema(ref c) if c == "Minutes"));
    }

    #[test]
    fn test_mean_by_categorical_value_is_not_numeric() {
        let err = sample().mean_by("Course_ID", "Gender").unwrap_err();
        assert!(matches!(err, DashboardError::NotNumeric(_)));
    }

    #[test]
    fn test_mean_by_single_row_group_equals_value() {
        let means = sample().mean_by("Student_ID", "Completion_Percentage").unwrap();
        assert_eq!(means["S1"], 80.0);
        assert_eq!(means["S3"], 90.0);
    }

    #[test]
    fn test_mean_by_gender() {
        let means = sample().mean_by("Gender", "Time_Spent_Minutes").unwrap();
        assert_eq!(means.len(), 2);
        assert_eq!(means["Female"], 55.0);
        assert_eq!(means["Male"], 40.0);
    }

    #[test]
    fn test_mean_by_detailed_reports_empty_groups() {
        let grouped = sample().mean_by_detailed("Course_ID", "Rating").unwrap();
        assert_eq!(grouped.means["C1"], 4.0);
        assert!(!grouped.means.contains_key("C3"));
        assert_eq!(
            grouped.empty_groups,
            vec![EmptyGroupWarning {
                group_column: "Course_ID".to_string(),
                group: "C3".to_string(),
                value_column: "Rating".to_string(),
            }]
        );
    }

    #[test]
    fn test_mean_by_derived_age_group() {
        let means = sample().mean_by("Age_Group", "Time_Spent_Minutes").unwrap();
        assert_eq!(means["<18"], 100.0);
        assert_eq!(means["18-25"], 40.0);
        assert_eq!(means["Unknown"], 10.0);
    }

    // ── count_by / mean / null_count ──────────────────────────────────────────

    #[test]
    fn test_count_by() {
        let counts = sample().count_by("Course_ID").unwrap();
        assert_eq!(counts["C1"], 2);
        assert_eq!(counts["C2"], 1);
        assert!(sample().count_by("Nope").is_err());
    }

    #[test]
    fn test_mean_and_null_count() {
        let ds = sample();
        assert_eq!(ds.mean("Completion_Percentage").unwrap(), Some(57.5));
        assert_eq!(ds.null_count("Rating").unwrap(), 1);
        assert_eq!(ds.null_count("Age").unwrap(), 1);
    }

    #[test]
    fn test_blank_and_nan_metrics_are_null_not_dropped() {
        use crate::reader::{PipelineConfig, ACTIVITY_FILE, FEEDBACK_FILE, STUDENTS_FILE};

        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(STUDENTS_FILE),
            "Student_ID,Age,Gender,Location,Enrolment_Date\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join(ACTIVITY_FILE),
            "Student_ID,Course_ID,Date,Time_Spent_Minutes,Completion_Percentage\n\
             S1,C1,01/03/2024,100,50\n\
             S1,C2,02/03/2024,,70\n\
             S2,C1,03/03/2024,NaN,30\n\
             S2,C2,04/03/2024,40,\n\
             S3,C1,05/03/2024,20,10\n\
             S3,C2,06/03/2024,60,30\n",
        )
        .unwrap();
        std::fs::write(dir.path().join(FEEDBACK_FILE), "Student_ID,Course_ID,Rating\n").unwrap();

        let ds = LearningDataset::load(&PipelineConfig::new(dir.path())).unwrap();
        assert_eq!(ds.len(), 6);

        let counts = ds.count_by("Course_ID").unwrap();
        assert_eq!(counts["C1"], 3);
        assert_eq!(counts["C2"], 3);

        let minutes = ds.mean_by("Course_ID", "Time_Spent_Minutes").unwrap();
        assert_eq!(minutes["C1"], 60.0);
        assert_eq!(minutes["C2"], 50.0);
        let completion = ds.mean_by("Course_ID", "Completion_Percentage").unwrap();
        assert_eq!(completion["C1"], 30.0);
        assert_eq!(completion["C2"], 50.0);

        assert_eq!(ds.mean("Time_Spent_Minutes").unwrap(), Some(55.0));
        assert_eq!(ds.null_count("Time_Spent_Minutes").unwrap(), 2);
        assert_eq!(ds.null_count("Completion_Percentage").unwrap(), 1);

        // Complete pairs are (100, 50), (20, 10) and (60, 30).
        let r = ds
            .correlation("Time_Spent_Minutes", "Completion_Percentage")
            .unwrap();
        assert!((r - 1.0).abs() < 1e-12, "r = {r}");

        let ranked = ds.rank_students(&[("Time_Spent_Minutes", 1.0)]).unwrap();
        let scores: Vec<(&str, f64)> = ranked
            .iter()
            .map(|s| (s.student_id.as_str(), s.score))
            .collect();
        assert_eq!(scores, vec![("S1", 100.0), ("S2", 40.0), ("S3", 40.0)]);
    }

    #[test]
    fn test_mean_of_all_null_column_is_none() {
        let ds = build(SourceTables {
            students: vec![],
            activity: vec![activity("S1", "C1", 1.0, 1.0)],
            feedback: vec![],
        });
        assert_eq!(ds.mean("Rating").unwrap(), None);
    }

    // ── correlation ───────────────────────────────────────────────────────────

    #[test]
    fn test_correlation_with_itself_is_one() {
        let r = sample().correlation("Time_Spent_Minutes", "Time_Spent_Minutes").unwrap();
        assert!((r - 1.0).abs() < 1e-12, "r = {r}");
    }

    #[test]
    fn test_correlation_uses_complete_pairs_only() {
        // Ratings exist for three rows; minutes and rating rise together there.
        let r = sample().correlation("Time_Spent_Minutes", "Rating").unwrap();
        assert!(r > 0.9, "r = {r}");
    }

    #[test]
    fn test_correlation_undefined_with_one_pair() {
        let ds = build(SourceTables {
            students: vec![],
            activity: vec![activity("S1", "C1", 1.0, 2.0)],
            feedback: vec![feedback("S1", "C1", 4.0)],
        });
        assert!(ds.correlation("Completion_Percentage", "Rating").unwrap().is_nan());
    }

    #[test]
    fn test_correlation_matrix_is_symmetric() {
        let m = sample()
            .correlation_matrix(&["Completion_Percentage", "Rating"])
            .unwrap();
        assert_eq!(m.columns, vec!["Completion_Percentage", "Rating"]);
        assert!((m.values[0][0] - 1.0).abs() < 1e-12);
        assert_eq!(m.values[0][1], m.values[1][0]);
    }

    // ── top_n / bottom_n ──────────────────────────────────────────────────────

    #[test]
    fn test_top_n_descending_with_tie_break() {
        let ds = build(SourceTables {
            students: vec![],
            activity: vec![
                activity("S1", "C2", 50.0, 0.0),
                activity("S1", "C1", 50.0, 0.0),
                activity("S1", "C3", 90.0, 0.0),
                activity("S1", "C4", 10.0, 0.0),
            ],
            feedback: vec![],
        });
        let top = ds.top_n("Course_ID", "Time_Spent_Minutes", 3).unwrap();
        assert_eq!(
            top,
            vec![
                ("C3".to_string(), 90.0),
                ("C1".to_string(), 50.0),
                ("C2".to_string(), 50.0),
            ]
        );
    }

    #[test]
    fn test_top_n_fewer_groups_than_n() {
        let top = sample().top_n("Gender", "Time_Spent_Minutes", 3).unwrap();
        assert_eq!(top.len(), 2);
        assert!(top[0].1 >= top[1].1);
    }

    #[test]
    fn test_bottom_n_ascending() {
        let bottom = sample().bottom_n("Course_ID", "Time_Spent_Minutes", 1).unwrap();
        assert_eq!(bottom, vec![("C3".to_string(), 10.0)]);
    }

    // ── rank_students ─────────────────────────────────────────────────────────

    #[test]
    fn test_rank_students_weighted_sum() {
        let ranked = sample()
            .rank_students(&[("Time_Spent_Minutes", 1.0), ("Rating", 1.0)])
            .unwrap();
        // S3 has no rating and drops out.
        let ids: Vec<&str> = ranked.iter().map(|s| s.student_id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S2"]);
        assert_eq!(ranked[0].score, 105.0);
        assert_eq!(ranked[1].score, 42.5);
        assert_eq!(ranked[1].metrics["Rating"], 2.5);
    }

    #[test]
    fn test_rank_students_ties_by_id() {
        let ds = build(SourceTables {
            students: vec![],
            activity: vec![activity("S2", "C1", 10.0, 0.0), activity("S1", "C1", 10.0, 0.0)],
            feedback: vec![],
        });
        let ranked = ds.rank_students(&[("Time_Spent_Minutes", 2.0)]).unwrap();
        assert_eq!(ranked[0].student_id, "S1");
        assert_eq!(ranked[0].score, 20.0);
    }

    #[test]
    fn test_rank_students_normalized_range() {
        let ranked = sample()
            .rank_students_normalized(&[("Time_Spent_Minutes", 1.0), ("Rating", 1.0)])
            .unwrap();
        assert_eq!(ranked[0].student_id, "S1");
        assert_eq!(ranked[0].score, 2.0);
        assert_eq!(ranked[1].score, 0.0);
    }

    #[test]
    fn test_rank_students_rejects_bad_weights() {
        let ds = sample();
        assert!(matches!(ds.rank_students(&[]), Err(DashboardError::Config(_))));
        assert!(matches!(
            ds.rank_students(&[("Engagement", 1.0)]),
            Err(DashboardError::Schema(_))
        ));
    }

    // ── bin_counts ────────────────────────────────────────────────────────────

    #[test]
    fn test_bin_counts_half_open_with_closed_last_bin() {
        let bins = sample()
            .bin_counts("Completion_Percentage", &[0.0, 40.0, 80.0, 90.0])
            .unwrap();
        let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
        // 20 | 40 | 80, 90
        assert_eq!(counts, vec![1, 1, 2]);
    }

    #[test]
    fn test_bin_counts_invalid_edges() {
        let ds = sample();
        assert!(matches!(ds.bin_counts("Rating", &[1.0]), Err(DashboardError::Config(_))));
        assert!(matches!(
            ds.bin_counts("Rating", &[3.0, 1.0]),
            Err(DashboardError::Config(_))
        ));
    }

    // ── summary_by / enrolments_by_month ──────────────────────────────────────

    #[test]
    fn test_summary_by_course() {
        let summary = sample().summary_by("Course_ID", "Rating").unwrap();
        let c1 = summary["C1"];
        assert_eq!(c1.min, 3.0);
        assert_eq!(c1.max, 5.0);
        assert_eq!(c1.median, 4.0);
        assert_eq!(c1.count, 2);
        assert!(!summary.contains_key("C3"));
    }

    #[test]
    fn test_enrolments_by_month() {
        let months = sample().enrolments_by_month();
        assert_eq!(months.get("2024-01"), Some(&3));
    }
}
