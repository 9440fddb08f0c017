use serde::Serialize;

// ── Percentile helper ─────────────────────────────────────────────────────────

/// Compute the `p`-th percentile of a **sorted** slice using linear
/// interpolation between closest ranks.
///
/// Returns `NaN` for an empty slice.
pub fn percentile(sorted_data: &[f64], p: f64) -> f64 {
    if sorted_data.is_empty() {
        return f64::NAN;
    }
    let len = sorted_data.len();
    if len == 1 {
        return sorted_data[0];
    }
    let rank = (p / 100.0) * (len as f64 - 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted_data[lo];
    }
    let frac = rank - lo as f64;
    sorted_data[lo] + frac * (sorted_data[hi] - sorted_data[lo])
}

// ── Moments ───────────────────────────────────────────────────────────────────

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Pearson correlation coefficient of paired observations.
///
/// Returns `NaN` when there are fewer than two pairs or either side has zero
/// variance.
pub fn pearson(pairs: &[(f64, f64)]) -> f64 {
    if pairs.len() < 2 {
        return f64::NAN;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0)
}

// ── FiveNumberSummary ─────────────────────────────────────────────────────────

/// Box-plot statistics for one group of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub count: usize,
}

impl FiveNumberSummary {
    /// Summarise `values` (any order). `None` when empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Some(Self {
            min: sorted[0],
            q1: percentile(&sorted, 25.0),
            median: percentile(&sorted, 50.0),
            q3: percentile(&sorted, 75.0),
            max: sorted[sorted.len() - 1],
            count: sorted.len(),
        })
    }
}

// ── Normalisation ─────────────────────────────────────────────────────────────

/// Rescale `values` into `[0, 1]`. A constant series maps to all zeros.
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    values
        .iter()
        .map(|v| if range > 0.0 { (v - min) / range } else { 0.0 })
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── percentile ───────────────────────────────────────────────────────────

    #[test]
    fn test_percentile_empty_returns_nan() {
        assert!(percentile(&[], 90.0).is_nan());
    }

    #[test]
    fn test_percentile_single_element() {
        assert_eq!(percentile(&[42.0], 25.0), 42.0);
        assert_eq!(percentile(&[42.0], 100.0), 42.0);
    }

    #[test]
    fn test_percentile_p50_even() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        // rank = 0.5 * 3 = 1.5 → interpolate between data[1]=2 and data[2]=3
        assert!((percentile(&data, 50.0) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_percentile_p90_ten_elements() {
        let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        assert!((percentile(&data, 90.0) - 9.1).abs() < 1e-9);
    }

    // ── mean ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[100.0, 50.0]), Some(75.0));
        assert_eq!(mean(&[]), None);
    }

    // ── pearson ──────────────────────────────────────────────────────────────

    #[test]
    fn test_pearson_self_is_one() {
        let pairs: Vec<(f64, f64)> = [3.0, 1.0, 4.0, 1.5, 9.0].iter().map(|&v| (v, v)).collect();
        assert!((pearson(&pairs) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let pairs = vec![(1.0, 10.0), (2.0, 8.0), (3.0, 6.0)];
        assert!((pearson(&pairs) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_known_value() {
        // x = 1..5, y = [2, 4, 5, 4, 5] → r ≈ 0.7746
        let pairs = vec![(1.0, 2.0), (2.0, 4.0), (3.0, 5.0), (4.0, 4.0), (5.0, 5.0)];
        assert!((pearson(&pairs) - 0.774_596_669).abs() < 1e-6);
    }

    #[test]
    fn test_pearson_undefined_cases() {
        assert!(pearson(&[]).is_nan());
        assert!(pearson(&[(1.0, 2.0)]).is_nan());
        assert!(pearson(&[(1.0, 2.0), (1.0, 3.0)]).is_nan());
    }

    // ── FiveNumberSummary ────────────────────────────────────────────────────

    #[test]
    fn test_five_number_summary() {
        let s = FiveNumberSummary::from_values(&[5.0, 1.0, 3.0, 2.0, 4.0]).unwrap();
        assert_eq!(s.min, 1.0);
        assert_eq!(s.q1, 2.0);
        assert_eq!(s.median, 3.0);
        assert_eq!(s.q3, 4.0);
        assert_eq!(s.max, 5.0);
        assert_eq!(s.count, 5);
    }

    #[test]
    fn test_five_number_summary_empty() {
        assert!(FiveNumberSummary::from_values(&[]).is_none());
    }

    // ── min_max_normalize ────────────────────────────────────────────────────

    #[test]
    fn test_min_max_normalize() {
        assert_eq!(min_max_normalize(&[10.0, 20.0, 15.0]), vec![0.0, 1.0, 0.5]);
        assert_eq!(min_max_normalize(&[7.0, 7.0]), vec![0.0, 0.0]);
    }
}
