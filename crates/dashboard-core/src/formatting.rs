//! Display formatting for aggregate values.

/// Format `value` with `decimals` fractional digits and comma-grouped
/// thousands.
///
/// ```
/// use dashboard_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5, 1), "1,234.5");
/// assert_eq!(format_number(98765.0, 0), "98,765");
/// assert_eq!(format_number(-42.25, 2), "-42.25");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    let scale = 10_f64.powi(decimals as i32);
    // Half an ULP at the target precision so 1.005 -> 1.01.
    let magnitude = value.abs();
    let scaled = (magnitude * scale + f64::EPSILON * magnitude * scale).round();

    let whole = (scaled / scale).trunc() as u64;
    let fraction = (scaled - whole as f64 * scale).round() as u64;

    let mut out = group_thousands(&whole.to_string());
    if decimals > 0 {
        out.push('.');
        out.push_str(&format!("{:0width$}", fraction, width = decimals as usize));
    }

    if value < 0.0 && scaled != 0.0 {
        out.insert(0, '-');
    }
    out
}

/// Like [`format_number`], but `NaN` and infinities print as `n/a`.
///
/// ```
/// use dashboard_core::formatting::format_metric;
///
/// assert_eq!(format_metric(0.12345, 2), "0.12");
/// assert_eq!(format_metric(f64::NAN, 2), "n/a");
/// ```
pub fn format_metric(value: f64, decimals: u32) -> String {
    if value.is_finite() {
        format_number(value, decimals)
    } else {
        "n/a".to_string()
    }
}

/// Minutes as `"45m"`, `"2h"` or `"1h 42m"`.
pub fn format_minutes(minutes: f64) -> String {
    let total = minutes.round() as i64;
    match (total / 60, total % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// `part` as a percentage of `whole`, rounded to `decimals` places. Zero
/// when `whole` is zero.
pub fn percentage(part: f64, whole: f64, decimals: u32) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let scale = 10_f64.powi(decimals as i32);
    (part / whole * 100.0 * scale).round() / scale
}

/// `"1234567"` -> `"1,234,567"`.
fn group_thousands(digits: &str) -> String {
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
