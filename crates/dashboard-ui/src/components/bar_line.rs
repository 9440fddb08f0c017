use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use dashboard_core::formatting::format_metric;

use crate::themes::Theme;

/// Configuration controlling the visual appearance of a bar line.
pub struct BarLineConfig {
    /// Width in terminal columns of the bar portion.
    pub width: u16,
    pub filled_char: char,
    pub empty_char: char,
    pub decimals: u32,
}

impl Default for BarLineConfig {
    fn default() -> Self {
        Self {
            width: 40,
            filled_char: '\u{2588}', // █  FULL BLOCK
            empty_char: '\u{2591}',  // ░  LIGHT SHADE
            decimals: 1,
        }
    }
}

// ── BarLine ──────────────────────────────────────────────────────────────────

/// One labelled horizontal bar, scaled against the largest value in its
/// chart.
///
/// Renders as `label │████░░░░ value unit`, with the label padded to
/// `label_width` display columns so bars in the same chart line up.
pub struct BarLine<'a> {
    pub label: &'a str,
    pub value: f64,
    /// Largest value in the chart; maps to a full-width bar.
    pub max: f64,
    pub unit: &'a str,
    pub label_width: usize,
    pub fill: Style,
    pub theme: &'a Theme,
    pub config: BarLineConfig,
}

impl<'a> BarLine<'a> {
    pub fn new(label: &'a str, value: f64, max: f64, unit: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            value,
            max,
            unit,
            label_width: label.width(),
            fill: theme.bar_fill,
            theme,
            config: BarLineConfig::default(),
        }
    }

    pub fn label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    pub fn fill(mut self, style: Style) -> Self {
        self.fill = style;
        self
    }

    /// Render as a [`Line`] for embedding in a paragraph.
    pub fn to_line(&self) -> Line<'a> {
        let ratio = if self.max > 0.0 && self.value.is_finite() {
            (self.value / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let filled = (ratio * self.config.width as f64).round() as u16;
        let empty = self.config.width.saturating_sub(filled);

        let filled_str: String =
            std::iter::repeat_n(self.config.filled_char, filled as usize).collect();
        let empty_str: String =
            std::iter::repeat_n(self.config.empty_char, empty as usize).collect();

        let value = format!(
            " {} {}",
            format_metric(self.value, self.config.decimals),
            self.unit
        );

        Line::from(vec![
            Span::styled(pad_to_width(self.label, self.label_width), self.theme.label),
            Span::styled(" \u{2502}", self.theme.dim),
            Span::styled(filled_str, self.fill),
            Span::styled(empty_str, self.theme.bar_empty),
            Span::styled(value.trim_end().to_string(), self.theme.value),
        ])
    }
}

/// Widest label, in display columns.
pub fn max_label_width<'s>(labels: impl IntoIterator<Item = &'s str>) -> usize {
    labels.into_iter().map(|l| l.width()).max().unwrap_or(0)
}

/// Right-pad `s` with spaces to `width` display columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_line_half() {
        let theme = Theme::dark();
        let bar = BarLine::new("C1", 50.0, 100.0, "min", &theme);
        let line = bar.to_line();
        assert_eq!(line.spans.len(), 5, "label, separator, filled, empty, value");

        assert_eq!(line.spans[2].content.chars().count(), 20);
        assert!(line.spans[2].content.chars().all(|c| c == '█'));
        assert_eq!(line.spans[3].content.chars().count(), 20);
        assert_eq!(line.spans[4].content, " 50.0 min");
    }

    #[test]
    fn test_bar_line_max_is_full() {
        let theme = Theme::dark();
        let line = BarLine::new("C1", 80.0, 80.0, "", &theme).to_line();
        assert_eq!(line.spans[2].content.chars().count(), 40);
        assert_eq!(line.spans[3].content.len(), 0);
        assert_eq!(line.spans[4].content, " 80.0");
    }

    #[test]
    fn test_bar_line_zero_max_and_nan() {
        let theme = Theme::dark();
        let line = BarLine::new("C1", 5.0, 0.0, "min", &theme).to_line();
        assert_eq!(line.spans[2].content.len(), 0);

        let line = BarLine::new("C1", f64::NAN, 10.0, "min", &theme).to_line();
        assert_eq!(line.spans[2].content.len(), 0);
        assert_eq!(line.spans[4].content, " n/a min");
    }

    #[test]
    fn test_label_padding_uses_display_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        // Each CJK character is two columns wide.
        assert_eq!(pad_to_width("東京", 5), "東京 ");
        assert_eq!(max_label_width(["a", "東京", "abc"]), 4);
        assert_eq!(max_label_width(std::iter::empty()), 0);
    }

    #[test]
    fn test_bar_line_respects_label_width() {
        let theme = Theme::dark();
        let line = BarLine::new("C1", 1.0, 1.0, "", &theme)
            .label_width(6)
            .to_line();
        assert_eq!(line.spans[0].content, "C1    ");
    }
}
