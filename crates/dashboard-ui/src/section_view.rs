//! Renders report [`Section`]s as styled terminal lines.
//!
//! Every section body becomes a block of [`Line`]s: scalars as
//! `label: value`, tables as padded columns, bars and series as horizontal
//! [`BarLine`]s. The same lines back both the TUI pane and the plain-text
//! output.

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use dashboard_data::reports::{Bar, Section, SectionBody};

use crate::components::bar_line::{max_label_width, pad_to_width, BarLine};
use crate::themes::Theme;

const COLUMN_GAP: &str = "  ";

/// Lines for one section: heading, underline, body, trailing blank line.
pub fn section_lines<'a>(section: &'a Section, theme: &'a Theme) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(section.title.as_str(), theme.heading)),
        Line::from(Span::styled(
            "\u{2500}".repeat(section.title.width()),
            theme.dim,
        )),
    ];

    match &section.body {
        SectionBody::Scalar { label, value } => {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", label), theme.label),
                Span::styled(value.as_str(), theme.value),
            ]));
        }
        SectionBody::Table { headers, rows } => lines.extend(table_lines(headers, rows, theme)),
        SectionBody::Bars { unit, bars } => lines.extend(bar_lines(bars, unit, theme, false)),
        SectionBody::Series { unit, points } => {
            lines.extend(bar_lines(points, unit, theme, true))
        }
        SectionBody::Text { lines: text } => {
            lines.extend(text.iter().map(|l| Line::from(Span::styled(l.as_str(), theme.text))));
        }
        SectionBody::Error { message } => {
            lines.push(Line::from(Span::styled(
                format!("error: {}", message),
                theme.error,
            )));
        }
    }

    lines.push(Line::from(""));
    lines
}

/// All lines of a report, in section order.
pub fn report_lines<'a>(sections: &'a [Section], theme: &'a Theme) -> Vec<Line<'a>> {
    sections
        .iter()
        .flat_map(|s| section_lines(s, theme))
        .collect()
}

fn no_data(theme: &Theme) -> Line<'static> {
    Line::from(Span::styled("(no data)", theme.dim))
}

fn table_lines<'a>(headers: &'a [String], rows: &'a [Vec<String>], theme: &'a Theme) -> Vec<Line<'a>> {
    if rows.is_empty() {
        return vec![no_data(theme)];
    }

    let columns = headers.len().max(rows.iter().map(Vec::len).max().unwrap_or(0));
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            let cells = headers
                .get(c)
                .into_iter()
                .chain(rows.iter().filter_map(|r| r.get(c)));
            max_label_width(cells.map(String::as_str))
        })
        .collect();

    let render_row = |cells: &[String]| -> String {
        widths
            .iter()
            .enumerate()
            .map(|(i, w)| pad_to_width(cells.get(i).map(String::as_str).unwrap_or(""), *w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    };

    let mut lines = vec![Line::from(Span::styled(
        render_row(headers),
        theme.table_header,
    ))];
    lines.extend(rows.iter().enumerate().map(|(i, row)| {
        let style = if i % 2 == 0 {
            theme.table_row
        } else {
            theme.table_row_alt
        };
        Line::from(Span::styled(render_row(row.as_slice()), style))
    }));
    lines
}

fn bar_lines<'a>(bars: &'a [Bar], unit: &'a str, theme: &'a Theme, series: bool) -> Vec<Line<'a>> {
    if bars.is_empty() {
        return vec![no_data(theme)];
    }

    let max = bars
        .iter()
        .map(|b| b.value)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let label_width = max_label_width(bars.iter().map(|b| b.label.as_str()));
    let fill = if series {
        theme.series_fill
    } else {
        theme.bar_fill
    };

    bars.iter()
        .map(|b| {
            BarLine::new(&b.label, b.value, max, unit, theme)
                .label_width(label_width)
                .fill(fill)
                .to_line()
        })
        .collect()
}

// ── Frame rendering ───────────────────────────────────────────────────────────

/// Render a view's sections into `area`, scrolled down by `scroll` lines.
pub fn render_sections(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    sections: &[Section],
    scroll: u16,
    theme: &Theme,
) {
    let paragraph = Paragraph::new(Text::from(report_lines(sections, theme)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(Span::styled(format!(" {} ", title), theme.title)),
        )
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Number of lines the report occupies, for clamping the scroll offset.
pub fn content_height(sections: &[Section], theme: &Theme) -> usize {
    report_lines(sections, theme).len()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
