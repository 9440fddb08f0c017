use ratatui::text::{Line, Span};

use crate::themes::Theme;
use crate::views::VIEWS;

/// Application name shown at the top of the sidebar.
pub const SIDEBAR_TITLE: &str = "Learning Platform Analysis";

/// Navigation list of every view, with the selected one highlighted.
pub struct Sidebar<'a> {
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> Sidebar<'a> {
    pub fn new(selected: usize, theme: &'a Theme) -> Self {
        Self { selected, theme }
    }

    /// One line per view, preceded by the title and a blank line.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(Span::styled(SIDEBAR_TITLE, self.theme.title)),
            Line::from(""),
        ];
        for (i, view) in VIEWS.iter().enumerate() {
            let (marker, style) = if i == self.selected {
                ("\u{25b6} ", self.theme.nav_selected)
            } else {
                ("  ", self.theme.nav_item)
            };
            lines.push(Line::from(Span::styled(
                format!("{}{}", marker, view.title),
                style,
            )));
        }
        lines
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
