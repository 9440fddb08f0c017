//! Plain-text rendering for `--format text`.

use ratatui::text::Line;

use dashboard_data::reports::Section;

use crate::section_view::report_lines;
use crate::themes::Theme;

/// Render a view as unstyled text: a title banner followed by every section.
pub fn render_text(title: &str, sections: &[Section]) -> String {
    let theme = Theme::dark();
    let banner = "=".repeat(title.chars().count().max(40));

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&banner);
    out.push_str("\n\n");
    for line in report_lines(sections, &theme) {
        out.push_str(plain(&line).trim_end());
        out.push('\n');
    }
    out
}

fn plain(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
