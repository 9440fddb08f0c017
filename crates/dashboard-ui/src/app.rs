//! Application state and TUI event loop for the learning dashboard.
//!
//! [`App`] holds the theme, the selected view and the sections computed for
//! it. Selecting a view recomputes its sections from the dataset.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::debug;

use dashboard_data::reports::Section;
use dashboard_data::LearningDataset;

use crate::components::Sidebar;
use crate::section_view;
use crate::themes::Theme;
use crate::views::{self, ViewKind, VIEWS};

const SIDEBAR_WIDTH: u16 = 32;
const PAGE: u16 = 10;
const FOOTER: &str = " \u{2191}/\u{2193} j/k: switch view   PgUp/PgDn: scroll   q: quit ";

/// Root application state for the dashboard TUI.
pub struct App<'d> {
    pub theme: Theme,
    dataset: &'d LearningDataset,
    /// Index into [`VIEWS`].
    pub selected: usize,
    pub sections: Vec<Section>,
    pub scroll: u16,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl<'d> App<'d> {
    pub fn new(dataset: &'d LearningDataset, view: ViewKind, theme_name: &str) -> Self {
        let selected = view.index();
        Self {
            theme: Theme::from_name(theme_name),
            dataset,
            selected,
            sections: views::build_view(view, dataset),
            scroll: 0,
            should_quit: false,
        }
    }

    pub fn current_view(&self) -> ViewKind {
        VIEWS[self.selected].kind
    }

    /// Switch to the view at `index` (wrapping) and rebuild its sections.
    pub fn select(&mut self, index: usize) {
        self.selected = index % VIEWS.len();
        self.scroll = 0;
        self.sections = views::build_view(self.current_view(), self.dataset);
        debug!(
            "Switched to view {} ({} sections)",
            self.current_view(),
            self.sections.len()
        );
    }

    pub fn next_view(&mut self) {
        self.select(self.selected + 1);
    }

    pub fn previous_view(&mut self) {
        self.select(self.selected + VIEWS.len() - 1);
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.next_view(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_view(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index < VIEWS.len() {
                    self.select(index);
                }
            }
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(PAGE as i32),
            KeyCode::PageUp => self.scroll_by(-(PAGE as i32)),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let height = section_view::content_height(&self.sections, &self.theme);
        let max = height.saturating_sub(1).min(u16::MAX as usize) as i32;
        self.scroll = (self.scroll as i32 + delta).clamp(0, max) as u16;
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the dashboard until `q`, `Esc` or `Ctrl+C`.
    ///
    /// Uses `crossterm::event::poll` with a 250 ms timeout; the terminal is
    /// restored even when the loop fails.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Render the sidebar, the selected view and the key-help footer.
    pub fn render(&self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(rows[0]);

        let sidebar = Paragraph::new(Sidebar::new(self.selected, &self.theme).to_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border),
        );
        frame.render_widget(sidebar, columns[0]);

        section_view::render_sections(
            frame,
            columns[1],
            VIEWS[self.selected].title,
            &self.sections,
            self.scroll,
            &self.theme,
        );

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(FOOTER, self.theme.footer))),
            rows[1],
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
