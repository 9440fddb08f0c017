use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Name of the per-user state directory under `$HOME`, which holds the
/// TUI log file.
pub const STATE_DIR_NAME: &str = ".learning-dashboard";

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Analytics dashboard over student, course activity and feedback data
#[derive(Parser, Debug, Clone)]
#[command(
    name = "learning-dashboard",
    about = "Analytics dashboard over student, course activity and feedback data",
    version
)]
pub struct Settings {
    /// Directory containing students.csv, course_activity.csv and feedback.csv
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Dashboard section to open
    #[arg(
        long,
        default_value = "eda",
        value_parser = ["eda", "visualizations", "insights", "trends", "recommendations"]
    )]
    pub view: String,

    /// Output format
    #[arg(long, default_value = "tui", value_parser = ["tui", "text", "json"])]
    pub format: String,

    /// Colour theme; auto reads COLORFGBG
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "auto"])]
    pub theme: String,

    /// Minimum level written to the log
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Write logs here instead of the default location
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Shorthand for --log-level DEBUG
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse `std::env::args`. Nothing is read from or written to disk.
    pub fn load() -> Self {
        Self::load_from(std::env::args_os())
    }

    /// [`Settings::load`] over an explicit argument list.
    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Settings::parse_from(args).apply_debug_flag()
    }

    /// `--debug` overrides the log level.
    fn apply_debug_flag(mut self) -> Self {
        if self.debug {
            self.log_level = "DEBUG".to_string();
        }
        self
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
