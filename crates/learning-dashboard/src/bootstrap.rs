use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use dashboard_core::settings::STATE_DIR_NAME;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log file used in TUI mode when `--log-file` is not given.
pub const DEFAULT_LOG_FILE: &str = "dashboard.log";

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure `~/.learning-dashboard/` and its `logs/` subdirectory exist.
/// Returns the state directory.
pub fn ensure_directories() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    ensure_directories_in(&home)
}

pub fn ensure_directories_in(base: &Path) -> anyhow::Result<PathBuf> {
    let state_dir = base.join(STATE_DIR_NAME);
    std::fs::create_dir_all(state_dir.join("logs"))
        .with_context(|| format!("Failed to create {}", state_dir.display()))?;
    Ok(state_dir)
}

/// Where logs should go: an explicit `--log-file` always wins; the TUI
/// otherwise logs to a file under the state directory so output does not
/// tear the screen; other formats log to stderr (`None`).
pub fn resolve_log_file(format: &str, explicit: Option<&PathBuf>, state_dir: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.clone()),
        None if format == "tui" => Some(state_dir.join("logs").join(DEFAULT_LOG_FILE)),
        None => None,
    }
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a `--log-level` name to an `EnvFilter` directive.
pub fn level_directive(log_level: &str) -> &'static str {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "WARNING" | "WARN" => "warn",
        "ERROR" | "CRITICAL" => "error",
        _ => "info",
    }
}

/// Initialise the global `tracing` subscriber.
///
/// With `log_file` set, events are appended to that file without ANSI
/// colours; otherwise they go to stderr.
pub fn setup_logging(log_level: &str, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level_directive(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };
    let stderr_layer = log_file.is_none().then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directories_in() {
        let tmp = TempDir::new().expect("tempdir");
        let state_dir = ensure_directories_in(tmp.path()).expect("ensure");

        assert_eq!(state_dir, tmp.path().join(".learning-dashboard"));
        assert!(state_dir.join("logs").is_dir(), "logs subdir must exist");

        // Idempotent.
        ensure_directories_in(tmp.path()).expect("second call");
    }

    #[test]
    fn test_level_directive() {
        assert_eq!(level_directive("DEBUG"), "debug");
        assert_eq!(level_directive("info"), "info");
        assert_eq!(level_directive("WARNING"), "warn");
        assert_eq!(level_directive("CRITICAL"), "error");
        assert_eq!(level_directive("loud"), "info");
    }

    #[test]
    fn test_resolve_log_file() {
        let state = PathBuf::from("/home/u/.learning-dashboard");
        let explicit = PathBuf::from("/tmp/run.log");

        assert_eq!(
            resolve_log_file("tui", None, &state),
            Some(state.join("logs").join("dashboard.log"))
        );
        assert_eq!(resolve_log_file("text", None, &state), None);
        assert_eq!(resolve_log_file("json", Some(&explicit), &state), Some(explicit.clone()));
        assert_eq!(resolve_log_file("tui", Some(&explicit), &state), Some(explicit));
    }
}
