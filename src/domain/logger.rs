//! Logging system with daily rotation.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use time::macros::format_description;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Prefix of every log file name.
const LOG_FILE_PREFIX: &str = "gadd";

/// Default log directory: ~/.config/gadd/logs
pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("gadd")
        .join("logs")
}

/// Initialize the logging system, writing to `log_dir`.
pub fn init(log_dir: &Path) -> Result<()> {
    // Create log directory if needed
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)?;
    }

    cleanup_old_logs(log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);

    // Use local timezone for timestamps
    let time_format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(local_offset, time_format);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(timer),
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

/// Remove gadd log files older than 2 days.
pub fn cleanup_old_logs(log_dir: &Path) -> Result<()> {
    use std::time::{Duration, SystemTime};

    let cutoff = SystemTime::now() - Duration::from_secs(2 * 24 * 60 * 60);

    if !log_dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(log_dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_ours = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(LOG_FILE_PREFIX));
        if !is_ours {
            continue;
        }

        let modified = entry.metadata().and_then(|m| m.modified());
        if matches!(modified, Ok(m) if m < cutoff) {
            let _ = fs::remove_file(&path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cleanup_keeps_recent_and_foreign_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("gadd.2026-10-17"), "recent").unwrap();
        fs::write(dir.path().join("other.log"), "not ours").unwrap();

        cleanup_old_logs(dir.path()).unwrap();

        assert!(dir.path().join("gadd.2026-10-17").exists());
        assert!(dir.path().join("other.log").exists());
    }

    #[test]
    fn test_cleanup_missing_dir_is_ok() {
        let dir = TempDir::new().unwrap();
        assert!(cleanup_old_logs(&dir.path().join("absent")).is_ok());
    }

    #[test]
    fn test_default_log_dir() {
        assert!(default_log_dir().ends_with(".config/gadd/logs"));
    }
}
