//! `tracing` setup for the qrstamp binary
//!
//! Diagnostics always go to stderr so that stdout only carries command
//! results. A log file can be added on top, optionally rotated.

use crate::config::{LogRotation, LoggingOptions};
use crate::error::{Error, Result};
use std::io;
use std::path::Path;
use std::sync::OnceLock;
use tracing_appender::non_blocking::{NonBlocking, NonBlockingBuilder, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::UtcTime};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the file writer's worker thread alive for the life of the process.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber. A no-op when one is already installed.
pub fn init(options: &LoggingOptions) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let filter = level_filter(options)?;

    let file_layer = match file_writer(options)? {
        Some((writer, guard)) => {
            let _ = FILE_GUARD.set(guard);
            Some(
                fmt::layer()
                    .with_timer(UtcTime::rfc_3339())
                    .with_ansi(false)
                    .with_writer(writer),
            )
        }
        None => None,
    };

    let stderr_layer = fmt::layer()
        .with_timer(UtcTime::rfc_3339())
        .with_ansi(options.color)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install tracing subscriber: {e}")))
}

/// `QRSTAMP_LOG_LEVEL` wins over the configured level.
fn level_filter(options: &LoggingOptions) -> Result<EnvFilter> {
    let level = std::env::var("QRSTAMP_LOG_LEVEL").unwrap_or_else(|_| options.level.clone());
    EnvFilter::try_new(&level).map_err(|e| Error::Config(format!("Invalid log level '{level}': {e}")))
}

fn rotation(policy: Option<LogRotation>) -> Rotation {
    match policy {
        Some(LogRotation::Hourly) => Rotation::HOURLY,
        Some(LogRotation::Daily) => Rotation::DAILY,
        None => Rotation::NEVER,
    }
}

/// Open the configured log file, if any. Without rotation the file name is used as is;
/// with rotation it becomes the prefix of each dated file.
fn file_writer(options: &LoggingOptions) -> Result<Option<(NonBlocking, WorkerGuard)>> {
    let Some(path) = options.file.as_deref() else {
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| Error::Config(format!("Log file path '{}' has no file name", path.display())))?
        .to_string_lossy()
        .into_owned();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(|e| {
        Error::Config(format!("Failed to create log directory {}: {e}", dir.display()))
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(rotation(options.rotation))
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|e| Error::Config(format!("Failed to open log file {}: {e}", path.display())))?;

    Ok(Some(NonBlockingBuilder::default().lossy(false).finish(appender)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_without_path() {
        let options = LoggingOptions::default();
        assert!(file_writer(&options).unwrap().is_none());
    }

    #[test]
    fn test_unrotated_file_keeps_its_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("qrstamp.log");
        let options = LoggingOptions {
            file: Some(path.clone()),
            ..LoggingOptions::default()
        };

        assert!(file_writer(&options).unwrap().is_some());
        assert!(path.exists());
    }

    #[test]
    fn test_rotated_file_is_prefixed() {
        let dir = tempfile::tempdir().unwrap();
        let options = LoggingOptions {
            file: Some(dir.path().join("qrstamp.log")),
            rotation: Some(LogRotation::Daily),
            ..LoggingOptions::default()
        };

        assert!(file_writer(&options).unwrap().is_some());
        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("qrstamp.log."));
    }

    #[test]
    fn test_rotation_mapping() {
        assert_eq!(rotation(None), Rotation::NEVER);
        assert_eq!(rotation(Some(LogRotation::Hourly)), Rotation::HOURLY);
        assert_eq!(rotation(Some(LogRotation::Daily)), Rotation::DAILY);
    }

    #[test]
    fn test_invalid_level_rejected() {
        let options = LoggingOptions {
            level: "qrstamp=loud".to_string(),
            ..LoggingOptions::default()
        };
        if std::env::var_os("QRSTAMP_LOG_LEVEL").is_none() {
            assert!(matches!(level_filter(&options), Err(Error::Config(_))));
        }
    }
}
