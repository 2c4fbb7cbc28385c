//! Rotating file logging for the facets workspace
//!
//! This module wires the `log` facade to a size-rotated file handler with a
//! fixed line format. Initialization happens once per process: repeated
//! calls with the same configuration are accepted, conflicting calls are
//! rejected.

use crate::error::{FacetError, FacetResult};
use flexi_logger::{
    Cleanup, Criterion, DeferredNow, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Base name of the log files (`app.log`, `app_r00001.log`, ...)
const LOG_FILE_BASENAME: &str = "app";

/// A log file rotates once it reaches this size
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of rotated files kept on disk
const MAX_LOG_FILES: usize = 10;

/// Timestamp format used by [`line_format`]
const LINE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Format a record as `[YYYY-MM-DD HH:MM:SS] LEVEL: message`
///
/// This is the formatter half of the logging pipeline; the rotating file
/// handler applies it to every record it writes.
pub fn line_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] {}: {}",
        now.format(LINE_TIME_FORMAT),
        record.level(),
        record.args()
    )
}

/// Initialize rotating file logging
///
/// Log files are written under `log_dir` with size-based rotation; at most
/// [`MAX_LOG_FILES`] rotated files are kept. Calling this again with the
/// same `level` and `log_dir` is a no-op; a conflicting configuration
/// returns [`FacetError::LoggerConflict`].
///
/// # Errors
///
/// - [`FacetError::InvalidLogLevel`] for an unsupported `level`.
/// - [`FacetError::InvalidLogDir`] when `log_dir` is relative or empty.
/// - [`FacetError::Io`] when the directory cannot be created.
/// - [`FacetError::LoggerStart`] when the backend fails to start.
pub fn init(level: &str, log_dir: &Path) -> FacetResult<()> {
    let level = normalize_level(level)?;
    let log_dir = normalize_log_dir(log_dir)?;

    let init_dir = log_dir.clone();
    let state = LOGGING_STATE.get_or_try_init(|| -> FacetResult<LoggingState> {
        std::fs::create_dir_all(&init_dir)?;

        let handle = Logger::try_with_str(level)
            .map_err(|err| FacetError::LoggerStart(err.to_string()))?
            .log_to_file(
                FileSpec::default()
                    .directory(init_dir.as_path())
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(line_format)
            .start()
            .map_err(|err| FacetError::LoggerStart(err.to_string()))?;

        Ok(LoggingState {
            level,
            log_dir: init_dir,
            _handle: handle,
        })
    })?;

    if state.log_dir != log_dir {
        return Err(FacetError::logger_conflict(
            format!("directory '{}'", state.log_dir.display()),
            format!("directory '{}'", log_dir.display()),
        ));
    }
    if state.level != level {
        return Err(FacetError::logger_conflict(
            format!("level '{}'", state.level),
            format!("level '{level}'"),
        ));
    }

    Ok(())
}

/// Get the active logging configuration
///
/// Returns `None` before [`init`] has succeeded.
pub fn status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// Default log level for the current build mode
pub fn default_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}

fn normalize_level(level: &str) -> FacetResult<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(FacetError::InvalidLogLevel(other.to_string())),
    }
}

fn normalize_log_dir(log_dir: &Path) -> FacetResult<PathBuf> {
    if log_dir.as_os_str().is_empty() {
        return Err(FacetError::invalid_log_dir(log_dir, "path is empty"));
    }
    if !log_dir.is_absolute() {
        return Err(FacetError::invalid_log_dir(
            log_dir,
            "path must be absolute",
        ));
    }
    Ok(log_dir.to_path_buf())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert_eq!(normalize_level("Trace").unwrap(), "trace");
    }

    #[test]
    fn test_normalize_level_rejects_unknown_values() {
        let err = normalize_level("verbose").unwrap_err();
        assert!(err.is_logging());
    }

    #[test]
    fn test_normalize_log_dir_rejects_relative_path() {
        let err = normalize_log_dir(Path::new("logs/dev")).unwrap_err();
        assert!(matches!(err, FacetError::InvalidLogDir { .. }));
    }

    #[test]
    fn test_line_format_shape() {
        let mut buf = Vec::new();
        let mut now = DeferredNow::new();
        line_format(
            &mut buf,
            &mut now,
            &log::Record::builder()
                .args(format_args!("user logged in"))
                .level(log::Level::Info)
                .build(),
        )
        .unwrap();

        let line = String::from_utf8(buf).unwrap();
        assert!(line.starts_with('['));
        assert!(line.ends_with("] INFO: user logged in"));
    }

    #[test]
    fn test_default_level_matches_build_mode() {
        let level = default_level();
        assert!(level == "debug" || level == "info");
    }

    // Logger state is process-global, so the full init lifecycle lives in
    // one test.
    #[test]
    fn test_init_is_idempotent_and_rejects_conflicts() {
        let dir = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();

        init("info", dir.path()).unwrap();
        init("info", dir.path()).unwrap();

        let level_err = init("debug", dir.path()).unwrap_err();
        assert!(matches!(level_err, FacetError::LoggerConflict { .. }));

        let dir_err = init("info", other.path()).unwrap_err();
        assert!(matches!(dir_err, FacetError::LoggerConflict { .. }));

        let (level, active_dir) = status().unwrap();
        assert_eq!(level, "info");
        assert_eq!(active_dir, dir.path());
    }
}
