//! File logging bootstrap.
//!
//! Logs never go to the terminal: the TUI owns the screen and CLI output is
//! meant to be piped. Initialization happens at most once per process.

use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use once_cell::sync::OnceCell;

const LOG_FILE_BASENAME: &str = "todos";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Error type for logging setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("unsupported log level `{0}`; expected off|error|warn|info|debug|trace")]
    InvalidLevel(String),
    #[error("log directory cannot be empty")]
    EmptyDir,
    #[error("could not create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not start logger: {0}")]
    Start(#[from] flexi_logger::FlexiLoggerError),
    #[error("logging already initialized with level `{level}` at {dir}")]
    AlreadyInitialized { level: &'static str, dir: PathBuf },
}

/// Start file logging at `level` into `log_dir`.
///
/// Level `off` is a no-op. Calling again with the same level and directory is
/// a no-op; calling with different ones is an error.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), LogError> {
    let Some(level) = normalize_level(level)? else {
        return Ok(());
    };
    if log_dir.as_os_str().is_empty() {
        return Err(LogError::EmptyDir);
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, LogError> {
        std::fs::create_dir_all(log_dir).map_err(|e| LogError::CreateDir {
            path: log_dir.to_path_buf(),
            source: e,
        })?;

        let logger = Logger::try_with_str(level)?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()?;

        log::info!(
            "event=app_start version={} level={} log_dir={}",
            env!("CARGO_PKG_VERSION"),
            level,
            log_dir.display()
        );

        Ok(LoggingState {
            level,
            log_dir: log_dir.to_path_buf(),
            _logger: logger,
        })
    })?;

    if state.level != level || state.log_dir != log_dir {
        return Err(LogError::AlreadyInitialized {
            level: state.level,
            dir: state.log_dir.clone(),
        });
    }
    Ok(())
}

/// Write out buffered records. Statics are never dropped, so the logger
/// handle cannot flush on its own at exit.
pub fn flush() {
    log::logger().flush();
}

/// Map a config level to flexi_logger's spelling. `None` means logging is off.
fn normalize_level(level: &str) -> Result<Option<&'static str>, LogError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "" | "off" | "none" => Ok(None),
        "error" => Ok(Some("error")),
        "warn" | "warning" => Ok(Some("warn")),
        "info" => Ok(Some("info")),
        "debug" => Ok(Some("debug")),
        "trace" => Ok(Some("trace")),
        other => Err(LogError::InvalidLevel(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level("off").unwrap(), None);
        assert_eq!(normalize_level("").unwrap(), None);
        assert_eq!(normalize_level(" INFO ").unwrap(), Some("info"));
        assert_eq!(normalize_level("warning").unwrap(), Some("warn"));
        assert!(matches!(
            normalize_level("loud"),
            Err(LogError::InvalidLevel(l)) if l == "loud"
        ));
    }

    #[test]
    fn test_off_is_noop() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("logs");
        init_logging("off", &dir).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_empty_dir_rejected() {
        assert!(matches!(
            init_logging("info", Path::new("")),
            Err(LogError::EmptyDir)
        ));
    }

    fn read_logs(dir: &Path) -> String {
        let mut text = String::new();
        for entry in std::fs::read_dir(dir).unwrap() {
            text.push_str(&std::fs::read_to_string(entry.unwrap().path()).unwrap());
        }
        text
    }

    // The logger is process-wide, so every case that starts it lives here
    #[test]
    fn test_init_lifecycle() {
        use crate::model::item::default_seed;
        use crate::ops::store::{Command, TaskStore};

        let tmp = tempfile::TempDir::new().unwrap();

        // A directory under a regular file cannot be created
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        assert!(matches!(
            init_logging("debug", &blocker.join("logs")),
            Err(LogError::CreateDir { .. })
        ));

        let dir = tmp.path().join("logs");
        init_logging("debug", &dir).unwrap();
        init_logging("DEBUG", &dir).unwrap();
        assert!(matches!(
            init_logging("info", &dir),
            Err(LogError::AlreadyInitialized { level: "debug", .. })
        ));
        assert!(matches!(
            init_logging("debug", &tmp.path().join("elsewhere")),
            Err(LogError::AlreadyInitialized { .. })
        ));

        let mut store = TaskStore::new(&default_seed());
        store.dispatch(&Command::Add {
            key: "buy milk".into(),
            category: "home".into(),
        });
        flush();

        let logs = read_logs(&dir);
        assert!(logs.contains("event=app_start"));
        assert!(logs.contains("event=dispatch command=add key=\"buy milk\" items_before=3"));
    }
}
