//! Rolling Logger
//!
//! Installs a tracing subscriber that logs to stderr and to a size-rotated
//! file set, and keeps the most recent lines in memory. Records emitted
//! through the `log` facade are bridged into tracing.

use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

mod rolling_file;

pub use rolling_file::{RecentLines, RollingFile};
pub use tracing_subscriber::filter::LevelFilter;

/// Rotate the current file once it would exceed this size
const MAX_FILE_BYTES: u64 = 1024 * 1024;
/// Files kept on disk, current one included
const MAX_FILES: usize = 5;
/// Lines kept in memory for `recent_lines`
const RECENT_CAPACITY: usize = 200;

static RECENT: OnceLock<Arc<Mutex<RecentLines>>> = OnceLock::new();

#[derive(Debug)]
pub enum LoggerError {
    Io(std::io::Error),
    /// A global subscriber or logger was already set
    AlreadyInitialized(String),
    NotInitialized,
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "Log file error: {}", e),
            LoggerError::AlreadyInitialized(msg) => write!(f, "Logger already initialized: {}", msg),
            LoggerError::NotInitialized => write!(f, "Logger not initialized"),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> Self {
        LoggerError::Io(e)
    }
}

/// Initialize logging into `log_dir/<app_name>.log`
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with_level(log_dir, app_name, LevelFilter::INFO)
}

pub fn init_logger_with_level(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    level: LevelFilter,
) -> Result<(), LoggerError> {
    if RECENT.get().is_some() {
        return Err(LoggerError::AlreadyInitialized(app_name.to_string()));
    }

    let recent = Arc::new(Mutex::new(RecentLines::new(RECENT_CAPACITY)));
    let file = RollingFile::open(
        log_dir.as_ref(),
        app_name,
        MAX_FILE_BYTES,
        MAX_FILES,
        Arc::clone(&recent),
    )?;

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(level)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    // Lost race with a concurrent init: the subscriber above failed already.
    let _ = RECENT.set(recent);
    Ok(())
}

fn ensure_initialized() -> Result<(), LoggerError> {
    RECENT.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::info!(target: "app", "{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::warn!(target: "app", "{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::error!(target: "app", "{}", msg);
    Ok(())
}

/// Most recent log lines, oldest first. Empty before init.
pub fn recent_lines() -> Vec<String> {
    RECENT
        .get()
        .and_then(|recent| recent.lock().ok().map(|r| r.lines()))
        .unwrap_or_default()
}
