use std::path::PathBuf;

use directories_next::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`).
pub const LOG_ENV: &str = "DIRBROWSE_LOG";
pub const LOG_FILE: &str = "dirbrowse.log";

/// Directory the log file is written to.
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dirbrowse").map(|d| d.cache_dir().to_path_buf())
}

/// Send `tracing` output to a file in the user cache directory; the browser
/// owns the terminal, so nothing is logged there.
///
/// Returns the writer guard, which must stay alive until exit so buffered
/// lines are flushed. `None` means logging is disabled.
pub fn init_logging() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir).ok()?;
    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}
