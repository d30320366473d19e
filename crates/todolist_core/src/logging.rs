//! Process logger setup.
//!
//! Lines go to stderr, and also to size-rotated files when a log directory
//! is configured. Event lines carry `key=value` metadata only; todo text is
//! never passed to the logger.

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, LogSpecification, Logger, LoggerHandle, Naming,
    WriteMode,
};
use log::{info, LevelFilter};
use std::path::Path;

const LOG_FILE_BASENAME: &str = "todolist";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

/// Starts the process logger. Keep the returned handle alive for as long as
/// lines should be written; dropping it flushes and stops file output.
///
/// # Errors
/// - `level` is not one of `off|error|warn|info|debug|trace`.
/// - `log_dir` is blank, relative, or cannot be created.
/// - A logger is already installed in this process.
pub fn init_logging(level: &str, log_dir: Option<&str>) -> Result<LoggerHandle, String> {
    let filter: LevelFilter = level
        .trim()
        .parse()
        .map_err(|_| format!("unsupported log level `{}`", level.trim()))?;
    let log_dir = log_dir.map(absolute_dir).transpose()?;

    let logger = Logger::with(LogSpecification::builder().default(filter).build())
        .format(flexi_logger::detailed_format);
    let logger = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|err| {
                format!("failed to create log directory `{}`: {err}", dir.display())
            })?;
            logger
                .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .duplicate_to_stderr(Duplicate::All)
        }
        None => logger.log_to_stderr(),
    };
    let handle = logger
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    info!(
        "event=logging_init module=core status=ok level={filter} log_dir={} version={}",
        log_dir.map_or_else(|| "-".to_string(), |dir| dir.display().to_string()),
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}

/// `debug` in debug builds, `info` in release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn absolute_dir(raw: &str) -> Result<&Path, String> {
    let path = Path::new(raw.trim());
    if path.as_os_str().is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{}`", raw.trim()));
    }
    Ok(path)
}
