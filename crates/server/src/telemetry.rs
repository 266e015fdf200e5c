//! Logging setup.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log_level`. With a `log_file`, output
/// goes through a non-blocking file writer without ANSI colors; keep the
/// returned guard alive for the life of the process so buffered lines are
/// flushed.
pub fn init_logging(log_level: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let builder = tracing_subscriber::fmt();
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let Some(log_file) = log_file else {
        builder.with_env_filter(filter()).init();
        return Ok(None);
    };

    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file_name = log_file
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid log file name"))?
        .to_string_lossy()
        .to_string();
    let directory = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .to_path_buf();

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    builder
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_env_filter(filter())
        .init();

    Ok(Some(guard))
}
