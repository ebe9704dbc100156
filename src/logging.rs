//! Tracing subscriber setup.
//!
//! Logs always go to stdout, either human-readable or as JSON lines. When a
//! log directory is configured, the same events are also written to a
//! daily-rolling file named `receipt_processor.log.YYYY-MM-DD`.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogConfig, LogFormat};

const LOG_FILE_PREFIX: &str = "receipt_processor.log";

/// Build the filter: `RUST_LOG` wins, then `--verbose`, then the configured level.
pub fn build_filter(config: &LogConfig, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { config.level.as_str() };
        EnvFilter::new(format!("{},hyper=info", level))
    })
}

/// Initialize logging for the process.
///
/// Returns a WorkerGuard when file output is enabled; it must be held for
/// the lifetime of the application so buffered lines are flushed.
pub fn init_logging(config: &LogConfig, verbose: bool) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(config, verbose);

    let (json_layer, pretty_layer) = match config.format {
        LogFormat::Json => (Some(fmt::layer().json()), None),
        LogFormat::Pretty => (None, Some(fmt::layer())),
    };

    let (file_layer, guard) = match &config.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(pretty_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    if let Some(dir) = &config.dir {
        tracing::info!(log_dir = %dir.display(), "File logging enabled");
    }

    Ok(guard)
}
