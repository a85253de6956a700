//! Structured logging setup using tracing
//!
//! Console output is always on; an optional JSON layer writes rotated log
//! files through a non-blocking appender.

use crate::config::LoggingConfig;
use crate::domain::{RedactorError, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Keeps the non-blocking file writer alive
///
/// Dropping the guard flushes buffered log lines; hold it for the lifetime of
/// the process.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system based on configuration
///
/// The filter honours `RUST_LOG` when set; otherwise it defaults to the
/// configured level for this crate's targets.
///
/// # Example
///
/// ```no_run
/// use redactor::logging::init_logging;
/// use redactor::config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// let _guard = init_logging("info", &config).expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level_str: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(log_level_str)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("redactor={level}")));

    let console = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(filter.clone())
        .boxed();
    let mut layers = vec![console];

    let file_guard = match build_file_layer(config, filter)? {
        Some((layer, guard)) => {
            layers.push(layer);
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry().with(layers).init();

    tracing::debug!(
        file_logging = config.local_enabled,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

/// Build the JSON rolling-file layer when file logging is enabled
fn build_file_layer(
    config: &LoggingConfig,
    filter: EnvFilter,
) -> Result<Option<(BoxedLayer, WorkerGuard)>> {
    if !config.local_enabled {
        return Ok(None);
    }

    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        RedactorError::Configuration(format!(
            "Failed to create log directory {}: {e}",
            config.local_path
        ))
    })?;

    let rotation = match config.local_rotation.as_str() {
        "hourly" => Rotation::HOURLY,
        _ => Rotation::DAILY,
    };
    let appender = RollingFileAppender::new(rotation, &config.local_path, "redactor.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(writer)
        .with_filter(filter)
        .boxed();

    Ok(Some((layer, guard)))
}

fn parse_log_level(level_str: &str) -> Result<Level> {
    level_str.to_lowercase().parse::<Level>().map_err(|_| {
        RedactorError::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))
    })
}
