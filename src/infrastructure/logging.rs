//! Logging system configuration and initialization
//!
//! Console plus append-only file output (`logs/scraper.log`), with log level
//! control from configuration and `RUST_LOG` override. Initialized once,
//! explicitly, at program start; the extraction core itself never logs.

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;
use tracing::info;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Registry, fmt,
    layer::{Layer as _, SubscriberExt},
    util::SubscriberInitExt,
};

pub use crate::infrastructure::config::LoggingConfig;

// Keeps the non-blocking file writer alive for the life of the process.
static LOG_GUARDS: Lazy<Mutex<Vec<tracing_appender::non_blocking::WorkerGuard>>> =
    Lazy::new(|| Mutex::new(Vec::new()));

const LOG_FILE_NAME: &str = "scraper.log";

/// Log directory relative to the executable location.
pub fn get_log_directory() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(std::path::Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    exe_dir.join("logs")
}

/// Initialize the logging system with default configuration.
pub fn init_logging() -> Result<()> {
    init_logging_with_config(LoggingConfig::default())
}

/// Initialize logging with custom configuration.
///
/// `RUST_LOG` overrides the configured level. Below TRACE, noisy dependency
/// targets (HTTP client internals, html5ever) are capped so the run log
/// stays readable.
pub fn init_logging_with_config(config: LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut filter = EnvFilter::new(&config.level);

        if !config.level.to_lowercase().contains("trace") {
            filter = filter
                .add_directive("reqwest=info".parse().unwrap())
                .add_directive("hyper=warn".parse().unwrap())
                .add_directive("html5ever=warn".parse().unwrap())
                .add_directive("selectors=warn".parse().unwrap());
        }

        filter
    });

    let registry = Registry::default().with(env_filter);

    match (config.file_output, config.console_output) {
        (true, true) => {
            let file_layer = build_file_layer(&config)?;
            let console_layer = fmt::Layer::new()
                .with_writer(std::io::stdout)
                .with_target(false);
            registry.with(file_layer).with(console_layer).init();
        }
        (true, false) => {
            let file_layer = build_file_layer(&config)?;
            registry.with(file_layer).init();
        }
        (false, true) => {
            let console_layer = fmt::Layer::new()
                .with_writer(std::io::stdout)
                .with_target(false);
            registry.with(console_layer).init();
        }
        (false, false) => {
            return Err(anyhow!("No logging output configured"));
        }
    }

    info!("Logging system initialized");
    info!("Log level: {}", config.level);
    info!("Console output: {}", config.console_output);
    info!("File output: {}", config.file_output);

    Ok(())
}

fn build_file_layer<S>(
    config: &LoggingConfig,
) -> Result<Box<dyn tracing_subscriber::Layer<S> + Send + Sync>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)
        .map_err(|e| anyhow!("Failed to create log directory {:?}: {}", log_dir, e))?;

    let file_appender = rolling::never(&log_dir, LOG_FILE_NAME);
    let (file_writer, file_guard) = non_blocking(file_appender);
    LOG_GUARDS.lock().unwrap().push(file_guard);

    let layer = if config.json_format {
        fmt::Layer::new()
            .json()
            .with_writer(file_writer)
            .with_target(true)
            .with_ansi(false)
            .boxed()
    } else {
        fmt::Layer::new()
            .with_writer(file_writer)
            .with_target(false)
            .with_ansi(false)
            .boxed()
    };

    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_config_default_is_sane() {
        let config = LoggingConfig::default();
        assert!(!config.level.is_empty());
        assert!(config.console_output);
        assert!(config.file_output);
    }

    #[test]
    fn log_directory_ends_with_logs() {
        let log_dir = get_log_directory();
        assert!(log_dir.to_string_lossy().ends_with("logs"));
    }
}
