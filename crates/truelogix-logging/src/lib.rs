//! Console and JSONL logging for the TrueLogiX landing page
//!
//! # Features
//!
//! - **JSONL Output**: Structured JSON lines format for log aggregation (default)
//! - **Pretty Console**: Human-readable output for development
//! - **Visitor Context**: Session id and entry path recorded on a `visitor` span
//! - **File Rotation**: Daily/hourly log rotation via tracing-appender
//!
//! # Quick Start
//!
//! ```ignore
//! use truelogix_logging::{LandingSubscriberBuilder, LogConfig};
//!
//! // JSONL to console
//! LandingSubscriberBuilder::new().init();
//!
//! // Development mode with pretty human-readable output
//! LandingSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init();
//! ```

pub mod config;
pub mod context;
pub mod error;

pub use config::{ConsoleConfig, FileConfig, JsonlConfig, LogConfig, RotationStrategy};
pub use context::{VisitorContextData, VisitorContextGuard};
pub use error::LoggingError;

use std::fs::{self, File};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Builder for configuring and initializing the logging subscriber
///
/// By default, console output uses JSONL format. Use `LogConfig::development()`
/// for human-readable pretty output during development.
pub struct LandingSubscriberBuilder {
    config: LogConfig,
}

impl LandingSubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Switch the console between pretty and JSONL output
    pub fn with_pretty_console(mut self, pretty: bool) -> Self {
        self.config.console.pretty = pretty;
        self.config.console.ansi = pretty;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    /// The configuration that will be installed
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Initialize the subscriber globally
    ///
    /// Returns a guard that must be kept alive for the duration of the
    /// program when file output is enabled. Failures are reported on stderr
    /// and leave logging uninstalled.
    pub fn init(self) -> Option<WorkerGuard> {
        match self.try_init() {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Warning: Failed to initialize logging: {}", e);
                None
            }
        }
    }

    /// Try to initialize the subscriber globally
    pub fn try_init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.default_level));

        let jsonl = &self.config.jsonl;
        let console = &self.config.console;

        let pretty_console = (console.enabled && console.pretty).then(|| {
            tracing_subscriber::fmt::layer()
                .with_ansi(console.ansi)
                .with_target(true)
        });

        let jsonl_console = (console.enabled && !console.pretty).then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(jsonl.include_spans)
                .flatten_event(jsonl.flatten_events)
                .with_file(jsonl.include_location)
                .with_line_number(jsonl.include_location)
        });

        let (file_layer, guard) = match &self.config.file {
            Some(file_config) => {
                let (writer, guard) = create_file_writer(file_config)?;
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(jsonl.include_spans)
                    .flatten_event(jsonl.flatten_events)
                    .with_file(jsonl.include_location)
                    .with_line_number(jsonl.include_location)
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        Registry::default()
            .with(env_filter)
            .with(pretty_console)
            .with(jsonl_console)
            .with(file_layer)
            .try_init()
            .map_err(|_| LoggingError::AlreadyInitialized)?;

        Ok(guard)
    }
}

impl Default for LandingSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Open the non-blocking writer for file output
///
/// `Never` truncates a single file; the other strategies append to rolling files.
fn create_file_writer(file_config: &FileConfig) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    match file_config.rotation {
        RotationStrategy::Never => {
            fs::create_dir_all(&file_config.directory)?;
            let file_path = file_config.directory.join(format!("{}.log", file_config.prefix));
            let file = File::create(&file_path)?;
            Ok(tracing_appender::non_blocking(file))
        }
        RotationStrategy::Daily => {
            let appender =
                RollingFileAppender::new(Rotation::DAILY, &file_config.directory, &file_config.prefix);
            Ok(tracing_appender::non_blocking(appender))
        }
        RotationStrategy::Hourly => {
            let appender =
                RollingFileAppender::new(Rotation::HOURLY, &file_config.directory, &file_config.prefix);
            Ok(tracing_appender::non_blocking(appender))
        }
    }
}

/// Initialize logging for testing (minimal output)
pub fn init_testing() {
    let _ = LandingSubscriberBuilder::new()
        .with_config(LogConfig::testing())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creation() {
        let builder = LandingSubscriberBuilder::new();
        assert_eq!(builder.config.default_level, "info");
    }

    #[test]
    fn test_default_is_jsonl() {
        let builder = LandingSubscriberBuilder::new();
        assert!(!builder.config.console.pretty); // JSONL by default
    }

    #[test]
    fn test_builder_with_config() {
        let builder = LandingSubscriberBuilder::new().with_config(LogConfig::development());
        assert_eq!(builder.config.default_level, "debug");
        assert!(builder.config.console.pretty);
    }

    #[test]
    fn test_builder_overrides() {
        let builder = LandingSubscriberBuilder::new()
            .with_level("trace")
            .with_console(false)
            .with_pretty_console(true)
            .with_file_output(FileConfig::default());

        let config = builder.config();
        assert_eq!(config.default_level, "trace");
        assert!(!config.console.enabled);
        assert!(config.console.pretty && config.console.ansi);
        assert!(config.file.is_some());
    }

    #[test]
    fn test_never_rotation_creates_file() {
        let dir = std::env::temp_dir().join(format!("truelogix-log-{}", uuid::Uuid::new_v4()));
        let config = FileConfig {
            directory: dir.clone(),
            prefix: "landing".to_string(),
            rotation: RotationStrategy::Never,
        };

        let (_writer, _guard) = create_file_writer(&config).unwrap();
        assert!(dir.join("landing.log").exists());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_second_init_reports_already_initialized() {
        init_testing();
        let err = LandingSubscriberBuilder::new()
            .with_config(LogConfig::testing())
            .try_init()
            .unwrap_err();
        assert!(matches!(err, LoggingError::AlreadyInitialized));
    }
}
