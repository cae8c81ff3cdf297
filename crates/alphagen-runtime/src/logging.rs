//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Everything is driven by [`LoggingConfig`]; the global subscriber is
//! installed once per process.
//!
//! ```rust,ignore
//! use alphagen_runtime::{config::load_config, logging};
//!
//! let config = load_config()?;
//! logging::init_from_config(&config.logging);
//! ```

use std::ffi::OsStr;
use std::path::Path;

use tracing::Subscriber;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use crate::config::{LogFormat, LogOutput, LoggingConfig, SpanEventConfig};

/// Initialize logging from a `LoggingConfig`.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_from_config(config: &LoggingConfig) {
    let _ = try_init_from_config(config);
}

/// Installs the subscriber built by [`build_subscriber`] as the global default.
pub fn try_init_from_config(config: &LoggingConfig) -> Result<(), TryInitError> {
    build_subscriber(config).try_init()?;

    if cfg!(not(feature = "json-log")) && config.format == LogFormat::Json {
        tracing::warn!("JSON log format requires the json-log feature, using compact");
    }
    if config.output == LogOutput::File && config.file_path.is_none() {
        tracing::warn!("File output requested but no file path configured, using stderr");
    }
    Ok(())
}

/// Builds a subscriber for `config` without installing it.
///
/// `RUST_LOG` takes precedence over the configured base level; the
/// per-module `filters` are added on top.
pub fn build_subscriber(config: &LoggingConfig) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry()
        .with(fmt_layer::<Registry>(config, make_writer(config)))
        .with(build_filter(config))
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    let mut filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    for (module, level) in &config.filters {
        if let Ok(directive) = format!("{module}={level}").parse() {
            filter = filter.add_directive(directive);
        }
    }

    filter
}

fn make_writer(config: &LoggingConfig) -> BoxMakeWriter {
    match (config.output, config.file_path.as_deref()) {
        (LogOutput::Stdout, _) => BoxMakeWriter::new(std::io::stdout),
        (LogOutput::File, Some(path)) => BoxMakeWriter::new(tracing_appender::rolling::never(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_name().unwrap_or_else(|| OsStr::new("alphagen.log")),
        )),
        (LogOutput::Stderr, _) | (LogOutput::File, None) => BoxMakeWriter::new(std::io::stderr),
    }
}

fn fmt_layer<S>(config: &LoggingConfig, writer: BoxMakeWriter) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.output != LogOutput::File)
        .with_span_events(fmt_span(&config.span_events))
        .with_thread_ids(config.thread_ids)
        .with_file(config.file_location)
        .with_line_number(config.file_location);

    match config.format {
        #[cfg(feature = "json-log")]
        LogFormat::Json => layer.json().boxed(),
        #[cfg(not(feature = "json-log"))]
        LogFormat::Json => layer.compact().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Full => layer.boxed(),
        LogFormat::Pretty => layer.pretty().boxed(),
    }
}

fn fmt_span(events: &SpanEventConfig) -> FmtSpan {
    let mut span = FmtSpan::NONE;
    if events.new {
        span |= FmtSpan::NEW;
    }
    if events.enter {
        span |= FmtSpan::ENTER;
    }
    if events.exit {
        span |= FmtSpan::EXIT;
    }
    if events.close {
        span |= FmtSpan::CLOSE;
    }
    span
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn test_fmt_span_mapping() {
        assert_eq!(fmt_span(&SpanEventConfig::default()), FmtSpan::NONE);

        let lifecycle = SpanEventConfig {
            new: true,
            close: true,
            ..Default::default()
        };
        assert_eq!(fmt_span(&lifecycle), FmtSpan::NEW | FmtSpan::CLOSE);

        let all = SpanEventConfig {
            new: true,
            enter: true,
            exit: true,
            close: true,
        };
        assert_eq!(fmt_span(&all), FmtSpan::FULL);
    }

    #[test]
    fn test_file_output_writes_log_file() {
        let dir = std::env::temp_dir().join(format!("alphagen-log-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("alphagen.log");
        let _ = std::fs::remove_file(&path);

        let mut config = LoggingConfig {
            level: LogLevel::Debug,
            output: LogOutput::File,
            file_path: Some(path.clone()),
            ..Default::default()
        };
        config
            .filters
            .insert("alphagen_runtime".to_string(), LogLevel::Trace);

        tracing::subscriber::with_default(build_subscriber(&config), || {
            tracing::debug!(target: "alphagen_runtime", "written to the log file");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("written to the log file"), "{contents:?}");
        assert!(!contents.contains('\u{1b}'), "file output must not carry ANSI codes");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_from_config(&LoggingConfig::default());
        init_from_config(&LoggingConfig::default());
    }
}
