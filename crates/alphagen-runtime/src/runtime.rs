//! Runtime orchestration: read sources, extract, render, write.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use alphagen_runtime::{AlphagenRuntime, io::{StdinSource, StdoutSink}};
//!
//! // Auto-loads alphagen.toml from the current directory
//! let runtime = AlphagenRuntime::new();
//! runtime.run(&mut [StdinSource], &mut StdoutSink)?;
//!
//! // Custom configuration
//! let runtime = AlphagenRuntime::builder()
//!     .config_file("config/alphagen.toml")
//!     .profile("production")
//!     .build()?;
//! ```

use alphagen_core::{Alphabet, AlphabetError, AlphabetSink, TextSource};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, info_span, trace};

use crate::config::{AlphagenConfig, ConfigLoader, OutputConfig, OutputFormat};
use crate::error::{RuntimeError, RuntimeResult};
use crate::logging;

/// How raw source bytes are turned into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// UTF-8 text.
    #[default]
    Text,
    /// A JSON document whose top-level value must be a string.
    Json,
}

impl InputMode {
    /// Decodes one source's bytes into its alphabet.
    pub fn decode(self, bytes: &[u8]) -> Result<Alphabet, AlphabetError> {
        match self {
            Self::Text => Alphabet::from_utf8(bytes),
            Self::Json => {
                let value: Value = serde_json::from_slice(bytes).map_err(|e| {
                    AlphabetError::invalid_argument(format!("input is not valid JSON: {e}"))
                })?;
                Alphabet::from_json_value(&value)
            }
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Number of sources read.
    pub sources: usize,
    /// Total bytes read across sources.
    pub input_bytes: usize,
    /// The merged alphabet.
    pub alphabet: Alphabet,
}

impl RunReport {
    pub fn alphabet_len(&self) -> usize {
        self.alphabet.len()
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    alphabet: &'a Alphabet,
    length: usize,
}

/// Reads sources, extracts their combined alphabet and writes it to a sink.
///
/// ```rust,ignore
/// let runtime = AlphagenRuntime::from_config(&config).with_input_mode(InputMode::Json);
/// let report = runtime.run(&mut [FileSource::new("doc.json")], &mut StdoutSink)?;
/// ```
#[derive(Debug, Clone)]
pub struct AlphagenRuntime {
    config: AlphagenConfig,
    input_mode: InputMode,
}

impl Default for AlphagenRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphagenRuntime {
    /// Creates a new runtime with automatic configuration loading.
    ///
    /// Searches the current directory for `alphagen.toml`, then initializes
    /// logging. Falls back to defaults if loading fails.
    pub fn new() -> Self {
        let config = ConfigLoader::new()
            .with_current_dir()
            .load()
            .unwrap_or_else(|e| {
                eprintln!("Warning: Failed to load config ({e}), using defaults");
                AlphagenConfig::default()
            });

        Self::from_config(&config)
    }

    /// Creates a runtime builder for custom configuration.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Creates a runtime from configuration and initializes logging.
    pub fn from_config(config: &AlphagenConfig) -> Self {
        logging::init_from_config(&config.logging);

        debug!(
            log_level = %config.logging.level,
            log_format = ?config.logging.format,
            output_format = ?config.output.format,
            "Runtime initialized from configuration"
        );

        Self {
            config: config.clone(),
            input_mode: InputMode::default(),
        }
    }

    /// Sets how source bytes are decoded.
    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = mode;
        self
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &AlphagenConfig {
        &self.config
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Reads every source and merges their alphabets.
    ///
    /// Fails on the first unreadable or invalid source.
    pub fn collect<S: TextSource>(&self, sources: &mut [S]) -> RuntimeResult<RunReport> {
        if sources.is_empty() {
            return Err(RuntimeError::NoInput);
        }

        let mut alphabet = Alphabet::new();
        let mut input_bytes = 0;

        for source in sources.iter_mut() {
            let span = info_span!("source", name = %source.name());
            let _enter = span.enter();

            let bytes = source.read_all()?;
            input_bytes += bytes.len();
            debug!(bytes = bytes.len(), mode = ?self.input_mode, "Input received");
            trace!(text = %String::from_utf8_lossy(&bytes), "Input text");

            let part = self
                .input_mode
                .decode(&bytes)
                .map_err(|e| RuntimeError::alphabet(source.name(), e))?;
            debug!(distinct = part.len(), "Source alphabet extracted");
            alphabet.merge(&part);
        }

        Ok(RunReport {
            sources: sources.len(),
            input_bytes,
            alphabet,
        })
    }

    /// Renders an alphabet according to the output configuration.
    pub fn render(&self, alphabet: &Alphabet) -> RuntimeResult<String> {
        render_output(&self.config.output, alphabet)
    }

    /// Collects all sources, renders the result and writes it to `sink`.
    pub fn run<S, K>(&self, sources: &mut [S], sink: &mut K) -> RuntimeResult<RunReport>
    where
        S: TextSource,
        K: AlphabetSink + ?Sized,
    {
        let report = self.collect(sources)?;
        let output = self.render(&report.alphabet)?;

        debug!(alphabet = %report.alphabet, sink = sink.name(), "Writing alphabet");
        sink.write_output(&output)?;

        info!(
            sources = report.sources,
            input_bytes = report.input_bytes,
            alphabet_len = report.alphabet_len(),
            "Alphabet extracted"
        );

        Ok(report)
    }
}

/// Renders `alphabet` as plain text or JSON.
pub fn render_output(config: &OutputConfig, alphabet: &Alphabet) -> RuntimeResult<String> {
    let mut output = match config.format {
        OutputFormat::Plain => alphabet.render(),
        OutputFormat::Json => serde_json::to_string(&JsonOutput {
            alphabet,
            length: alphabet.len(),
        })?,
    };
    if config.trailing_newline {
        output.push('\n');
    }
    Ok(output)
}

// =============================================================================
// RuntimeBuilder
// =============================================================================

/// Builder for creating an `AlphagenRuntime` with custom configuration.
pub struct RuntimeBuilder {
    config_loader: ConfigLoader,
    input_mode: InputMode,
}

impl RuntimeBuilder {
    /// Creates a new runtime builder searching the current directory.
    pub fn new() -> Self {
        Self {
            config_loader: ConfigLoader::new().with_current_dir(),
            input_mode: InputMode::default(),
        }
    }

    /// Sets a specific configuration file to load.
    pub fn config_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        self.config_loader = self.config_loader.file(path);
        self
    }

    /// Sets the configuration profile (e.g., "development", "production").
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.config_loader = self.config_loader.profile(profile);
        self
    }

    /// Adds a search path for configuration files.
    pub fn search_path<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        self.config_loader = self.config_loader.search_path(path);
        self
    }

    /// Enables loading environment variables (enabled by default).
    pub fn with_env(mut self) -> Self {
        self.config_loader = self.config_loader.with_env();
        self
    }

    /// Disables loading environment variables.
    pub fn without_env(mut self) -> Self {
        self.config_loader = self.config_loader.without_env();
        self
    }

    /// Merges additional configuration programmatically.
    pub fn merge(mut self, config: AlphagenConfig) -> Self {
        self.config_loader = self.config_loader.merge(config);
        self
    }

    /// Overrides a single configuration key.
    pub fn set<T: Serialize>(mut self, key: &str, value: T) -> Self {
        self.config_loader = self.config_loader.set(key, value);
        self
    }

    /// Sets how source bytes are decoded.
    pub fn input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = mode;
        self
    }

    /// Loads configuration and builds the runtime.
    pub fn build(self) -> RuntimeResult<AlphagenRuntime> {
        let config = self.config_loader.load()?;
        Ok(AlphagenRuntime::from_config(&config).with_input_mode(self.input_mode))
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
