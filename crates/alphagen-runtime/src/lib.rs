//! Alphagen Runtime - configuration, logging and I/O wiring around the
//! alphabet extractor.
//!
//! This crate provides:
//! - Layered configuration loading (`ConfigLoader`, `AlphagenConfig`)
//! - Logging setup from `LoggingConfig`
//! - File, stdin, stdout and in-memory sources and sinks
//! - The `AlphagenRuntime` runner that ties them together
//!
//! ```rust,ignore
//! use alphagen_runtime::AlphagenRuntime;
//! use alphagen_runtime::io::{FileSource, StdoutSink};
//!
//! fn main() -> anyhow::Result<()> {
//!     let runtime = AlphagenRuntime::new();
//!     let mut sources = [FileSource::new("poem.txt"), FileSource::new("novel.txt")];
//!     runtime.run(&mut sources, &mut StdoutSink)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod runtime;

// Re-exports
pub use config::{AlphagenConfig, ConfigError, ConfigLoader, ConfigResult};
pub use error::{RuntimeError, RuntimeResult};
pub use logging::init_from_config;
pub use runtime::{AlphagenRuntime, InputMode, RunReport, RuntimeBuilder, render_output};

// Re-export tracing for use by other crates
pub use tracing;
pub use tracing_subscriber;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};
}
