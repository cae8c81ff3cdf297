//! # Alphagen
//!
//! Extracts the alphabet of a text: every distinct character it uses,
//! once, in ascending code-value order, with `\r`, `\n` and `\t` left out.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌───────────────┐
//! │ TextSource  │────▶│    Extractor     │────▶│ AlphabetSink  │
//! │ file, stdin │     │ (alphagen-core)  │     │ stdout, file  │
//! └─────────────┘     └──────────────────┘     └───────────────┘
//!                  config + logging: alphagen-runtime
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use alphagen::prelude::*;
//!
//! assert_eq!(extract_alphabet("hello, world\n"), " ,dehlorw");
//! ```
//!
//! Running the whole pipeline:
//!
//! ```rust,ignore
//! use alphagen::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let runtime = AlphagenRuntime::new();
//!     runtime.run(&mut [StdinSource], &mut StdoutSink)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `toml-config` *(default)*: TOML configuration files
//! - `yaml-config`: YAML configuration files
//! - `json-log`: JSON log lines

pub use alphagen_core as core;
pub use alphagen_runtime as runtime;

/// Prelude module for convenient imports.
pub mod prelude {
    // Extraction
    pub use alphagen_core::{
        Alphabet, AlphabetError, AlphabetResult, extract_alphabet, extract_alphabet_from_bytes,
        extract_alphabet_from_value,
    };

    // Collaborator seams
    pub use alphagen_core::{AlphabetSink, BoxedSink, BoxedSource, TextSource};

    // Runtime
    pub use alphagen_runtime::io::{
        FileSink, FileSource, MemorySink, StdinSource, StdoutSink, StringSource,
    };
    pub use alphagen_runtime::{AlphagenRuntime, InputMode, RunReport, RuntimeError};
}
