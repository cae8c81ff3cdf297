//! # Alphagen Core
//!
//! Extracts the alphabet of a text: the distinct characters it uses, in
//! ascending code-value order, with `\r`, `\n` and `\t` removed.
//!
//! ```text
//! input ──▶ distinct set ──▶ ascending order ──▶ drop \r \n \t ──▶ output
//! ```
//!
//! ## Example
//!
//! ```
//! use alphagen_core::{Alphabet, extract_alphabet};
//!
//! assert_eq!(extract_alphabet("Zz Aa"), " AZaz");
//!
//! let mut alphabet = Alphabet::from_text("first file\n");
//! alphabet.extend_from_text("second file\n");
//! assert_eq!(alphabet.render(), " cdefilnorst");
//! ```
//!
//! The crate also defines the [`TextSource`] and [`AlphabetSink`] seams used
//! by the runtime to feed input in and route results out.

pub mod alphabet;
pub mod error;
pub mod extract;
pub mod io;

pub use alphabet::{Alphabet, EXCLUDED_CHARS, is_excluded};
pub use error::{
    AlphabetError, AlphabetResult, SinkError, SinkResult, SourceError, SourceResult,
};
pub use extract::{extract_alphabet, extract_alphabet_from_bytes, extract_alphabet_from_value};
pub use io::{AlphabetSink, BoxedSink, BoxedSource, TextSource};
