//! Collaborator traits.
//!
//! The extractor never reads or writes anything itself. Whatever supplies
//! the text implements [`TextSource`]; whatever displays the result
//! implements [`AlphabetSink`]. Concrete implementations live in
//! `alphagen-runtime`.

use crate::error::{SinkResult, SourceResult};

/// Supplies raw input text.
///
/// Sources return bytes rather than `String` so that decoding, and the
/// rejection of non-text input, stays with the extractor.
pub trait TextSource {
    /// Human-readable name used in logs and errors (a path, `<stdin>`, ...).
    fn name(&self) -> &str;

    /// Reads the whole input.
    fn read_all(&mut self) -> SourceResult<Vec<u8>>;
}

/// Receives a rendered alphabet.
pub trait AlphabetSink {
    /// Human-readable name used in logs and errors.
    fn name(&self) -> &str;

    /// Writes the rendered output.
    fn write_output(&mut self, output: &str) -> SinkResult<()>;
}

impl<T: TextSource + ?Sized> TextSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read_all(&mut self) -> SourceResult<Vec<u8>> {
        (**self).read_all()
    }
}

impl<T: AlphabetSink + ?Sized> AlphabetSink for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn write_output(&mut self, output: &str) -> SinkResult<()> {
        (**self).write_output(output)
    }
}

/// Type-erased source.
pub type BoxedSource = Box<dyn TextSource>;

/// Type-erased sink.
pub type BoxedSink = Box<dyn AlphabetSink>;
