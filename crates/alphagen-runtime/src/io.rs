//! Concrete [`TextSource`] and [`AlphabetSink`] implementations.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use alphagen_core::{AlphabetSink, SinkError, SinkResult, SourceError, SourceResult, TextSource};
use tracing::trace;

/// Name reported for standard input.
pub const STDIN_NAME: &str = "<stdin>";
/// Name reported for standard output.
pub const STDOUT_NAME: &str = "<stdout>";

// =============================================================================
// Sources
// =============================================================================

/// In-memory source.
#[derive(Debug, Clone)]
pub struct StringSource {
    name: String,
    text: Vec<u8>,
}

impl StringSource {
    /// Creates a source named `<string>`.
    pub fn new(text: impl Into<String>) -> Self {
        Self::named("<string>", text)
    }

    /// Creates a source with an explicit name.
    pub fn named(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into().into_bytes(),
        }
    }

    /// Creates a source from raw bytes, which need not be valid UTF-8.
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            text: bytes.into(),
        }
    }
}

impl TextSource for StringSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_all(&mut self) -> SourceResult<Vec<u8>> {
        Ok(self.text.clone())
    }
}

/// Reads a whole file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_all(&mut self) -> SourceResult<Vec<u8>> {
        let bytes = fs::read(&self.path).map_err(|e| SourceError::io(&self.name, &e))?;
        trace!(source = %self.name, bytes = bytes.len(), "Read file");
        Ok(bytes)
    }
}

/// Reads standard input to the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl TextSource for StdinSource {
    fn name(&self) -> &str {
        STDIN_NAME
    }

    fn read_all(&mut self) -> SourceResult<Vec<u8>> {
        let mut bytes = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map_err(|e| SourceError::io(STDIN_NAME, &e))?;
        trace!(bytes = bytes.len(), "Read stdin");
        Ok(bytes)
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Writes to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl AlphabetSink for StdoutSink {
    fn name(&self) -> &str {
        STDOUT_NAME
    }

    fn write_output(&mut self, output: &str) -> SinkResult<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(output.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| SinkError::io(STDOUT_NAME, &e))
    }
}

/// Writes (truncating) to a file.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    name: String,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl AlphabetSink for FileSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_output(&mut self, output: &str) -> SinkResult<()> {
        fs::write(&self.path, output).map_err(|e| SinkError::io(&self.name, &e))
    }
}

/// Collects every write in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    written: String,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> &str {
        &self.written
    }

    pub fn into_contents(self) -> String {
        self.written
    }
}

impl AlphabetSink for MemorySink {
    fn name(&self) -> &str {
        "<memory>"
    }

    fn write_output(&mut self, output: &str) -> SinkResult<()> {
        self.written.push_str(output);
        Ok(())
    }
}
