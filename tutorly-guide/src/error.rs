//! Error types for study guide generation

use std::fmt;

/// Errors raised by a printable-layout engine.
///
/// These are handed back to the caller exactly as the engine produced them;
/// the pipeline never retries or rewrites a layout failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No usable engine binary could be located
    EngineNotFound(String),
    /// Scratch file handling around the engine failed
    Io(String),
    /// The engine ran but did not produce a document
    EngineFailed(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::EngineNotFound(msg) => write!(f, "Layout engine not found: {msg}"),
            LayoutError::Io(msg) => write!(f, "Layout I/O error: {msg}"),
            LayoutError::EngineFailed(msg) => write!(f, "Layout engine failed: {msg}"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Errors that can occur while generating a study guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideError {
    /// Neither topics nor notes carry any non-whitespace text
    NoContent,
    /// Failure reported by the printable-layout engine
    Layout(LayoutError),
    /// Format not found in registry
    FormatNotFound(String),
    /// Operation or option not supported by a format
    NotSupported(String),
    /// The export side effect (open/download) failed
    Export(String),
}

impl fmt::Display for GuideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuideError::NoContent => write!(
                f,
                "No content to generate a study guide: add topics or notes first"
            ),
            GuideError::Layout(err) => write!(f, "{err}"),
            GuideError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            GuideError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
            GuideError::Export(msg) => write!(f, "Export error: {msg}"),
        }
    }
}

impl std::error::Error for GuideError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GuideError::Layout(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LayoutError> for GuideError {
    fn from(err: LayoutError) -> Self {
        GuideError::Layout(err)
    }
}
