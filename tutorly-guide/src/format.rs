//! Format trait definition
//!
//! This module defines the core Format trait that all study guide renderers implement.
//! The trait provides a uniform interface over text (LaTeX, JSON) and printable (PDF) output.

use crate::error::GuideError;
use crate::layout::PrintableArtifact;
use crate::model::StudyGuideDocument;
use std::collections::HashMap;

/// Rendered output produced by a [`Format`] implementation.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedGuide {
    /// UTF-8 text output (e.g., LaTeX source, JSON)
    Text(String),
    /// Paginated output from a layout engine (e.g., PDF)
    Printable(PrintableArtifact),
}

impl RenderedGuide {
    /// Consume the rendered output and return the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            RenderedGuide::Text(text) => text.into_bytes(),
            RenderedGuide::Printable(artifact) => artifact.into_bytes(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RenderedGuide::Text(text) => Some(text),
            RenderedGuide::Printable(_) => None,
        }
    }
}

/// Trait for study guide output formats
///
/// Implementors turn a [`StudyGuideDocument`] into a finished artifact. The
/// document is borrowed immutably; rendering never changes it.
///
/// # Examples
///
/// ```ignore
/// struct PlainFormat;
///
/// impl Format for PlainFormat {
///     fn name(&self) -> &str {
///         "plain"
///     }
///
///     fn render(&self, doc: &StudyGuideDocument) -> Result<RenderedGuide, GuideError> {
///         Ok(RenderedGuide::Text(doc.title().to_string()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "latex", "pdf")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// MIME type used when the artifact is offered for download.
    fn mime_type(&self) -> &str {
        "text/plain;charset=utf-8"
    }

    /// Render a document with the format's defaults.
    fn render(&self, doc: &StudyGuideDocument) -> Result<RenderedGuide, GuideError>;

    /// Render a document, optionally using extra parameters.
    ///
    /// Formats without options can rely on the default implementation, which
    /// rejects any non-empty option map.
    fn render_with_options(
        &self,
        doc: &StudyGuideDocument,
        options: &HashMap<String, String>,
    ) -> Result<RenderedGuide, GuideError> {
        if options.is_empty() {
            self.render(doc)
        } else {
            Err(GuideError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Fail with `NotSupported` if `options` carries keys outside `known`.
pub(crate) fn reject_unknown_options(
    format: &str,
    options: &HashMap<String, String>,
    known: &[&str],
) -> Result<(), GuideError> {
    let mut unknown: Vec<&str> = options
        .keys()
        .map(String::as_str)
        .filter(|key| !known.contains(key))
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort_unstable();
    Err(GuideError::NotSupported(format!(
        "Format '{format}' does not support option(s): {}",
        unknown.join(", ")
    )))
}
