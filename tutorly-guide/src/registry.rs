//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::GuideError;
use crate::format::{Format, RenderedGuide};
use crate::model::StudyGuideDocument;
use std::collections::HashMap;

/// Registry of study guide formats
///
/// # Examples
///
/// ```ignore
/// let mut registry = FormatRegistry::new();
/// registry.register(LatexFormat::new("Prof. X"));
///
/// let rendered = registry.render(&doc, "latex")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, GuideError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| GuideError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name().to_string())
    }

    /// Render a document using the specified format
    pub fn render(
        &self,
        doc: &StudyGuideDocument,
        format: &str,
    ) -> Result<RenderedGuide, GuideError> {
        self.get(format)?.render(doc)
    }

    /// Render a document using the specified format and options
    pub fn render_with_options(
        &self,
        doc: &StudyGuideDocument,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<RenderedGuide, GuideError> {
        self.get(format)?.render_with_options(doc, options)
    }

    /// Render to text, failing if the format produces a printable artifact
    pub fn render_text(
        &self,
        doc: &StudyGuideDocument,
        format: &str,
    ) -> Result<String, GuideError> {
        match self.render(doc, format)? {
            RenderedGuide::Text(text) => Ok(text),
            RenderedGuide::Printable(_) => Err(GuideError::NotSupported(format!(
                "Format '{format}' produced printable output when text was expected"
            ))),
        }
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::latex::LatexFormat::default());
        registry.register(crate::formats::docdef::DocDefFormat::default());
        #[cfg(feature = "native-export")]
        registry.register(crate::formats::pdf::PdfFormat::default());

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
