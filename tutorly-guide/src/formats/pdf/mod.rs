//! Printable (PDF) output.
//!
//! The renderer maps the content model onto a [`DocDefinition`] using the
//! fixed [`STYLE_TABLE`] and delegates pagination to a [`LayoutEngine`]. No
//! escaping happens on this path; engines receive raw text.
//!
//! With the `native-export` feature the default engine is
//! [`ChromeLayoutEngine`], which prints HTML through headless Chrome.

mod definition;
mod styles;

#[cfg(feature = "native-export")]
mod chrome;

pub use definition::{ContentNode, DefaultStyle, DocDefinition, DEFAULT_FONT};
pub use styles::{Alignment, Margin, StyleSpec, StyleTable, StyleToken, LIST_MARGIN, STYLE_TABLE};

#[cfg(feature = "native-export")]
pub use chrome::ChromeLayoutEngine;

use crate::error::{GuideError, LayoutError};
use crate::format::{reject_unknown_options, Format, RenderedGuide};
use crate::layout::{LayoutEngine, PrintableArtifact, PDF_MIME};
use crate::model::StudyGuideDocument;
use std::collections::HashMap;

/// Format implementation that hands styled content to a layout engine.
pub struct PdfFormat {
    engine: Box<dyn LayoutEngine>,
    default_font: String,
}

impl PdfFormat {
    pub fn new(engine: impl LayoutEngine + 'static) -> Self {
        Self {
            engine: Box::new(engine),
            default_font: DEFAULT_FONT.to_string(),
        }
    }

    pub fn with_default_font(mut self, font: impl Into<String>) -> Self {
        self.default_font = font.into();
        self
    }

    pub fn default_font(&self) -> &str {
        &self.default_font
    }

    /// Lay out `doc` with the configured default font.
    pub fn render_pdf(&self, doc: &StudyGuideDocument) -> Result<PrintableArtifact, LayoutError> {
        self.render_pdf_with_font(doc, &self.default_font)
    }

    fn render_pdf_with_font(
        &self,
        doc: &StudyGuideDocument,
        font: &str,
    ) -> Result<PrintableArtifact, LayoutError> {
        let definition = DocDefinition::from_document(doc, font);
        tracing::debug!(nodes = definition.content.len(), font, "laying out printable guide");
        self.engine.layout(&definition).inspect_err(|err| {
            tracing::warn!(error = %err, "layout engine failed");
        })
    }
}

#[cfg(feature = "native-export")]
impl Default for PdfFormat {
    fn default() -> Self {
        Self::new(ChromeLayoutEngine::default())
    }
}

impl Format for PdfFormat {
    fn name(&self) -> &str {
        "pdf"
    }

    fn description(&self) -> &str {
        "Printable study guide laid out by an external engine"
    }

    fn file_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn mime_type(&self) -> &str {
        PDF_MIME
    }

    fn render(&self, doc: &StudyGuideDocument) -> Result<RenderedGuide, GuideError> {
        Ok(RenderedGuide::Printable(self.render_pdf(doc)?))
    }

    fn render_with_options(
        &self,
        doc: &StudyGuideDocument,
        options: &HashMap<String, String>,
    ) -> Result<RenderedGuide, GuideError> {
        reject_unknown_options(self.name(), options, &["font"])?;
        let font = options
            .get("font")
            .map(String::as_str)
            .unwrap_or(&self.default_font);
        Ok(RenderedGuide::Printable(
            self.render_pdf_with_font(doc, font)?,
        ))
    }
}
