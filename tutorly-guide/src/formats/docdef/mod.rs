//! JSON dump of the printable document definition.
//!
//! Emits exactly what a layout engine would receive (content, styles and
//! default style), which makes the PDF mapping inspectable without running an
//! engine.

use crate::error::GuideError;
use crate::format::{reject_unknown_options, Format, RenderedGuide};
use crate::formats::pdf::{DocDefinition, DEFAULT_FONT};
use crate::model::StudyGuideDocument;
use std::collections::HashMap;

/// Format implementation for the JSON document definition
pub struct DocDefFormat {
    font: String,
}

impl Default for DocDefFormat {
    fn default() -> Self {
        Self::new(DEFAULT_FONT)
    }
}

impl DocDefFormat {
    pub fn new(font: impl Into<String>) -> Self {
        Self { font: font.into() }
    }

    fn to_json(&self, doc: &StudyGuideDocument, font: &str) -> Result<String, GuideError> {
        let definition = DocDefinition::from_document(doc, font);
        serde_json::to_string_pretty(&definition)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| GuideError::Export(format!("JSON serialization failed: {e}")))
    }
}

impl Format for DocDefFormat {
    fn name(&self) -> &str {
        "docdef"
    }

    fn description(&self) -> &str {
        "Printable document definition as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn mime_type(&self) -> &str {
        "application/json"
    }

    fn render(&self, doc: &StudyGuideDocument) -> Result<RenderedGuide, GuideError> {
        self.to_json(doc, &self.font).map(RenderedGuide::Text)
    }

    fn render_with_options(
        &self,
        doc: &StudyGuideDocument,
        options: &HashMap<String, String>,
    ) -> Result<RenderedGuide, GuideError> {
        reject_unknown_options(self.name(), options, &["font"])?;
        let font = options.get("font").unwrap_or(&self.font);
        self.to_json(doc, font).map(RenderedGuide::Text)
    }
}
