//! Printable output through stub layout engines.

mod chrome;

use crate::common;
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use tutorly_guide::formats::pdf::{ContentNode, DocDefinition, PdfFormat, StyleToken};
use tutorly_guide::{
    generate_pdf, publish, ExportAction, ExportJob, FileExporter, FormatRegistry, GuideError,
    LayoutEngine, LayoutError, PrintableArtifact,
};

#[derive(Clone, Default)]
struct CapturingEngine {
    definitions: Arc<Mutex<Vec<DocDefinition>>>,
}

impl LayoutEngine for CapturingEngine {
    fn layout(&self, definition: &DocDefinition) -> Result<PrintableArtifact, LayoutError> {
        self.definitions.lock().unwrap().push(definition.clone());
        Ok(PrintableArtifact::new(b"%PDF-1.7\n%%EOF\n".to_vec()))
    }
}

struct BrokenEngine;

impl LayoutEngine for BrokenEngine {
    fn layout(&self, _definition: &DocDefinition) -> Result<PrintableArtifact, LayoutError> {
        Err(LayoutError::EngineNotFound("no engine installed".to_string()))
    }
}

#[test]
fn test_list_items_reach_engine_unescaped() {
    let engine = CapturingEngine::default();
    let request = tutorly_guide::StudyGuideRequest::new("Q&A", "R&D\n50% off", "#hashtag");
    generate_pdf(&request, engine.clone(), "Roboto").unwrap();

    let definitions = engine.definitions.lock().unwrap();
    let content = &definitions[0].content;
    assert_eq!(
        content[0],
        ContentNode::Text {
            text: "Q&A".to_string(),
            style: StyleToken::Header
        }
    );
    assert_eq!(
        content[2],
        ContentNode::BulletList {
            ul: vec!["R&D".to_string(), "50% off".to_string()],
            margin: [0, 5, 0, 15],
        }
    );
    assert_eq!(
        content[3],
        ContentNode::Text {
            text: "#hashtag".to_string(),
            style: StyleToken::BodyText
        }
    );
}

#[test]
fn test_blank_request_never_reaches_engine() {
    let engine = CapturingEngine::default();
    let result = generate_pdf(&common::blank(), engine.clone(), "Roboto");
    assert_eq!(result, Err(GuideError::NoContent));
    assert!(engine.definitions.lock().unwrap().is_empty());
}

#[test]
fn test_engine_failure_is_passed_through() {
    let result = generate_pdf(&common::topics_only(), BrokenEngine, "Roboto");
    assert_eq!(
        result,
        Err(GuideError::Layout(LayoutError::EngineNotFound(
            "no engine installed".to_string()
        )))
    );
}

#[test]
fn test_publish_opens_printable_into_directory() {
    let dir = tempdir().unwrap();
    let mut registry = FormatRegistry::new();
    registry.register(PdfFormat::new(CapturingEngine::default()));
    let mut exporter = FileExporter::new(dir.path());

    let request = common::kitchen_sink();
    let job = ExportJob::new(&request, "pdf").with_audio_title("Week 1");
    let action = publish(&registry, job, &mut exporter).unwrap();

    assert_eq!(
        action,
        ExportAction::Opened {
            filename: "Week_1_apuntes.pdf".to_string()
        }
    );
    let bytes = fs::read(dir.path().join("Week_1_apuntes.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
