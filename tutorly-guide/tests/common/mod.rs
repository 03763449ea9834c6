//! Shared fixtures for integration tests.

use tutorly_guide::StudyGuideRequest;

/// Topics and notes with every LaTeX character the escaper handles.
pub fn kitchen_sink() -> StudyGuideRequest {
    StudyGuideRequest::new(
        "Week 1",
        "Topic A\nTopic B",
        "Intro & overview.\n\n\n\nDetails at 100%.",
    )
}

pub fn topics_only() -> StudyGuideRequest {
    StudyGuideRequest::new("Week 1", "Topic A\nTopic B", "")
}

pub fn notes_only() -> StudyGuideRequest {
    StudyGuideRequest::new("Week 2", "", "Paragraph one.\n\nParagraph two.")
}

pub fn blank() -> StudyGuideRequest {
    StudyGuideRequest::new("Week 3", "", "")
}
