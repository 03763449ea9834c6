//! Assembles the content model from raw editor text.
//!
//! The emptiness check lives in [`ensure_content`] and runs at the entry point;
//! [`build`] itself accepts any request and always returns a well-formed guide.

use crate::error::GuideError;
use crate::model::{
    ContentBlock, StudyGuideDocument, StudyGuideRequest, ATTRIBUTION, TOPICS_CAPTION,
    TRANSCRIPT_CAPTION,
};
use crate::segment::{has_content, split_lines, split_paragraphs};

/// Audio title used when the recording has none.
pub const DEFAULT_AUDIO_TITLE: &str = "Class";

/// Initial guide title offered for a recording.
pub fn default_title(audio_title: &str) -> String {
    format!("Class Notes - {audio_title}")
}

/// Reject requests whose topics and notes are both blank.
pub fn ensure_content(request: &StudyGuideRequest) -> Result<(), GuideError> {
    if has_content(&request.topics) || has_content(&request.notes) {
        Ok(())
    } else {
        Err(GuideError::NoContent)
    }
}

/// Build the block sequence for `request`.
pub fn build(request: &StudyGuideRequest) -> StudyGuideDocument {
    let topics = split_lines(&request.topics);
    let paragraphs = split_paragraphs(&request.notes);

    let mut blocks = Vec::with_capacity(paragraphs.len() + 4);
    blocks.push(ContentBlock::Title(request.title.clone()));

    let topic_count = topics.len();
    if topics.is_empty() {
        blocks.push(ContentBlock::Subheader(TRANSCRIPT_CAPTION));
    } else {
        blocks.push(ContentBlock::Subheader(TOPICS_CAPTION));
        blocks.push(ContentBlock::List(topics));
    }

    let paragraph_count = paragraphs.len();
    blocks.extend(paragraphs.into_iter().map(ContentBlock::Paragraph));
    blocks.push(ContentBlock::Attribution(ATTRIBUTION));

    tracing::debug!(
        topics = topic_count,
        paragraphs = paragraph_count,
        blocks = blocks.len(),
        "built study guide model"
    );

    StudyGuideDocument::from_blocks(blocks)
}

/// Guard then build, for callers that always want the validated path.
pub fn build_checked(request: &StudyGuideRequest) -> Result<StudyGuideDocument, GuideError> {
    ensure_content(request)?;
    Ok(build(request))
}
