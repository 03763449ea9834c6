//! Editor-side preview of a guide before it is generated.
//!
//! The editor toggles between editing the raw fields and previewing them.
//! That toggle is caller state; the pipeline itself only ever sees strings.

use crate::model::StudyGuideRequest;
use crate::segment::{has_content, split_lines};
use std::fmt;

/// Default number of note characters shown in the preview.
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// Which form the editor is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    Editing,
    #[default]
    Previewing,
}

impl ViewState {
    /// Switch to the editable form.
    pub fn edit(self) -> Self {
        ViewState::Editing
    }

    /// Leave the editable form and show the preview.
    pub fn finish_editing(self) -> Self {
        ViewState::Previewing
    }

    pub fn is_editing(self) -> bool {
        self == ViewState::Editing
    }
}

/// Knobs for [`GuidePreview::from_request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    pub max_notes_chars: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_notes_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

/// Read-only summary of what a guide will contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidePreview {
    pub title: String,
    pub topics: Vec<String>,
    /// `"Detailed Notes"` when topics are present, otherwise `"Transcript"`
    pub notes_heading: Option<&'static str>,
    pub notes_excerpt: Option<String>,
}

impl GuidePreview {
    pub fn from_request(request: &StudyGuideRequest, options: PreviewOptions) -> Self {
        let topics = split_lines(&request.topics);
        let (notes_heading, notes_excerpt) = if has_content(&request.notes) {
            let heading = if topics.is_empty() {
                "Transcript"
            } else {
                "Detailed Notes"
            };
            (
                Some(heading),
                Some(truncate_chars(&request.notes, options.max_notes_chars)),
            )
        } else {
            (None, None)
        };

        Self {
            title: request.title.clone(),
            topics,
            notes_heading,
            notes_excerpt,
        }
    }
}

impl fmt::Display for GuidePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if !self.topics.is_empty() {
            writeln!(f, "\nMain Topics:")?;
            for topic in &self.topics {
                writeln!(f, "  - {topic}")?;
            }
        }
        if let (Some(heading), Some(excerpt)) = (self.notes_heading, &self.notes_excerpt) {
            writeln!(f, "\n{heading}:")?;
            writeln!(f, "{excerpt}")?;
        }
        Ok(())
    }
}

/// Keep the first `max` characters of `text`, appending `...` when cut.
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
