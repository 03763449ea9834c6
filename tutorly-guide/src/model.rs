//! Core data structures for a study guide.

/// Caption used when the guide lists topics.
pub const TOPICS_CAPTION: &str = "Main Topics";

/// Caption used when the guide has no topics and goes straight to the notes.
pub const TRANSCRIPT_CAPTION: &str = "Full Transcript";

/// Trailing attribution line present in every guide.
pub const ATTRIBUTION: &str = "Source: automatic class transcription.";

/// Raw editor input for one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyGuideRequest {
    pub title: String,
    /// One candidate topic per line
    pub topics: String,
    /// Notes or transcript text; paragraphs separated by blank lines
    pub notes: String,
}

impl StudyGuideRequest {
    pub fn new(
        title: impl Into<String>,
        topics: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            topics: topics.into(),
            notes: notes.into(),
        }
    }
}

/// One structural unit of a study guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Title(String),
    /// Either [`TOPICS_CAPTION`] or [`TRANSCRIPT_CAPTION`]
    Subheader(&'static str),
    /// Bulleted topics; never empty, every item trimmed and non-blank
    List(Vec<String>),
    Paragraph(String),
    Attribution(&'static str),
}

impl ContentBlock {
    /// Short name of the block kind, used in logs and tree dumps.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Title(_) => "title",
            ContentBlock::Subheader(_) => "subheader",
            ContentBlock::List(_) => "list",
            ContentBlock::Paragraph(_) => "paragraph",
            ContentBlock::Attribution(_) => "attribution",
        }
    }
}

/// An ordered, immutable sequence of content blocks.
///
/// Only [`crate::builder::build`] constructs this type, which guarantees the
/// title-first / attribution-last structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyGuideDocument {
    blocks: Vec<ContentBlock>,
}

impl StudyGuideDocument {
    pub(crate) fn from_blocks(blocks: Vec<ContentBlock>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// Text of the leading title block.
    pub fn title(&self) -> &str {
        match self.blocks.first() {
            Some(ContentBlock::Title(text)) => text,
            _ => "",
        }
    }

    /// Topic items, if the guide lists any.
    pub fn topics(&self) -> Option<&[String]> {
        self.blocks.iter().find_map(|block| match block {
            ContentBlock::List(items) => Some(items.as_slice()),
            _ => None,
        })
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            ContentBlock::Paragraph(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
