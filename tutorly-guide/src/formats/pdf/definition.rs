//! Styled content sequence handed to the layout engine.

use super::styles::{Margin, StyleTable, StyleToken, LIST_MARGIN, STYLE_TABLE};
use crate::model::{ContentBlock, StudyGuideDocument};
use serde::Serialize;

/// Font used when no other font is configured.
pub const DEFAULT_FONT: &str = "Roboto";

/// One styled node of printable content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContentNode {
    Text { text: String, style: StyleToken },
    /// Bulleted list; items are passed through unescaped
    BulletList { ul: Vec<String>, margin: Margin },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultStyle {
    pub font: String,
}

/// Everything a layout engine needs: content, style table and default font.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocDefinition {
    pub content: Vec<ContentNode>,
    pub styles: &'static StyleTable,
    pub default_style: DefaultStyle,
}

impl DocDefinition {
    /// Map each block of `doc` to exactly one styled node.
    pub fn from_document(doc: &StudyGuideDocument, font: &str) -> Self {
        let content = doc.blocks().iter().map(block_to_node).collect();
        Self {
            content,
            styles: &STYLE_TABLE,
            default_style: DefaultStyle {
                font: font.to_string(),
            },
        }
    }
}

fn block_to_node(block: &ContentBlock) -> ContentNode {
    match block {
        ContentBlock::Title(text) => text_node(text, StyleToken::Header),
        ContentBlock::Subheader(caption) => text_node(caption, StyleToken::Subheader),
        ContentBlock::List(items) => ContentNode::BulletList {
            ul: items.clone(),
            margin: LIST_MARGIN,
        },
        ContentBlock::Paragraph(text) => text_node(text, StyleToken::BodyText),
        ContentBlock::Attribution(text) => text_node(text, StyleToken::SourceInfo),
    }
}

fn text_node(text: &str, style: StyleToken) -> ContentNode {
    ContentNode::Text {
        text: text.to_string(),
        style,
    }
}
