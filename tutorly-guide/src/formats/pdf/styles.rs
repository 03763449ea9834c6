//! Fixed style table for the printable output.
//!
//! | Token        | Size | Weight / shape        | Margin [l, t, r, b] | Other            |
//! |--------------|------|-----------------------|---------------------|------------------|
//! | `header`     | 20   | bold                  | [0, 0, 0, 15]       |                  |
//! | `subheader`  | 16   | bold                  | [0, 10, 0, 8]       |                  |
//! | `bodyText`   | 11   | normal                | [0, 0, 0, 10]       | line height 1.4  |
//! | `sourceInfo` | 9    | italic, right aligned |                     |                  |
//!
//! Bullet lists carry their own node margin, [`LIST_MARGIN`].

use serde::Serialize;

/// Margins in points, ordered left, top, right, bottom.
pub type Margin = [u16; 4];

/// Margin applied to the bulleted topic list.
pub const LIST_MARGIN: Margin = [0, 5, 0, 15];

/// Named style referenced by a content node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleToken {
    Header,
    Subheader,
    BodyText,
    SourceInfo,
}

impl StyleToken {
    pub const ALL: [StyleToken; 4] = [
        StyleToken::Header,
        StyleToken::Subheader,
        StyleToken::BodyText,
        StyleToken::SourceInfo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleToken::Header => "header",
            StyleToken::Subheader => "subheader",
            StyleToken::BodyText => "bodyText",
            StyleToken::SourceInfo => "sourceInfo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    fn is_left(&self) -> bool {
        *self == Alignment::Left
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Typography for one style token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSpec {
    pub font_size: u16,
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italics: bool,
    #[serde(skip_serializing_if = "Alignment::is_left")]
    pub alignment: Alignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    pub color: &'static str,
}

/// The complete style table handed to the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleTable {
    pub header: StyleSpec,
    pub subheader: StyleSpec,
    pub body_text: StyleSpec,
    pub source_info: StyleSpec,
}

impl StyleTable {
    pub fn get(&self, token: StyleToken) -> &StyleSpec {
        match token {
            StyleToken::Header => &self.header,
            StyleToken::Subheader => &self.subheader,
            StyleToken::BodyText => &self.body_text,
            StyleToken::SourceInfo => &self.source_info,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleToken, &StyleSpec)> {
        StyleToken::ALL.into_iter().map(move |token| (token, self.get(token)))
    }
}

pub static STYLE_TABLE: StyleTable = StyleTable {
    header: StyleSpec {
        font_size: 20,
        bold: true,
        italics: false,
        alignment: Alignment::Left,
        margin: Some([0, 0, 0, 15]),
        line_height: None,
        color: "#1a202c",
    },
    subheader: StyleSpec {
        font_size: 16,
        bold: true,
        italics: false,
        alignment: Alignment::Left,
        margin: Some([0, 10, 0, 8]),
        line_height: None,
        color: "#2d3748",
    },
    body_text: StyleSpec {
        font_size: 11,
        bold: false,
        italics: false,
        alignment: Alignment::Left,
        margin: Some([0, 0, 0, 10]),
        line_height: Some(1.4),
        color: "#4a5568",
    },
    source_info: StyleSpec {
        font_size: 9,
        bold: false,
        italics: true,
        alignment: Alignment::Right,
        margin: None,
        line_height: None,
        color: "#718096",
    },
};
