//! Layout engine built on print CSS + headless Chrome.
//!
//! The definition is turned into a standalone HTML page whose stylesheet is
//! derived from the style table, then a Chrome/Chromium binary running in
//! headless mode prints that page to PDF.

use super::definition::{ContentNode, DocDefinition};
use super::styles::{Margin, StyleSpec, StyleToken};
use crate::error::LayoutError;
use crate::layout::{LayoutEngine, PrintableArtifact};
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;
use url::Url;
use which::which;

/// Prints study guides through a Chrome/Chromium binary.
#[derive(Debug, Clone, Default)]
pub struct ChromeLayoutEngine {
    binary: Option<PathBuf>,
}

impl ChromeLayoutEngine {
    /// Engine that locates Chrome on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine pinned to a specific binary, skipping detection.
    pub fn with_binary(path: impl Into<PathBuf>) -> Self {
        Self {
            binary: Some(path.into()),
        }
    }
}

impl LayoutEngine for ChromeLayoutEngine {
    fn layout(&self, definition: &DocDefinition) -> Result<PrintableArtifact, LayoutError> {
        let html = definition_to_html(definition)?;
        let chrome = match &self.binary {
            Some(path) => path.clone(),
            None => resolve_chrome_binary()?,
        };
        print_html_to_pdf(&chrome, &html).map(PrintableArtifact::new)
    }
}

/// Render a definition as a complete, print-ready HTML page.
pub(crate) fn definition_to_html(definition: &DocDefinition) -> Result<String, LayoutError> {
    let container = create_element("div", vec![("class", "guide")]);

    for node in &definition.content {
        let element = match node {
            ContentNode::Text { text, style } => {
                let class = format!("style-{}", style.as_str());
                let element = create_element(tag_for(*style), vec![("class", &class)]);
                append(&element, create_text(text));
                element
            }
            ContentNode::BulletList { ul, margin } => {
                let inline = format!("margin: {};", css_margin(*margin));
                let list = create_element("ul", vec![("style", &inline)]);
                for item in ul {
                    let li = create_element("li", vec![]);
                    append(&li, create_text(item));
                    append(&list, li);
                }
                list
            }
        };
        append(&container, element);
    }

    let body = serialize_children(&container)?;
    Ok(wrap_in_document(&body, definition))
}

fn tag_for(style: StyleToken) -> &'static str {
    match style {
        StyleToken::Header => "h1",
        StyleToken::Subheader => "h2",
        StyleToken::BodyText | StyleToken::SourceInfo => "p",
    }
}

fn stylesheet(definition: &DocDefinition) -> String {
    let font = css_font_name(&definition.default_style.font);
    let mut css = format!(
        "@page {{ size: A4; margin: 40pt; }}\n\
         body {{ margin: 0; font-family: '{font}', sans-serif; font-size: 12pt; }}\n\
         ul {{ padding-left: 18pt; }}\n"
    );
    for (token, style) in definition.styles.iter() {
        css.push_str(&rule_for(token, style));
    }
    css
}

fn rule_for(token: StyleToken, style: &StyleSpec) -> String {
    let mut declarations = vec![
        format!("font-size: {}pt", style.font_size),
        format!(
            "font-weight: {}",
            if style.bold { "bold" } else { "normal" }
        ),
        format!(
            "font-style: {}",
            if style.italics { "italic" } else { "normal" }
        ),
        format!("text-align: {}", style.alignment.as_css()),
        format!("margin: {}", style.margin.map(css_margin).unwrap_or_else(|| "0".to_string())),
        format!("color: {}", style.color),
        "white-space: pre-line".to_string(),
    ];
    if let Some(line_height) = style.line_height {
        declarations.push(format!("line-height: {line_height}"));
    }
    format!(".style-{} {{ {}; }}\n", token.as_str(), declarations.join("; "))
}

/// Convert a left/top/right/bottom margin into CSS shorthand order.
fn css_margin(margin: Margin) -> String {
    let [left, top, right, bottom] = margin;
    format!("{top}pt {right}pt {bottom}pt {left}pt")
}

fn css_font_name(font: &str) -> String {
    font.chars()
        .filter(|c| !matches!(c, '\'' | '"' | '\\' | '<' | '>' | ';' | '{' | '}'))
        .collect()
}

fn wrap_in_document(body_html: &str, definition: &DocDefinition) -> String {
    let title = definition
        .content
        .iter()
        .find_map(|node| match node {
            ContentNode::Text {
                text,
                style: StyleToken::Header,
            } => Some(text.as_str()),
            _ => None,
        })
        .unwrap_or("Study Guide");
    let escaped_title = html_escape(title);
    let css = stylesheet(definition);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="generator" content="tutorly-guide">
  <title>{escaped_title}</title>
  <style>
{css}
  </style>
</head>
<body>
<div class="guide">
{body_html}
</div>
</body>
</html>"#
    )
}

fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    std::rc::Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

fn create_text(text: &str) -> Handle {
    std::rc::Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

fn serialize_children(container: &Handle) -> Result<String, LayoutError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in container.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone())
            .map_err(|e| LayoutError::Io(format!("HTML serialization failed: {e}")))?;
        output.push(b'\n');
    }

    String::from_utf8(output)
        .map_err(|e| LayoutError::Io(format!("UTF-8 conversion failed: {e}")))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn print_html_to_pdf(chrome: &Path, html: &str) -> Result<Vec<u8>, LayoutError> {
    let temp_dir = tempdir().map_err(|e| LayoutError::Io(format!("Temp dir error: {e}")))?;
    let html_path = temp_dir.path().join("study-guide.html");
    fs::write(&html_path, html).map_err(|e| LayoutError::Io(e.to_string()))?;

    let pdf_path = temp_dir.path().join("study-guide.pdf");
    let file_url = Url::from_file_path(&html_path).map_err(|_| {
        LayoutError::Io("Failed to construct file:// URL for HTML input".to_string())
    })?;

    tracing::debug!(chrome = %chrome.display(), "printing study guide with Chrome");
    let status = Command::new(chrome)
        .arg("--headless")
        .arg("--disable-gpu")
        .arg("--no-sandbox")
        .arg("--disable-dev-shm-usage")
        .arg("--print-to-pdf-no-header")
        .arg(format!("--print-to-pdf={}", pdf_path.display()))
        .arg(file_url.as_str())
        .status()
        .map_err(|e| {
            LayoutError::EngineFailed(format!(
                "Failed to launch Chrome ({}): {}",
                chrome.display(),
                e
            ))
        })?;

    if !status.success() {
        return Err(LayoutError::EngineFailed(format!(
            "Chrome exited with status {status}"
        )));
    }

    fs::read(&pdf_path).map_err(|e| LayoutError::Io(e.to_string()))
}

/// Well-known install locations, checked after `PATH` lookup.
#[cfg(target_os = "linux")]
const PLATFORM_DEFAULTS: &[&str] = &[
    "/usr/bin/google-chrome",
    "/usr/bin/google-chrome-stable",
    "/usr/bin/chromium-browser",
    "/usr/bin/chromium",
    "/snap/bin/chromium",
];

#[cfg(target_os = "macos")]
const PLATFORM_DEFAULTS: &[&str] = &[
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    "/Applications/Chromium.app/Contents/MacOS/Chromium",
];

#[cfg(target_os = "windows")]
const PLATFORM_DEFAULTS: &[&str] = &[
    r"C:\Program Files\Google\Chrome\Application\chrome.exe",
    r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
];

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const PLATFORM_DEFAULTS: &[&str] = &[];

fn first_existing(candidates: &[&str]) -> Option<PathBuf> {
    candidates.iter().map(PathBuf::from).find(|path| path.is_file())
}

fn resolve_chrome_binary() -> Result<PathBuf, LayoutError> {
    for var in ["TUTORLY_CHROME_BIN", "GOOGLE_CHROME_BIN", "CHROME_BIN"] {
        if let Some(path) = env::var_os(var) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
    }

    for candidate in [
        "google-chrome",
        "google-chrome-stable",
        "chromium",
        "chromium-browser",
        "chrome",
        "msedge",
    ] {
        if let Ok(path) = which(candidate) {
            return Ok(path);
        }
    }

    if let Some(path) = first_existing(PLATFORM_DEFAULTS) {
        return Ok(path);
    }

    Err(LayoutError::EngineNotFound(
        "Unable to locate a Chrome/Chromium binary. Set TUTORLY_CHROME_BIN to override the detection."
            .to_string(),
    ))
}
