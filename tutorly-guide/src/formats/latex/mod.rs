//! LaTeX source output.
//!
//! Produces a complete, self-contained `article` document as a string. The
//! title and all user text pass through [`escape`]; captions are fixed strings
//! and are emitted verbatim.
//!
//! # Block Mapping
//!
//! | Block       | LaTeX                                            |
//! |-------------|--------------------------------------------------|
//! | Title       | `\title{...}` in the preamble, set by `\maketitle` |
//! | Subheader   | `\section*{caption}`                             |
//! | List        | `itemize` environment, one escaped `\item` each  |
//! | Paragraph   | escaped text followed by a blank line            |
//! | Attribution | `\vfill` then `\hfill \textit{...}`              |

use crate::error::GuideError;
use crate::escape::escape;
use crate::export::suggested_filename as derive_filename;
use crate::format::{reject_unknown_options, Format, RenderedGuide};
use crate::model::{ContentBlock, StudyGuideDocument};
use std::collections::HashMap;

/// Author line used when none is configured.
pub const DEFAULT_AUTHOR: &str = "Generated by Tutorly";

/// MIME type offered with downloaded `.tex` files.
pub const LATEX_MIME: &str = "application/x-tex;charset=utf-8";

const PREAMBLE: &str = "\\documentclass[12pt,a4paper]{article}
\\usepackage[utf8]{inputenc}
\\usepackage{amsmath}
\\usepackage{amsfonts}
\\usepackage{amssymb}
\\usepackage{graphicx}
\\usepackage[left=2cm,right=2cm,top=2cm,bottom=2cm]{geometry}
\\usepackage{parskip}
";

/// Download filename for a recording: `"Linear Algebra"` → `"Linear_Algebra_apuntes.tex"`.
pub fn suggested_filename(audio_title: &str) -> String {
    derive_filename(audio_title, "tex")
}

/// Render `doc` as LaTeX source with the given `\author` line.
///
/// The author tag is inserted as-is.
pub fn render_latex(doc: &StudyGuideDocument, author_tag: &str) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(PREAMBLE);
    out.push('\n');
    out.push_str(&format!("\\title{{{}}}\n", escape(doc.title())));
    out.push_str(&format!("\\author{{{author_tag}}}\n"));
    out.push_str("\\date{\\today}\n\n");

    out.push_str("\\begin{document}\n");
    out.push_str("\\maketitle\n");
    out.push_str("\\thispagestyle{empty}\n");
    out.push_str("\\clearpage\n\n");

    for block in doc.blocks() {
        match block {
            ContentBlock::Title(_) => {}
            ContentBlock::Subheader(caption) => {
                out.push_str(&format!("\\section*{{{caption}}}\n"));
            }
            ContentBlock::List(items) => {
                out.push_str("\\begin{itemize}\n");
                for item in items {
                    out.push_str(&format!("  \\item {}\n", escape(item)));
                }
                out.push_str("\\end{itemize}\n\n");
            }
            ContentBlock::Paragraph(text) => {
                out.push_str(&escape(text));
                out.push_str("\n\n");
            }
            ContentBlock::Attribution(text) => {
                out.push_str("\n\n\\vfill\n");
                out.push_str(&format!("\\hfill \\textit{{{text}}}\n"));
            }
        }
    }

    out.push_str("\\end{document}\n");
    tracing::debug!(bytes = out.len(), "rendered LaTeX source");
    out
}

/// Format implementation for LaTeX source
pub struct LatexFormat {
    author: String,
}

impl Default for LatexFormat {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHOR)
    }
}

impl LatexFormat {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

impl Format for LatexFormat {
    fn name(&self) -> &str {
        "latex"
    }

    fn description(&self) -> &str {
        "Standalone LaTeX article source"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tex", "latex"]
    }

    fn mime_type(&self) -> &str {
        LATEX_MIME
    }

    fn render(&self, doc: &StudyGuideDocument) -> Result<RenderedGuide, GuideError> {
        Ok(RenderedGuide::Text(render_latex(doc, &self.author)))
    }

    fn render_with_options(
        &self,
        doc: &StudyGuideDocument,
        options: &HashMap<String, String>,
    ) -> Result<RenderedGuide, GuideError> {
        reject_unknown_options(self.name(), options, &["author"])?;
        let author = options.get("author").unwrap_or(&self.author);
        Ok(RenderedGuide::Text(render_latex(doc, author)))
    }
}
