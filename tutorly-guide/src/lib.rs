//! Study guide generation for class transcripts
//!
//!     This crate turns raw, user-edited text (a title, an optional list of topics and free-form
//!     notes or transcript text) into a structurally consistent document model, then renders that
//!     model into independent output formats: LaTeX source and a printable (PDF) document.
//!
//!     This is a pure lib, that is, it powers the tutorly cli but is shell agnostic: no code here
//!     prints to stdout or reads the environment, apart from locating a Chrome binary for the
//!     native PDF engine.
//!
//! Architecture
//!
//!     raw text ──► ensure_content ──► builder::build ──► StudyGuideDocument
//!                                                             │
//!                          ┌──────────────────────────────────┼───────────────────┐
//!                          ▼                                  ▼                   ▼
//!                    LatexFormat                         PdfFormat           DocDefFormat
//!                    (String)                  (DocDefinition → LayoutEngine)   (JSON)
//!                          │                                  │
//!                          └──────────────► ExportTrigger ◄───┘
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── segment.rs              # Line / paragraph splitting
//!     ├── escape.rs               # LaTeX escaping
//!     ├── model.rs                # Content blocks and the document
//!     ├── builder.rs              # Request → document, NoContent guard
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── layout.rs               # LayoutEngine seam, PrintableArtifact
//!     ├── export.rs               # ExportTrigger and the publish pipeline
//!     ├── preview.rs              # Editor preview and view state
//!     └── formats
//!         ├── latex
//!         ├── pdf                 # Style table, DocDefinition, Chrome engine
//!         └── docdef
//!
//! Segmentation
//!
//!     Topics are one per line; notes are split into paragraphs at any run of blank lines. Both
//!     are purely structural: nothing is summarized or inferred from the text.
//!
//! Escaping
//!
//!     Only `&`, `%` and `#` are escaped in LaTeX output. Other reserved characters pass through,
//!     see [`escape`].
//!
//! Testing
//!     tests
//!     ├── lib.rs                  # Aggregates the submodules below
//!     ├── common                  # Shared request fixtures
//!     ├── latex                   # End-to-end LaTeX output
//!     ├── pdf                     # PDF through a stub engine / stub Chrome
//!     └── properties              # Property tests for segmentation and building
//!
pub mod builder;
pub mod error;
pub mod escape;
pub mod export;
pub mod format;
pub mod formats;
pub mod layout;
pub mod model;
pub mod preview;
pub mod registry;
pub mod segment;

pub use builder::{build, build_checked, default_title, ensure_content};
pub use error::{GuideError, LayoutError};
pub use escape::escape;
pub use export::{publish, ExportAction, ExportJob, ExportTrigger, FileExporter};
pub use format::{Format, RenderedGuide};
pub use layout::{LayoutEngine, PrintableArtifact};
pub use model::{ContentBlock, StudyGuideDocument, StudyGuideRequest};
pub use registry::FormatRegistry;

/// Guard, build and render `request` as LaTeX source.
pub fn generate_latex(request: &StudyGuideRequest, author_tag: &str) -> Result<String, GuideError> {
    let doc = build_checked(request)?;
    Ok(formats::latex::render_latex(&doc, author_tag))
}

/// Guard, build and lay out `request` with `engine`.
///
/// Engine failures come back as [`GuideError::Layout`] carrying the engine's
/// own error.
pub fn generate_pdf(
    request: &StudyGuideRequest,
    engine: impl LayoutEngine + 'static,
    font: &str,
) -> Result<PrintableArtifact, GuideError> {
    let doc = build_checked(request)?;
    let format = formats::pdf::PdfFormat::new(engine).with_default_font(font);
    Ok(format.render_pdf(&doc)?)
}
