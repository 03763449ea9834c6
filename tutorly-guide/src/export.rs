//! Generation pipeline and export side effects.
//!
//! [`publish`] runs the whole flow for one request: the NoContent guard, model
//! construction, rendering through the [`FormatRegistry`], and handing the
//! finished artifact to an [`ExportTrigger`]. Text artifacts are offered as a
//! download and printable artifacts are opened, both under a filename derived
//! from the job's audio title.
//!
//! The trigger is the only place with side effects, so the pipeline can run
//! headless with an in-memory trigger in tests.

use crate::builder::{build, ensure_content, DEFAULT_AUDIO_TITLE};
use crate::error::GuideError;
use crate::format::RenderedGuide;
use crate::layout::PrintableArtifact;
use crate::model::StudyGuideRequest;
use crate::registry::FormatRegistry;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Receives finished artifacts and performs the user-facing side effect.
pub trait ExportTrigger {
    /// Display or hand off a printable document saved as `filename`.
    fn open(&mut self, artifact: &PrintableArtifact, filename: &str) -> Result<(), GuideError>;

    /// Offer a text payload as a file download.
    fn download(&mut self, payload: &str, filename: &str, mime: &str) -> Result<(), GuideError>;
}

/// Download filename for a recording: whitespace runs and path separators
/// become `_`, then `_apuntes.<extension>` is appended.
pub fn suggested_filename(audio_title: &str, extension: &str) -> String {
    let mut stem = String::with_capacity(audio_title.len());
    let mut in_whitespace = false;
    for c in audio_title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
        } else {
            stem.push(if matches!(c, '/' | '\\') { '_' } else { c });
            in_whitespace = false;
        }
    }
    format!("{stem}_apuntes.{extension}")
}

/// Writes artifacts into a directory, creating it on first write.
#[derive(Debug, Clone)]
pub struct FileExporter {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FileExporter {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write(&mut self, filename: &str, bytes: &[u8]) -> Result<(), GuideError> {
        // Plain file names only, so nothing lands outside `dir`.
        if Path::new(filename).file_name() != Some(OsStr::new(filename)) {
            return Err(GuideError::Export(format!(
                "Invalid file name '{filename}' for '{}'",
                self.dir.display()
            )));
        }

        fs::create_dir_all(&self.dir).map_err(|err| {
            GuideError::Export(format!("Failed to create '{}': {err}", self.dir.display()))
        })?;

        let path = self.dir.join(filename);
        fs::write(&path, bytes).map_err(|err| {
            GuideError::Export(format!("Failed to write '{}': {err}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote artifact");
        self.written.push(path);
        Ok(())
    }
}

impl ExportTrigger for FileExporter {
    fn open(&mut self, artifact: &PrintableArtifact, filename: &str) -> Result<(), GuideError> {
        self.write(filename, artifact.as_bytes())
    }

    fn download(&mut self, payload: &str, filename: &str, _mime: &str) -> Result<(), GuideError> {
        self.write(filename, payload.as_bytes())
    }
}

/// Specifies one generation call.
///
/// ```ignore
/// let job = ExportJob::new(&request, "latex")
///     .with_audio_title("Linear Algebra")
///     .with_option("author", "Prof. X");
/// ```
#[derive(Debug)]
pub struct ExportJob<'a> {
    /// Raw editor text.
    pub request: &'a StudyGuideRequest,
    /// Target format name (e.g., "latex", "pdf").
    pub format: &'a str,
    /// Recording title used to derive filenames.
    pub audio_title: String,
    /// Format-specific options.
    pub options: HashMap<String, String>,
}

impl<'a> ExportJob<'a> {
    pub fn new(request: &'a StudyGuideRequest, format: &'a str) -> Self {
        Self {
            request,
            format,
            audio_title: DEFAULT_AUDIO_TITLE.to_string(),
            options: HashMap::new(),
        }
    }

    pub fn with_audio_title(mut self, audio_title: impl Into<String>) -> Self {
        self.audio_title = audio_title.into();
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// What the trigger was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportAction {
    Opened { filename: String },
    Downloaded { filename: String, mime: String },
}

/// Runs guard → build → render → export for `job`.
///
/// # Errors
///
/// - [`GuideError::NoContent`] before anything is built when topics and notes are blank
/// - [`GuideError::FormatNotFound`] / [`GuideError::NotSupported`] from the registry
/// - [`GuideError::Layout`] unchanged from the layout engine
/// - [`GuideError::Export`] from the trigger
pub fn publish(
    registry: &FormatRegistry,
    job: ExportJob<'_>,
    trigger: &mut dyn ExportTrigger,
) -> Result<ExportAction, GuideError> {
    ensure_content(job.request)?;
    let format = registry.get(job.format)?;
    let doc = build(job.request);

    let extension = format.file_extensions().first().copied().unwrap_or("txt");
    let filename = suggested_filename(&job.audio_title, extension);

    match format.render_with_options(&doc, &job.options)? {
        RenderedGuide::Text(text) => {
            let mime = format.mime_type().to_string();
            trigger.download(&text, &filename, &mime)?;
            Ok(ExportAction::Downloaded { filename, mime })
        }
        RenderedGuide::Printable(artifact) => {
            trigger.open(&artifact, &filename)?;
            Ok(ExportAction::Opened { filename })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use crate::formats::latex::LatexFormat;
    use crate::formats::pdf::{DocDefinition, PdfFormat};
    use crate::layout::LayoutEngine;
    use tempfile::tempdir;

    #[derive(Default)]
    struct MemoryTrigger {
        downloads: Vec<(String, String, String)>,
        opened: Vec<(PrintableArtifact, String)>,
    }

    impl ExportTrigger for MemoryTrigger {
        fn open(&mut self, artifact: &PrintableArtifact, filename: &str) -> Result<(), GuideError> {
            self.opened.push((artifact.clone(), filename.to_string()));
            Ok(())
        }

        fn download(
            &mut self,
            payload: &str,
            filename: &str,
            mime: &str,
        ) -> Result<(), GuideError> {
            self.downloads
                .push((payload.to_string(), filename.to_string(), mime.to_string()));
            Ok(())
        }
    }

    struct StubEngine;

    impl LayoutEngine for StubEngine {
        fn layout(&self, _definition: &DocDefinition) -> Result<PrintableArtifact, LayoutError> {
            Ok(PrintableArtifact::new(b"%PDF-stub".to_vec()))
        }
    }

    fn latex_registry() -> FormatRegistry {
        let mut registry = FormatRegistry::new();
        registry.register(LatexFormat::default());
        registry
    }

    fn pdf_registry() -> FormatRegistry {
        let mut registry = FormatRegistry::new();
        registry.register(PdfFormat::new(StubEngine));
        registry
    }

    #[test]
    fn suggested_filename_collapses_whitespace() {
        assert_eq!(
            suggested_filename("Optimización Lineal", "tex"),
            "Optimización_Lineal_apuntes.tex"
        );
        assert_eq!(suggested_filename("  a  b ", "pdf"), "_a_b__apuntes.pdf");
        assert_eq!(suggested_filename("Class", "pdf"), "Class_apuntes.pdf");
    }

    #[test]
    fn suggested_filename_replaces_path_separators() {
        assert_eq!(
            suggested_filename("Week 1/2 review", "tex"),
            "Week_1_2_review_apuntes.tex"
        );
        assert_eq!(suggested_filename("../escaped", "tex"), ".._escaped_apuntes.tex");
        assert_eq!(suggested_filename(r"a\b", "pdf"), "a_b_apuntes.pdf");
    }

    #[test]
    fn publishes_latex_as_download() {
        let request = StudyGuideRequest::new("Week 1", "Topic A", "");
        let mut trigger = MemoryTrigger::default();
        let action = publish(
            &latex_registry(),
            ExportJob::new(&request, "latex").with_audio_title("Linear Algebra"),
            &mut trigger,
        )
        .unwrap();

        assert_eq!(
            action,
            ExportAction::Downloaded {
                filename: "Linear_Algebra_apuntes.tex".to_string(),
                mime: "application/x-tex;charset=utf-8".to_string(),
            }
        );
        let (payload, filename, _) = &trigger.downloads[0];
        assert!(payload.contains("\\item Topic A"));
        assert_eq!(filename, "Linear_Algebra_apuntes.tex");
    }

    #[test]
    fn printable_name_follows_audio_title() {
        let dir = tempdir().unwrap();
        let request = StudyGuideRequest::new("Week 1", "Topic A", "");
        let mut exporter = FileExporter::new(dir.path());

        let action = publish(
            &pdf_registry(),
            ExportJob::new(&request, "pdf").with_audio_title("Linear Algebra"),
            &mut exporter,
        )
        .unwrap();

        assert_eq!(
            action,
            ExportAction::Opened {
                filename: "Linear_Algebra_apuntes.pdf".to_string()
            }
        );
        assert_eq!(
            exporter.written(),
            &[dir.path().join("Linear_Algebra_apuntes.pdf")]
        );
    }

    #[test]
    fn printable_name_defaults_to_class() {
        let request = StudyGuideRequest::new("Week 1", "", "Notes.");
        let mut trigger = MemoryTrigger::default();
        publish(&pdf_registry(), ExportJob::new(&request, "pdf"), &mut trigger).unwrap();

        assert_eq!(trigger.opened.len(), 1);
        assert_eq!(trigger.opened[0].0.as_bytes(), b"%PDF-stub");
        assert_eq!(trigger.opened[0].1, "Class_apuntes.pdf");
    }

    #[test]
    fn audio_title_cannot_leave_export_directory() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        let request = StudyGuideRequest::new("Week 1", "Topic A", "");

        for audio_title in ["../escaped", "Week 1/2 review"] {
            let mut exporter = FileExporter::new(&out);
            publish(
                &latex_registry(),
                ExportJob::new(&request, "latex").with_audio_title(audio_title),
                &mut exporter,
            )
            .unwrap();
            assert_eq!(exporter.written().len(), 1);
            assert_eq!(exporter.written()[0].parent(), Some(out.as_path()));
        }

        assert!(out.join(".._escaped_apuntes.tex").exists());
        assert!(out.join("Week_1_2_review_apuntes.tex").exists());
        assert!(!dir.path().join("escaped_apuntes.tex").exists());
    }

    #[test]
    fn file_exporter_rejects_non_plain_names() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        let mut exporter = FileExporter::new(&out);

        for name in ["../escaped.tex", "sub/notes.tex", "..", ""] {
            let result = exporter.download("x", name, "text/plain");
            assert!(
                matches!(result, Err(GuideError::Export(_))),
                "{name:?} should be rejected"
            );
        }
        assert!(exporter.written().is_empty());
        assert!(!dir.path().join("escaped.tex").exists());
    }

    #[test]
    fn no_content_stops_before_export() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        let request = StudyGuideRequest::new("Week 1", "  ", "\n\n");

        let mut trigger = MemoryTrigger::default();
        let result = publish(
            &latex_registry(),
            ExportJob::new(&request, "latex"),
            &mut trigger,
        );
        assert_eq!(result, Err(GuideError::NoContent));
        assert!(trigger.downloads.is_empty());
        assert!(trigger.opened.is_empty());

        let mut exporter = FileExporter::new(&out);
        let result = publish(
            &latex_registry(),
            ExportJob::new(&request, "latex"),
            &mut exporter,
        );
        assert_eq!(result, Err(GuideError::NoContent));
        assert!(!out.exists());
    }

    #[test]
    fn unknown_format_is_reported() {
        let request = StudyGuideRequest::new("T", "A", "");
        let mut trigger = MemoryTrigger::default();
        let result = publish(
            &latex_registry(),
            ExportJob::new(&request, "docx"),
            &mut trigger,
        );
        assert_eq!(result, Err(GuideError::FormatNotFound("docx".to_string())));
    }

    #[test]
    fn file_exporter_writes_into_directory() {
        let dir = tempdir().unwrap();
        let mut exporter = FileExporter::new(dir.path());

        exporter
            .download("\\documentclass{article}", "notes.tex", "application/x-tex")
            .unwrap();
        exporter
            .open(&PrintableArtifact::new(b"%PDF-1.7".to_vec()), "guide.pdf")
            .unwrap();

        assert_eq!(
            exporter.written(),
            &[dir.path().join("notes.tex"), dir.path().join("guide.pdf")]
        );
        assert_eq!(
            fs::read(dir.path().join("guide.pdf")).unwrap(),
            b"%PDF-1.7".to_vec()
        );
    }

    #[test]
    fn file_exporter_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("out");
        let mut exporter = FileExporter::new(&out);

        exporter.download("x", "a.tex", "text/plain").unwrap();
        assert_eq!(fs::read_to_string(out.join("a.tex")).unwrap(), "x");
    }

    #[test]
    fn file_exporter_reports_unwritable_directory() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let mut exporter = FileExporter::new(blocker.join("out"));
        let result = exporter.download("x", "a.tex", "text/plain");
        assert!(matches!(result, Err(GuideError::Export(_))));
    }
}
