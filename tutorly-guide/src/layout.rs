//! Seam to the host's printable-layout engine.
//!
//! Pagination, fonts and page geometry belong to the engine. The pipeline only
//! hands over a [`DocDefinition`] and receives an opaque [`PrintableArtifact`].

use crate::error::LayoutError;
use crate::formats::pdf::DocDefinition;

/// MIME type of the artifacts produced by PDF engines.
pub const PDF_MIME: &str = "application/pdf";

/// Opaque paginated document returned by a [`LayoutEngine`].
#[derive(Clone, PartialEq, Eq)]
pub struct PrintableArtifact {
    bytes: Vec<u8>,
}

impl PrintableArtifact {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for PrintableArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrintableArtifact")
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A host-provided engine that lays out styled content into pages.
///
/// The definition carries the styled content sequence, the style table and
/// the default font. Errors are returned as-is to the caller.
pub trait LayoutEngine: Send + Sync {
    fn layout(&self, definition: &DocDefinition) -> Result<PrintableArtifact, LayoutError>;
}

impl<E: LayoutEngine + ?Sized> LayoutEngine for Box<E> {
    fn layout(&self, definition: &DocDefinition) -> Result<PrintableArtifact, LayoutError> {
        (**self).layout(definition)
    }
}
