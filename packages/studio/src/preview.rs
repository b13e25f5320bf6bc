//! The snapshot shown by the preview surface.

use crate::compose::ComposedDocument;

/// Composed document plus the revision it was taken at. The UI keys the
/// iframe on [`PreviewFrame::key`] so every refresh remounts it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewFrame {
    pub revision: u64,
    pub document: ComposedDocument,
}

impl PreviewFrame {
    pub fn refresh(&mut self, document: ComposedDocument) {
        self.revision += 1;
        self.document = document;
        tracing::debug!(revision = self.revision, "preview refreshed");
    }

    pub fn key(&self) -> String {
        format!("preview-{}", self.revision)
    }
}
