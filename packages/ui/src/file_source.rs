//! Bridges a browser file selection to [`studio::TextSource`].

use dioxus::html::FileData;
use studio::{ImportError, TextSource};

/// A file picked through an `input type="file"` control.
pub struct SelectedFile(pub FileData);

impl TextSource for SelectedFile {
    fn name(&self) -> String {
        self.0.name()
    }

    async fn read_text(&self) -> Result<String, ImportError> {
        self.0
            .read_string()
            .await
            .map_err(|e| ImportError::Read(e.to_string()))
    }
}
