//! Reading a local file into one of the buffers.
//!
//! The browser side reads files asynchronously, so the read sits behind the
//! async [`TextSource`] trait. The UI wraps a selected file; tests use
//! [`MemorySource`]. The imported text replaces the buffer once the read
//! completes, even if the buffer was edited in the meantime.

use crate::buffer::BufferKind;
use crate::error::ImportError;

/// Async trait for a file whose contents can be read as text.
pub trait TextSource {
    fn name(&self) -> String;
    fn read_text(&self) -> impl std::future::Future<Output = Result<String, ImportError>>;
}

/// A completed import, ready to be assigned to its buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Imported {
    pub kind: BufferKind,
    pub file_name: String,
    pub text: String,
}

/// Read `source` for the `kind` buffer.
///
/// Returns `Ok(None)` when no file was selected.
pub async fn import_text<S: TextSource>(
    kind: BufferKind,
    source: Option<&S>,
) -> Result<Option<Imported>, ImportError> {
    let Some(source) = source else {
        return Ok(None);
    };
    let file_name = source.name();
    if !kind.matches_file(&file_name) {
        return Err(ImportError::WrongExtension {
            expected: kind.extension(),
            found: file_name,
        });
    }
    let text = source.read_text().await?;
    tracing::info!(%kind, file = %file_name, bytes = text.len(), "file imported");
    Ok(Some(Imported {
        kind,
        file_name,
        text,
    }))
}

/// In-memory [`TextSource`] for tests and non-browser callers.
#[derive(Clone, Debug)]
pub struct MemorySource {
    name: String,
    contents: Result<String, ImportError>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: Ok(text.into()),
        }
    }

    /// A source whose read fails with `message`.
    pub fn unreadable(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: Err(ImportError::Read(message.into())),
        }
    }
}

impl TextSource for MemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn read_text(&self) -> Result<String, ImportError> {
        self.contents.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StudioState;

    #[tokio::test]
    async fn test_no_file_is_noop() {
        let result = import_text::<MemorySource>(BufferKind::Markup, None).await;
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn test_import_reads_whole_file() {
        let source = MemorySource::new("site.css", "h1 { color: teal }");
        let imported = import_text(BufferKind::Styles, Some(&source))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(imported.kind, BufferKind::Styles);
        assert_eq!(imported.file_name, "site.css");
        assert_eq!(imported.text, "h1 { color: teal }");
    }

    #[tokio::test]
    async fn test_wrong_extension_is_rejected() {
        let source = MemorySource::new("app.ts", "let x = 1");
        let err = import_text(BufferKind::Script, Some(&source))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ImportError::WrongExtension {
                expected: "js",
                found: "app.ts".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_read_failure_propagates() {
        let source = MemorySource::unreadable("index.html", "permission denied");
        let err = import_text(BufferKind::Markup, Some(&source))
            .await
            .unwrap_err();
        assert_eq!(err, ImportError::Read("permission denied".to_string()));
    }

    #[tokio::test]
    async fn test_completed_import_overwrites_interim_edit() {
        let mut state = StudioState::default();
        let source = MemorySource::new("page.html", "<body>imported</body>");
        let pending = import_text(BufferKind::Markup, Some(&source));

        state.set_buffer(BufferKind::Markup, "typed while reading".to_string());
        let imported = pending.await.unwrap().unwrap();
        state.apply_import(imported);

        assert_eq!(state.buffer(BufferKind::Markup), "<body>imported</body>");
    }
}
