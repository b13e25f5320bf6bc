//! The three independently editable text buffers.

use std::fmt;

pub const DEFAULT_MARKUP: &str = "<!DOCTYPE html>\n<html>\n<head>\n  <title>My Website</title>\n</head>\n<body>\n  <h1>Hello World</h1>\n</body>\n</html>";
pub const DEFAULT_STYLES: &str =
    "body {\n  font-family: Inter, sans-serif;\n  margin: 0;\n  padding: 20px;\n}";
pub const DEFAULT_SCRIPT: &str = "console.log(\"Site Studio ready!\");";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferKind {
    Markup,
    Styles,
    Script,
}

impl BufferKind {
    pub const ALL: [BufferKind; 3] = [BufferKind::Markup, BufferKind::Styles, BufferKind::Script];

    /// File extension accepted by this buffer's import control, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            BufferKind::Markup => "html",
            BufferKind::Styles => "css",
            BufferKind::Script => "js",
        }
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept(&self) -> &'static str {
        match self {
            BufferKind::Markup => ".html",
            BufferKind::Styles => ".css",
            BufferKind::Script => ".js",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BufferKind::Markup => "HTML",
            BufferKind::Styles => "CSS",
            BufferKind::Script => "JavaScript",
        }
    }

    /// Whether `file_name` carries this buffer's extension (case-insensitive).
    pub fn matches_file(&self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(self.extension()))
    }
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeBuffers {
    pub markup: String,
    pub styles: String,
    pub script: String,
}

impl Default for CodeBuffers {
    fn default() -> Self {
        Self {
            markup: DEFAULT_MARKUP.to_string(),
            styles: DEFAULT_STYLES.to_string(),
            script: DEFAULT_SCRIPT.to_string(),
        }
    }
}

impl CodeBuffers {
    pub fn get(&self, kind: BufferKind) -> &str {
        match kind {
            BufferKind::Markup => &self.markup,
            BufferKind::Styles => &self.styles,
            BufferKind::Script => &self.script,
        }
    }

    pub fn set(&mut self, kind: BufferKind, text: String) {
        match kind {
            BufferKind::Markup => self.markup = text,
            BufferKind::Styles => self.styles = text,
            BufferKind::Script => self.script = text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_a_complete_document() {
        let buffers = CodeBuffers::default();
        assert!(buffers.markup.contains("</head>"));
        assert!(buffers.markup.contains("</body>"));
        assert!(!buffers.styles.is_empty());
        assert!(!buffers.script.is_empty());
    }

    #[test]
    fn test_set_only_touches_one_buffer() {
        let mut buffers = CodeBuffers::default();
        buffers.set(BufferKind::Styles, "p{}".to_string());
        assert_eq!(buffers.get(BufferKind::Styles), "p{}");
        assert_eq!(buffers.get(BufferKind::Markup), DEFAULT_MARKUP);
        assert_eq!(buffers.get(BufferKind::Script), DEFAULT_SCRIPT);
    }

    #[test]
    fn test_matches_file() {
        assert!(BufferKind::Markup.matches_file("index.html"));
        assert!(BufferKind::Markup.matches_file("INDEX.HTML"));
        assert!(BufferKind::Script.matches_file("app.min.js"));
        assert!(!BufferKind::Styles.matches_file("style.scss"));
        assert!(!BufferKind::Styles.matches_file("css"));
    }
}
