//! # Document composition
//!
//! [`compose`] folds the styles and script buffers into the markup buffer so
//! the preview receives one self-contained document. [`merge_blocks_into_markup`]
//! replaces the markup's body with a serialized block fragment.
//!
//! Both work on raw text. A `<style` or `<script` anywhere in the markup,
//! including inside a comment or a string literal, counts as already present
//! and suppresses injection. Missing `</head>` / `</body>` markers also
//! suppress injection; nothing here ever fails.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// First body element, capturing its inner content. Attributes on the
/// opening tag are kept.
static BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body\b[^>]*>(.*?)</body>").expect("valid body regex"));

/// Shell used when the markup has no body element to merge into.
const SHELL_HEAD: &str = "<!DOCTYPE html>\n<html>\n<head>\n  <title>My Website</title>\n</head>\n";

/// A document string derived from the buffers. Only produced by [`compose`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposedDocument(String);

impl ComposedDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ComposedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ASCII case-insensitive search. Lowercasing ASCII keeps byte offsets intact.
fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack.to_ascii_lowercase().find(needle)
}

pub fn compose(markup: &str, styles: &str, script: &str) -> ComposedDocument {
    let mut doc = markup.to_string();

    if !styles.is_empty() && find_ci(&doc, "<style").is_none() {
        if let Some(at) = find_ci(&doc, "</head>") {
            doc.insert_str(at, &format!("<style>\n{styles}\n</style>\n"));
        }
    }

    if !script.is_empty() && find_ci(&doc, "<script").is_none() {
        if let Some(at) = find_ci(&doc, "</body>") {
            doc.insert_str(at, &format!("<script>\n{script}\n</script>\n"));
        }
    }

    ComposedDocument(doc)
}

/// Replace the first body's content with `fragment`, discarding what was
/// there. Markup without a body element is replaced by a minimal shell.
pub fn merge_blocks_into_markup(markup: &str, fragment: &str) -> String {
    match BODY.captures(markup).and_then(|caps| caps.get(1)) {
        Some(inner) => {
            let mut out = String::with_capacity(markup.len() + fragment.len());
            out.push_str(&markup[..inner.start()]);
            out.push_str(fragment);
            out.push_str(&markup[inner.end()..]);
            out
        }
        None => {
            tracing::debug!("no body element found, synthesizing document shell");
            format!("{SHELL_HEAD}<body>{fragment}</body>\n</html>")
        }
    }
}
