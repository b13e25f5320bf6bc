//! Block list → markup fragment.
//!
//! Content is emitted verbatim. Malformed values (a bad image URL, stray
//! tags) are left for the preview browser to deal with.

use crate::block::{Block, BlockBody};

const BUTTON_STYLE: &str = "padding: 10px 20px; background: #0ea5e9; color: white; border: none; border-radius: 8px; cursor: pointer;";

/// Href used for links that have no target.
pub const LINK_PLACEHOLDER: &str = "#";

pub fn serialize_block(block: &Block) -> String {
    match &block.body {
        BlockBody::Text { content } => format!("<p>{content}</p>"),
        BlockBody::Button { label } => {
            format!("<button style=\"{BUTTON_STYLE}\">{label}</button>")
        }
        BlockBody::Link { label, href } => {
            let href = href.as_deref().unwrap_or(LINK_PLACEHOLDER);
            format!("<a href=\"{href}\">{label}</a>")
        }
        BlockBody::Image { src } => {
            format!("<img src=\"{src}\" alt=\"Block\" style=\"max-width: 100%;\">")
        }
    }
}

/// One line per block, in list order.
pub fn serialize_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(serialize_block)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockKind, BlockList};
    use crate::config::Locale;

    #[test]
    fn test_text_block_scenario() {
        let mut list = BlockList::new();
        list.add(BlockKind::Text, Locale::En);
        assert_eq!(serialize_blocks(list.blocks()), "<p>New text</p>");
    }

    #[test]
    fn test_link_without_target_uses_placeholder() {
        let mut list = BlockList::new();
        list.add(BlockKind::Link, Locale::En);
        assert_eq!(serialize_blocks(list.blocks()), "<a href=\"#\">Link</a>");
    }

    #[test]
    fn test_link_with_target() {
        let mut list = BlockList::new();
        let id = list.add(BlockKind::Link, Locale::En);
        list.update(&id, "Home", Some("/index.html".to_string()));
        assert_eq!(
            serialize_blocks(list.blocks()),
            "<a href=\"/index.html\">Home</a>"
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(serialize_blocks(&[]), "");
    }

    #[test]
    fn test_one_line_per_block_matching_kind() {
        let mut list = BlockList::new();
        for kind in [
            BlockKind::Image,
            BlockKind::Text,
            BlockKind::Button,
            BlockKind::Link,
            BlockKind::Text,
        ] {
            list.add(kind, Locale::En);
        }
        let out = serialize_blocks(list.blocks());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), list.len());

        for (line, block) in lines.iter().zip(list.blocks()) {
            let tag = match block.kind() {
                BlockKind::Text => "<p>",
                BlockKind::Button => "<button ",
                BlockKind::Link => "<a ",
                BlockKind::Image => "<img ",
            };
            assert!(line.starts_with(tag), "{line} should start with {tag}");
        }
    }

    #[test]
    fn test_content_is_not_escaped() {
        let mut list = BlockList::new();
        let id = list.add(BlockKind::Text, Locale::En);
        list.update(&id, "<b>bold</b> & more", None);
        assert_eq!(
            serialize_blocks(list.blocks()),
            "<p><b>bold</b> & more</p>"
        );
    }

    #[test]
    fn test_image_src_is_content() {
        let mut list = BlockList::new();
        list.add(BlockKind::Image, Locale::En);
        let out = serialize_blocks(list.blocks());
        assert!(out.starts_with("<img src=\"https://via.placeholder.com/300\""));
    }
}
