//! Content blocks assembled through the form-based editor.
//!
//! A [`Block`] pairs a list-unique [`BlockId`] with a [`BlockBody`]; only
//! [`BlockBody::Link`] carries a target. [`BlockList`] owns the ordered list
//! and hands out ids. Every mutation replaces the list contents wholesale.

use std::fmt;

use crate::config::Locale;

/// Field-less tag for each block variant, used by the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Text,
    Button,
    Link,
    Image,
}

impl BlockKind {
    pub const ALL: [BlockKind; 4] = [
        BlockKind::Text,
        BlockKind::Button,
        BlockKind::Link,
        BlockKind::Image,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Button => "button",
            BlockKind::Link => "link",
            BlockKind::Image => "image",
        }
    }

    /// Content a freshly added block starts with.
    pub fn default_content(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (BlockKind::Text, Locale::En) => "New text",
            (BlockKind::Text, Locale::Ru) => "Новый текст",
            (BlockKind::Button, Locale::En) => "Button",
            (BlockKind::Button, Locale::Ru) => "Кнопка",
            (BlockKind::Link, Locale::En) => "Link",
            (BlockKind::Link, Locale::Ru) => "Ссылка",
            (BlockKind::Image, _) => "https://via.placeholder.com/300",
        }
    }

    /// Input placeholder for the block's content field.
    pub fn content_placeholder(&self) -> &'static str {
        match self {
            BlockKind::Image => "Image URL",
            _ => "Content",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockId(pub String);

impl BlockId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read an id back from a drag payload. Blank payloads carry no id.
    pub fn from_payload(payload: &str) -> Option<BlockId> {
        let id = payload.trim();
        (!id.is_empty()).then(|| BlockId(id.to_string()))
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockBody {
    Text { content: String },
    Button { label: String },
    Link { label: String, href: Option<String> },
    Image { src: String },
}

impl BlockBody {
    pub fn new(kind: BlockKind, locale: Locale) -> Self {
        let content = kind.default_content(locale).to_string();
        match kind {
            BlockKind::Text => BlockBody::Text { content },
            BlockKind::Button => BlockBody::Button { label: content },
            BlockKind::Link => BlockBody::Link {
                label: content,
                href: None,
            },
            BlockKind::Image => BlockBody::Image { src: content },
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            BlockBody::Text { .. } => BlockKind::Text,
            BlockBody::Button { .. } => BlockKind::Button,
            BlockBody::Link { .. } => BlockKind::Link,
            BlockBody::Image { .. } => BlockKind::Image,
        }
    }

    /// The single string every variant carries (text, label or image source).
    pub fn content(&self) -> &str {
        match self {
            BlockBody::Text { content } => content,
            BlockBody::Button { label } | BlockBody::Link { label, .. } => label,
            BlockBody::Image { src } => src,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            BlockBody::Link { href, .. } => href.as_deref(),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub body: BlockBody,
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        self.body.kind()
    }
}

/// Move `dragged` to the position `target` occupied before the move.
///
/// Returns an unchanged copy when either id is missing or both are the same.
pub fn reorder(blocks: &[Block], dragged: &BlockId, target: &BlockId) -> Vec<Block> {
    let mut out = blocks.to_vec();
    let from = blocks.iter().position(|b| &b.id == dragged);
    let to = blocks.iter().position(|b| &b.id == target);
    if let (Some(from), Some(to)) = (from, to) {
        if from != to {
            let moved = out.remove(from);
            out.insert(to, moved);
        }
    }
    out
}

/// Ordered block list with a per-list id counter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockList {
    blocks: Vec<Block>,
    next_id: u64,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    /// Append a block of `kind` with its default content and a fresh id.
    pub fn add(&mut self, kind: BlockKind, locale: Locale) -> BlockId {
        self.next_id += 1;
        let id = BlockId(format!("blk-{}", self.next_id));
        self.blocks.push(Block {
            id: id.clone(),
            body: BlockBody::new(kind, locale),
        });
        tracing::debug!(%id, %kind, "block added");
        id
    }

    /// Replace the content of block `id`. `target` replaces a link's href and
    /// is ignored for every other kind.
    pub fn update(&mut self, id: &BlockId, content: &str, target: Option<String>) -> bool {
        let Some(block) = self.blocks.iter_mut().find(|b| &b.id == id) else {
            return false;
        };
        let content = content.to_string();
        block.body = match &block.body {
            BlockBody::Text { .. } => BlockBody::Text { content },
            BlockBody::Button { .. } => BlockBody::Button { label: content },
            BlockBody::Link { .. } => BlockBody::Link {
                label: content,
                href: target,
            },
            BlockBody::Image { .. } => BlockBody::Image { src: content },
        };
        true
    }

    pub fn remove(&mut self, id: &BlockId) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|b| &b.id != id);
        before != self.blocks.len()
    }

    pub fn reorder(&mut self, dragged: &BlockId, target: &BlockId) {
        self.blocks = reorder(&self.blocks, dragged, target);
    }
}
