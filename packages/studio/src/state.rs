//! # Studio state
//!
//! [`StudioState`] is the single state tree of the builder screen. The UI root
//! owns one instance inside a signal and every interaction goes through one of
//! the methods below, so each change lands as a whole.
//!
//! | Area | Methods |
//! |------|---------|
//! | Buffers | [`buffer`](StudioState::buffer), [`set_buffer`](StudioState::set_buffer), [`apply_import`](StudioState::apply_import) |
//! | Blocks | [`add_block`](StudioState::add_block), [`update_block`](StudioState::update_block), [`remove_block`](StudioState::remove_block), [`reorder_blocks`](StudioState::reorder_blocks), [`merge_blocks`](StudioState::merge_blocks) |
//! | Preview | [`compose`](StudioState::compose), [`refresh_preview`](StudioState::refresh_preview), [`displayed_document`](StudioState::displayed_document) |
//! | Publish | [`publish`](StudioState::publish), [`published`](StudioState::published) |

use rand::Rng;

use crate::block::{Block, BlockId, BlockKind, BlockList};
use crate::buffer::{BufferKind, CodeBuffers};
use crate::compose::{compose, merge_blocks_into_markup, ComposedDocument};
use crate::config::{Locale, PreviewMode, StudioConfig};
use crate::import::Imported;
use crate::preview::PreviewFrame;
use crate::publish::PublishedReference;
use crate::serialize::serialize_blocks;

#[derive(Clone, Debug, PartialEq)]
pub struct StudioState {
    buffers: CodeBuffers,
    blocks: BlockList,
    config: StudioConfig,
    preview: PreviewFrame,
    published: Option<PublishedReference>,
}

impl Default for StudioState {
    fn default() -> Self {
        Self::new(StudioConfig::default())
    }
}

impl StudioState {
    /// Default buffers, no blocks, and a preview snapshot of the defaults.
    pub fn new(config: StudioConfig) -> Self {
        let buffers = CodeBuffers::default();
        let preview = PreviewFrame {
            revision: 0,
            document: compose(&buffers.markup, &buffers.styles, &buffers.script),
        };
        Self {
            buffers,
            blocks: BlockList::new(),
            config,
            preview,
            published: None,
        }
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn locale(&self) -> Locale {
        self.config.blocks.locale
    }

    pub fn preview_mode(&self) -> PreviewMode {
        self.config.preview.mode
    }

    pub fn buffer(&self, kind: BufferKind) -> &str {
        self.buffers.get(kind)
    }

    pub fn set_buffer(&mut self, kind: BufferKind, text: String) {
        self.buffers.set(kind, text);
    }

    /// Assign a finished import to its buffer, replacing whatever is there.
    pub fn apply_import(&mut self, imported: Imported) {
        self.buffers.set(imported.kind, imported.text);
    }

    pub fn blocks(&self) -> &[Block] {
        self.blocks.blocks()
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.get(id)
    }

    pub fn add_block(&mut self, kind: BlockKind) -> BlockId {
        self.blocks.add(kind, self.locale())
    }

    pub fn update_block(&mut self, id: &BlockId, content: &str, target: Option<String>) -> bool {
        self.blocks.update(id, content, target)
    }

    pub fn remove_block(&mut self, id: &BlockId) -> bool {
        self.blocks.remove(id)
    }

    pub fn reorder_blocks(&mut self, dragged: &BlockId, target: &BlockId) {
        self.blocks.reorder(dragged, target);
    }

    pub fn serialized_blocks(&self) -> String {
        serialize_blocks(self.blocks.blocks())
    }

    /// Replace the markup body with the serialized blocks. Destructive.
    pub fn merge_blocks(&mut self) {
        let fragment = self.serialized_blocks();
        self.buffers.markup = merge_blocks_into_markup(&self.buffers.markup, &fragment);
        tracing::info!(blocks = self.blocks.len(), "blocks merged into markup");
    }

    pub fn compose(&self) -> ComposedDocument {
        compose(
            &self.buffers.markup,
            &self.buffers.styles,
            &self.buffers.script,
        )
    }

    /// Snapshot the current buffers into the preview and bump its revision.
    pub fn refresh_preview(&mut self) -> u64 {
        let document = self.compose();
        self.preview.refresh(document);
        self.preview.revision
    }

    pub fn preview(&self) -> &PreviewFrame {
        &self.preview
    }

    /// What the preview surface should show right now.
    pub fn displayed_document(&self) -> ComposedDocument {
        match self.preview_mode() {
            PreviewMode::Live => self.compose(),
            PreviewMode::Manual => self.preview.document.clone(),
        }
    }

    pub fn publish<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &PublishedReference {
        let reference = PublishedReference::generate(&self.config.publish.domain, rng);
        tracing::info!(%reference, "project published");
        self.published.insert(reference)
    }

    pub fn published(&self) -> Option<&PublishedReference> {
        self.published.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_merge_blocks_replaces_body() {
        let mut state = StudioState::default();
        state.add_block(BlockKind::Text);
        state.add_block(BlockKind::Link);
        state.merge_blocks();

        let markup = state.buffer(BufferKind::Markup);
        assert!(markup.contains("<body><p>New text</p>\n<a href=\"#\">Link</a></body>"));
        assert!(!markup.contains("Hello World"));
        assert!(markup.contains("<title>My Website</title>"));
    }

    #[test]
    fn test_channel_link_from_config() {
        assert_eq!(StudioState::default().config().links.channel(), None);

        let mut config = StudioConfig::default();
        config.links.channel = Some("https://t.me/example".to_string());
        let state = StudioState::new(config);
        assert_eq!(state.config().links.channel(), Some("https://t.me/example"));
    }

    #[test]
    fn test_locale_from_config() {
        let mut state = StudioState::new(StudioConfig::default().with_locale(Locale::Ru));
        state.add_block(BlockKind::Button);
        assert_eq!(state.blocks()[0].body.content(), "Кнопка");
    }

    #[test]
    fn test_manual_preview_waits_for_refresh() {
        let mut state = StudioState::default();
        let initial = state.displayed_document();
        assert_eq!(state.preview().revision, 0);

        state.set_buffer(BufferKind::Styles, "h1 { color: red }".to_string());
        assert_eq!(state.displayed_document(), initial);

        assert_eq!(state.refresh_preview(), 1);
        assert!(state
            .displayed_document()
            .as_str()
            .contains("h1 { color: red }"));
    }

    #[test]
    fn test_live_preview_follows_buffers() {
        let mut state =
            StudioState::new(StudioConfig::default().with_preview_mode(PreviewMode::Live));
        state.set_buffer(BufferKind::Script, "alert('hi')".to_string());
        assert!(state.displayed_document().as_str().contains("alert('hi')"));
        assert_eq!(state.preview().revision, 0);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut state = StudioState::default();
        state.refresh_preview();
        let first = state.preview().document.clone();
        state.refresh_preview();
        assert_eq!(state.preview().document, first);
        assert_eq!(state.preview().revision, 2);
        assert_ne!(state.preview().key(), "preview-1");
    }

    #[test]
    fn test_default_document_has_styles_and_script() {
        let doc = StudioState::default().compose();
        assert!(doc.as_str().contains("<style>\nbody {"));
        assert!(doc.as_str().contains("<script>\nconsole.log"));
    }

    #[test]
    fn test_publish_replaces_previous_reference() {
        let mut state = StudioState::default();
        assert!(state.published().is_none());
        let mut rng = StdRng::seed_from_u64(3);
        let first = state.publish(&mut rng).clone();
        let second = state.publish(&mut rng).clone();
        assert_ne!(first, second);
        assert_eq!(state.published(), Some(&second));
        assert!(second.as_str().starts_with("sitestudio.dev/project/"));
    }

    #[test]
    fn test_reorder_through_state() {
        let mut state = StudioState::default();
        let a = state.add_block(BlockKind::Text);
        let b = state.add_block(BlockKind::Image);
        state.reorder_blocks(&b, &a);
        assert_eq!(state.blocks()[0].id, b);
        assert!(state.serialized_blocks().starts_with("<img "));
    }
}
