mod sheet_overlay;
pub use sheet_overlay::SheetOverlay;

mod studio_layout;
pub use studio_layout::StudioLayoutView;

mod editor;
pub use editor::EditorView;

mod blocks;
pub use blocks::BlocksView;

mod preview;
pub use preview::PreviewView;
