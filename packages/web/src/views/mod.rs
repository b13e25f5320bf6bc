mod studio_layout;
pub use studio_layout::StudioLayout;

mod editor;
pub use editor::Editor;

mod blocks;
pub use blocks::Blocks;

mod preview;
pub use preview::Preview;
