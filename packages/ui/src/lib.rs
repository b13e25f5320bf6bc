//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const STUDIO_CSS: Asset = asset!("/assets/styling/studio.css");

mod studio_state;
pub use studio_state::{use_studio, StudioProvider};

mod file_source;
pub use file_source::SelectedFile;

mod header;
pub use header::{AppHeader, Tab};

mod code_panel;
pub use code_panel::CodePanel;

mod block_palette;
pub use block_palette::BlockPalette;

mod block_list;
pub use block_list::BlockListEditor;

mod preview_surface;
pub use preview_surface::PreviewSurface;

mod publish_panel;
pub use publish_panel::PublishPanel;

pub mod activity_log;
pub use activity_log::{ActivityLog, LogLevel, log_activity, use_activity_log};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
