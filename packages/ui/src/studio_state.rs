use dioxus::prelude::*;
use studio::{StudioConfig, StudioState};

use crate::ActivityLog;

/// Consume the `Signal<StudioState>` from context.
///
/// Every view reads and writes the builder state through this one signal;
/// writes go through [`StudioState`] methods so each interaction replaces
/// the state as a whole.
pub fn use_studio() -> Signal<StudioState> {
    use_context::<Signal<StudioState>>()
}

/// Provider component that owns the builder state and the activity log.
/// Wrap the router with this component.
#[component]
pub fn StudioProvider(config: StudioConfig, children: Element) -> Element {
    use_context_provider(|| {
        tracing::info!(
            locale = ?config.blocks.locale,
            preview = ?config.preview.mode,
            "studio state created"
        );
        Signal::new(StudioState::new(config.clone()))
    });
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        {children}
    }
}
