use dioxus::prelude::*;
use studio::BufferKind;

use crate::CodePanel;

/// Markup, styles and script side by side.
#[component]
pub fn EditorView() -> Element {
    rsx! {
        div {
            class: "editor-grid",
            for kind in BufferKind::ALL {
                CodePanel { key: "{kind}", kind }
            }
        }
    }
}
