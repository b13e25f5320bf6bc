use dioxus::prelude::*;
use studio::PreviewMode;

use crate::icons::FaArrowsRotate;
use crate::{log_activity, use_activity_log, use_studio, Icon, LogLevel};

/// Sandboxed iframe showing the composed document.
///
/// In manual mode the frame shows the last refreshed snapshot and is keyed by
/// revision, so each refresh mounts a fresh browsing context. In live mode
/// the document is recomposed on every change.
#[component]
pub fn PreviewSurface() -> Element {
    let mut studio = use_studio();
    let mut log = use_activity_log();

    let state = studio.read();
    let mode = state.preview_mode();
    let document = state.displayed_document().into_string();
    let key = state.preview().key();
    let revision = state.preview().revision;
    drop(state);

    let handle_refresh = move |_| {
        let revision = studio.write().refresh_preview();
        log_activity(&mut log, LogLevel::Info, &format!("Preview refreshed (revision {revision})"));
    };

    rsx! {
        div {
            class: "card preview-card",
            div {
                class: "preview-toolbar",
                if mode == PreviewMode::Manual {
                    span { class: "preview-revision", "Revision {revision}" }
                    button {
                        class: "preview-refresh",
                        onclick: handle_refresh,
                        Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                        span { "Refresh" }
                    }
                } else {
                    span { class: "preview-revision", "Live" }
                }
            }
            PreviewFrameView {
                key: "{key}",
                document: document,
                sandbox: mode.sandbox(),
            }
        }
    }
}

#[component]
fn PreviewFrameView(document: String, sandbox: &'static str) -> Element {
    rsx! {
        iframe {
            class: "preview-frame",
            title: "Preview",
            "sandbox": sandbox,
            srcdoc: "{document}",
        }
    }
}
