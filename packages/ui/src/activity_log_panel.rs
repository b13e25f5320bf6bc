use dioxus::prelude::*;

use crate::activity_log::use_activity_log;

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

/// Floating panel listing builder events, newest first.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log.read().visible {
        return rsx! {};
    }

    let entries = log.read().entries.clone();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Activity" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        onclick: move |_| log.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            div {
                class: "activity-log-entries",
                if entries.is_empty() {
                    div { class: "activity-log-empty", "Nothing yet" }
                }
                for entry in entries.iter().rev() {
                    div {
                        class: entry.level.css_class(),
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

/// Menu button that shows the entry count and opens the panel.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let count = log.read().entries.len();
    let has_errors = log.read().has_errors();

    rsx! {
        button {
            class: if has_errors { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            title: "Activity log",
            onclick: move |_| {
                let visible = log.read().visible;
                log.write().visible = !visible;
            },
            if count > 0 {
                "Activity ({count})"
            } else {
                "Activity"
            }
        }
    }
}
