use dioxus::prelude::*;

use crate::icons::FaUpload;
use crate::{log_activity, use_activity_log, use_studio, Icon, LogLevel};

/// Publish button plus the latest generated reference. Nothing is deployed.
#[component]
pub fn PublishPanel() -> Element {
    let mut studio = use_studio();
    let mut log = use_activity_log();
    let published = studio.read().published().map(|r| r.to_string());

    let handle_publish = move |_| {
        let reference = studio.write().publish(&mut rand::thread_rng()).to_string();
        log_activity(
            &mut log,
            LogLevel::Success,
            &format!("Project published: {reference}"),
        );
    };

    rsx! {
        button {
            class: "menu-item primary",
            onclick: handle_publish,
            Icon { icon: FaUpload, width: 16, height: 16 }
            span { "Publish" }
        }
        if let Some(reference) = published {
            div {
                class: "publish-result",
                p { class: "publish-result-title", "Project published:" }
                p { class: "publish-result-url", "{reference}" }
            }
        }
    }
}
