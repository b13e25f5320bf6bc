use dioxus::prelude::*;

use crate::PreviewSurface;

#[component]
pub fn PreviewView() -> Element {
    rsx! {
        div {
            class: "preview-view",
            PreviewSurface {}
        }
    }
}
