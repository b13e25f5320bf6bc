use dioxus::prelude::*;

use crate::{BlockListEditor, BlockPalette};

#[component]
pub fn BlocksView() -> Element {
    rsx! {
        div {
            class: "blocks-grid",
            BlockPalette {}
            BlockListEditor {}
        }
    }
}
