use dioxus::prelude::*;

#[component]
pub fn Blocks() -> Element {
    rsx! {
        ui::views::BlocksView {}
    }
}
