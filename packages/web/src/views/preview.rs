use dioxus::prelude::*;

#[component]
pub fn Preview() -> Element {
    rsx! {
        ui::views::PreviewView {}
    }
}
