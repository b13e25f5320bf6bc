use dioxus::prelude::*;

#[component]
pub fn Editor() -> Element {
    rsx! {
        ui::views::EditorView {}
    }
}
