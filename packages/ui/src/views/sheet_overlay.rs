use dioxus::prelude::*;

/// A full-height overlay that slides its children in from the right edge.
/// Clicking outside the sheet triggers `on_close`.
#[component]
pub fn SheetOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "sheet-backdrop",
            onclick: move |_| on_close.call(()),
            aside {
                class: "sheet-panel",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                button {
                    class: "sheet-close",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    "\u{00D7}"
                }
                {children}
            }
        }
    }
}
