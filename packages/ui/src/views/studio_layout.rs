use dioxus::prelude::*;

use crate::{ActivityLogPanel, AppHeader, Tab};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared page frame: header with tabs and menu, the routed view, and the
/// activity log panel.
///
/// Platform packages map [`Tab`] to their routes and pass an `Outlet` as children.
#[component]
pub fn StudioLayoutView(
    /// Tab matching the current route.
    active: Tab,
    /// Called when the user picks a tab from the strip or the menu.
    on_navigate: EventHandler<Tab>,
    /// The router outlet for child routes.
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "studio-shell",
            AppHeader { active, on_navigate }
            main {
                class: "studio-main",
                {children}
            }
            ActivityLogPanel {}
        }
    }
}
