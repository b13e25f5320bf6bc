use dioxus::prelude::*;
use ui::Tab;

use crate::Route;

#[component]
pub fn StudioLayout() -> Element {
    let nav = use_navigator();
    let active = match use_route::<Route>() {
        Route::Editor {} => Tab::Editor,
        Route::Blocks {} => Tab::Blocks,
        Route::Preview {} => Tab::Preview,
    };

    let navigate = move |tab: Tab| {
        nav.push(match tab {
            Tab::Editor => Route::Editor {},
            Tab::Blocks => Route::Blocks {},
            Tab::Preview => Route::Preview {},
        });
    };

    rsx! {
        ui::views::StudioLayoutView {
            active: active,
            on_navigate: navigate,
            Outlet::<Route> {}
        }
    }
}
