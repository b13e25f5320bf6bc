use dioxus::prelude::*;

use crate::icons::{FaBars, FaCode, FaCube, FaEye, FaPaperPlane};
use crate::views::SheetOverlay;
use crate::{use_studio, ActivityLogToggle, Icon, PublishPanel};

/// The three screens of the builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Editor,
    Blocks,
    Preview,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Editor, Tab::Blocks, Tab::Preview];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Editor => "Editor",
            Tab::Blocks => "Blocks",
            Tab::Preview => "Preview",
        }
    }
}

#[component]
fn TabIcon(tab: Tab, size: u32) -> Element {
    match tab {
        Tab::Editor => rsx! { Icon { icon: FaCode, width: size, height: size } },
        Tab::Blocks => rsx! { Icon { icon: FaCube, width: size, height: size } },
        Tab::Preview => rsx! { Icon { icon: FaEye, width: size, height: size } },
    }
}

/// Top bar: brand, tab strip, and the side menu with publish, the optional
/// channel link, and the activity log toggle.
#[component]
pub fn AppHeader(active: Tab, on_navigate: EventHandler<Tab>) -> Element {
    let mut menu_open = use_signal(|| false);
    let studio = use_studio();
    let channel = studio.read().config().links.channel().map(str::to_string);

    rsx! {
        header {
            class: "app-header",
            div {
                class: "app-brand",
                div {
                    class: "app-brand-mark",
                    Icon { icon: FaCode, width: 20, height: 20 }
                }
                h1 { "Site Studio" }
            }
            nav {
                class: "app-tabs",
                for tab in Tab::ALL {
                    button {
                        key: "{tab.title()}",
                        class: if tab == active { "app-tab active" } else { "app-tab" },
                        onclick: move |_| on_navigate.call(tab),
                        TabIcon { tab, size: 14 }
                        span { "{tab.title()}" }
                    }
                }
            }
            button {
                class: "app-menu-button",
                title: "Menu",
                onclick: move |_| menu_open.set(true),
                Icon { icon: FaBars, width: 20, height: 20 }
            }
        }

        if menu_open() {
            SheetOverlay {
                on_close: move |_| menu_open.set(false),
                div {
                    class: "menu-sheet",
                    h2 { "Menu" }
                    for tab in Tab::ALL {
                        button {
                            key: "{tab.title()}",
                            class: "menu-item",
                            onclick: move |_| {
                                menu_open.set(false);
                                on_navigate.call(tab);
                            },
                            TabIcon { tab, size: 16 }
                            span { "{tab.title()}" }
                        }
                    }
                    PublishPanel {}
                    if let Some(url) = channel {
                        a {
                            class: "menu-item",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { icon: FaPaperPlane, width: 16, height: 16 }
                            span { "Channel" }
                        }
                    }
                    ActivityLogToggle {}
                }
            }
        }
    }
}
