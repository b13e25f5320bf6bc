use dioxus::prelude::*;
use studio::BlockKind;

use crate::icons::{FaFont, FaHandPointer, FaImage, FaLink, FaPlus};
use crate::{log_activity, use_activity_log, use_studio, Icon, LogLevel};

fn palette_label(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Text => "Text",
        BlockKind::Button => "Button",
        BlockKind::Link => "Text with link",
        BlockKind::Image => "Image",
    }
}

fn kind_icon(kind: BlockKind) -> Element {
    match kind {
        BlockKind::Text => rsx! { Icon { icon: FaFont, width: 22, height: 22 } },
        BlockKind::Button => rsx! { Icon { icon: FaHandPointer, width: 22, height: 22 } },
        BlockKind::Link => rsx! { Icon { icon: FaLink, width: 22, height: 22 } },
        BlockKind::Image => rsx! { Icon { icon: FaImage, width: 22, height: 22 } },
    }
}

/// Grid of "add block" buttons, one per kind.
#[component]
pub fn BlockPalette() -> Element {
    let mut studio = use_studio();
    let mut log = use_activity_log();

    rsx! {
        div {
            class: "card block-palette",
            h3 {
                Icon { icon: FaPlus, width: 16, height: 16 }
                span { "Add block" }
            }
            div {
                class: "block-palette-grid",
                for kind in BlockKind::ALL {
                    button {
                        key: "{kind}",
                        class: "block-palette-item",
                        onclick: move |_| {
                            let id = studio.write().add_block(kind);
                            log_activity(&mut log, LogLevel::Info, &format!("Added {kind} block {id}"));
                        },
                        {kind_icon(kind)}
                        span { "{palette_label(kind)}" }
                    }
                }
            }
        }
    }
}
