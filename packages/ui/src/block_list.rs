use dioxus::prelude::*;
use studio::{Block, BlockId, BlockKind};

use crate::icons::{FaCodeMerge, FaCube, FaGripVertical, FaLayerGroup, FaTrashCan};
use crate::{log_activity, use_activity_log, use_studio, Icon, LogLevel};

/// Data transfer format carrying the dragged block id.
const DRAG_FORMAT: &str = "text/plain";

/// The dragged block on drop: the event payload, or the locally tracked id
/// when the platform hands back no data.
fn drop_source(payload: Option<&str>, local: Option<BlockId>) -> Option<BlockId> {
    payload.and_then(BlockId::from_payload).or(local)
}

/// Editable, drag-reorderable list of blocks with the "merge into HTML" action.
#[component]
pub fn BlockListEditor() -> Element {
    let mut studio = use_studio();
    let mut log = use_activity_log();
    // Id of the block currently being dragged
    let dragged = use_signal(|| Option::<BlockId>::None);
    let blocks = studio.read().blocks().to_vec();
    let count = blocks.len();

    let handle_merge = move |_| {
        studio.write().merge_blocks();
        log_activity(
            &mut log,
            LogLevel::Success,
            &format!("Merged {count} blocks into the HTML body"),
        );
    };

    rsx! {
        div {
            class: "card block-list-card",
            div {
                class: "block-list-header",
                h3 {
                    Icon { icon: FaLayerGroup, width: 16, height: 16 }
                    span { "Blocks ({count})" }
                }
                button {
                    class: "block-list-merge",
                    title: "Replace the HTML body with these blocks",
                    disabled: count == 0,
                    onclick: handle_merge,
                    Icon { icon: FaCodeMerge, width: 14, height: 14 }
                    span { "Merge into HTML" }
                }
            }
            div {
                class: "block-list",
                for block in blocks {
                    BlockCard {
                        key: "{block.id}",
                        block: block.clone(),
                        dragged: dragged,
                    }
                }
                if count == 0 {
                    div {
                        class: "block-list-empty",
                        Icon { icon: FaCube, width: 40, height: 40 }
                        p { "No blocks yet" }
                    }
                }
            }
        }
    }
}

#[component]
fn BlockCard(block: Block, mut dragged: Signal<Option<BlockId>>) -> Element {
    let mut studio = use_studio();
    let mut log = use_activity_log();
    let kind = block.kind();
    let content = block.body.content().to_string();
    let target = block.body.target().unwrap_or_default().to_string();

    let id = block.id.clone();
    let handle_drag_start = move |evt: DragEvent| {
        let transfer = evt.data_transfer();
        if let Err(e) = transfer.set_data(DRAG_FORMAT, id.as_str()) {
            tracing::debug!(%id, "drag payload not set: {e}");
        }
        transfer.set_effect_allowed("move");
        dragged.set(Some(id.clone()));
    };

    let handle_drag_over = move |evt: DragEvent| {
        evt.prevent_default();
        evt.data_transfer().set_drop_effect("move");
    };

    let id = block.id.clone();
    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        let payload = evt.data_transfer().get_data(DRAG_FORMAT);
        let local = dragged.write().take();
        let Some(from) = drop_source(payload.as_deref(), local) else {
            return;
        };
        if from != id {
            studio.write().reorder_blocks(&from, &id);
            tracing::debug!(%from, to = %id, "blocks reordered");
        }
    };

    let id = block.id.clone();
    let handle_content = move |evt: FormEvent| {
        let mut state = studio.write();
        let target = state
            .block(&id)
            .and_then(|b| b.body.target().map(str::to_string));
        state.update_block(&id, &evt.value(), target);
    };

    // An empty href falls back to the placeholder when serialized.
    let id = block.id.clone();
    let handle_target = move |evt: FormEvent| {
        let mut state = studio.write();
        let Some(content) = state.block(&id).map(|b| b.body.content().to_string()) else {
            return;
        };
        let href = evt.value();
        let target = (!href.trim().is_empty()).then_some(href);
        state.update_block(&id, &content, target);
    };

    let id = block.id.clone();
    let handle_delete = move |_| {
        if studio.write().remove_block(&id) {
            log_activity(&mut log, LogLevel::Info, &format!("Removed {kind} block {id}"));
        }
    };

    let is_dragging = dragged.read().as_ref() == Some(&block.id);

    rsx! {
        div {
            class: if is_dragging { "block-card dragging" } else { "block-card" },
            draggable: "true",
            ondragstart: handle_drag_start,
            ondragover: handle_drag_over,
            ondrop: handle_drop,
            ondragend: move |_| dragged.set(None),
            div {
                class: "block-card-header",
                span {
                    class: "block-card-grip",
                    Icon { icon: FaGripVertical, width: 12, height: 12 }
                }
                span { class: "block-card-kind", "{kind}" }
                button {
                    class: "block-card-delete",
                    title: "Delete block",
                    onclick: handle_delete,
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
            }
            input {
                class: "block-card-input",
                r#type: "text",
                value: "{content}",
                placeholder: kind.content_placeholder(),
                oninput: handle_content,
            }
            if kind == BlockKind::Link {
                input {
                    class: "block-card-input",
                    r#type: "text",
                    value: "{target}",
                    placeholder: "https://example.com",
                    oninput: handle_target,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> BlockId {
        BlockId(s.to_string())
    }

    #[test]
    fn test_drop_source_prefers_payload() {
        assert_eq!(
            drop_source(Some("blk-2"), Some(id("blk-1"))),
            Some(id("blk-2"))
        );
    }

    #[test]
    fn test_drop_source_falls_back_to_local() {
        assert_eq!(drop_source(None, Some(id("blk-1"))), Some(id("blk-1")));
        assert_eq!(drop_source(Some(""), Some(id("blk-1"))), Some(id("blk-1")));
        assert_eq!(drop_source(None, None), None);
    }
}
