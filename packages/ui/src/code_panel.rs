use dioxus::prelude::*;
use studio::{import_text, BufferKind};

use crate::icons::{FaCode, FaFileCode, FaPalette, FaUpload};
use crate::{log_activity, use_activity_log, use_studio, Icon, LogLevel, SelectedFile};

fn buffer_icon(kind: BufferKind) -> Element {
    match kind {
        BufferKind::Markup => rsx! { Icon { icon: FaFileCode, width: 16, height: 16 } },
        BufferKind::Styles => rsx! { Icon { icon: FaPalette, width: 16, height: 16 } },
        BufferKind::Script => rsx! { Icon { icon: FaCode, width: 16, height: 16 } },
    }
}

/// Textarea for one buffer plus its file import control.
#[component]
pub fn CodePanel(kind: BufferKind) -> Element {
    let mut studio = use_studio();
    let mut log = use_activity_log();
    let text = studio.read().buffer(kind).to_string();

    // The buffer is assigned whenever the read finishes, even if it was
    // edited while the file was loading.
    let handle_import = move |evt: FormEvent| async move {
        let file = evt.files().into_iter().next().map(SelectedFile);
        match import_text(kind, file.as_ref()).await {
            Ok(Some(imported)) => {
                let name = imported.file_name.clone();
                studio.write().apply_import(imported);
                log_activity(
                    &mut log,
                    LogLevel::Success,
                    &format!("{kind} file {name} imported"),
                );
            }
            Ok(None) => {}
            Err(e) => {
                log_activity(&mut log, LogLevel::Error, &format!("{kind} import failed: {e}"));
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(&format!("{kind} import: {e}").into());
            }
        }
    };

    rsx! {
        div {
            class: "code-panel",
            div {
                class: "code-panel-header",
                h3 {
                    {buffer_icon(kind)}
                    span { "{kind.label()}" }
                }
                label {
                    class: "code-panel-import",
                    input {
                        r#type: "file",
                        accept: kind.accept(),
                        class: "hidden",
                        onchange: handle_import,
                    }
                    Icon { icon: FaUpload, width: 12, height: 12 }
                    span { "Import" }
                }
            }
            textarea {
                class: "code-panel-text",
                spellcheck: "false",
                placeholder: "Enter {kind.label()} code...",
                value: "{text}",
                oninput: move |evt: FormEvent| studio.write().set_buffer(kind, evt.value()),
            }
        }
    }
}
