//! Project file attachments list.

use dioxus::prelude::*;
use folio_core::FileList;
use folio_ui::FileItem;
use futures::StreamExt;

use crate::dom;

const INPUT_ID: &str = "project-files-upload";

/// Multi-file picker feeding `#files-list`.
///
/// Selections queue through one coroutine, so each batch is appended in
/// the order it was picked even while earlier sizes are still being read.
/// The input is cleared afterwards so picking the same files again still
/// registers.
#[component]
pub fn ProjectFiles() -> Element {
    let mut files = use_signal(FileList::new);

    let selections = use_coroutine(move |mut rx: UnboundedReceiver<FormEvent>| async move {
        while let Some(evt) = rx.next().await {
            let Some(engine) = evt.files() else {
                continue;
            };
            let names = engine.files();
            if names.is_empty() {
                continue;
            }

            let mut batch = Vec::with_capacity(names.len());
            for name in names {
                let size = engine.file_size(&name).await;
                batch.push((name, size));
            }
            let outcome = files.write().add_readable(batch);
            for name in &outcome.skipped {
                tracing::debug!("Skipping {}: size unreadable", name);
            }
            tracing::info!("Attached {} project files", outcome.added.len());

            if let Err(e) = dom::clear_input(INPUT_ID) {
                tracing::debug!("Could not reset file input: {}", e);
            }
        }
    });

    let entries = files.read().entries().to_vec();

    rsx! {
        div { class: "project-files",
            label { class: "upload-button", "for": INPUT_ID, "Attach files" }
            input {
                id: INPUT_ID,
                r#type: "file",
                multiple: true,
                class: "visually-hidden",
                onchange: move |evt: FormEvent| selections.send(evt),
            }
            div { id: "files-list", class: "files-list",
                for file in entries {
                    FileItem {
                        key: "{file.id}",
                        file: file.clone(),
                        on_remove: move |id| {
                            files.write().remove(id);
                        },
                    }
                }
            }
        }
    }
}
