//! Uploaded file row: icon, name, formatted size and a remove control.

use dioxus::prelude::*;
use folio_core::UploadedFile;

use super::RemoveButton;

/// One entry of the project files list
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for file in files.read().entries().iter().cloned() {
///         FileItem {
///             key: "{file.id}",
///             file: file.clone(),
///             on_remove: move |id| { files.write().remove(id); },
///         }
///     }
/// }
/// ```
#[component]
pub fn FileItem(file: UploadedFile, on_remove: EventHandler<folio_core::FileId>) -> Element {
    let id = file.id;

    rsx! {
        div {
            class: "file-item",
            "data-file-name": "{file.name}",
            span { class: "file-icon", "{file.icon}" }
            div { class: "file-info",
                div { class: "file-name", "{file.name}" }
                div { class: "file-size", "{file.size_label}" }
            }
            RemoveButton { onclick: move |_| on_remove.call(id) }
        }
    }
}
