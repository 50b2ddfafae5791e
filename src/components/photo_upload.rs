//! Profile photo picker with an inline preview.

use dioxus::prelude::*;
use folio_core::upload::data_url;

/// Clickable photo frame backed by `input#photo-upload`.
///
/// Choosing an image shows it as the preview and hides the placeholder
/// overlay. Cancelling the picker leaves the current preview untouched.
#[component]
pub fn PhotoUpload() -> Element {
    let mut preview: Signal<Option<String>> = use_signal(|| None);

    let on_change = move |evt: FormEvent| {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };

        spawn(async move {
            match engine.read_file(&name).await {
                Some(bytes) => {
                    tracing::debug!("Loaded photo {} ({} bytes)", name, bytes.len());
                    preview.set(Some(data_url(&name, &bytes)));
                }
                None => tracing::debug!("Could not read photo {}", name),
            }
        });
    };

    rsx! {
        div { class: "photo-frame",
            label { class: "photo-upload-label", "for": "photo-upload",
                if let Some(src) = preview() {
                    img {
                        id: "photo-preview",
                        class: "photo-preview active",
                        src: "{src}",
                        alt: "Profile photo",
                    }
                } else {
                    div { class: "photo-overlay-large",
                        div { class: "photo-overlay-icon", "+" }
                        div { class: "photo-overlay-text", "Add a photo" }
                    }
                }
            }
            input {
                id: "photo-upload",
                r#type: "file",
                accept: "image/*",
                class: "visually-hidden",
                onchange: on_change,
            }
        }
    }
}
