//! Icon Buttons
//!
//! Compact glyph-only buttons used inside list rows.

use dioxus::prelude::*;

/// Icon button for compact actions
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Tooltip, also used as the accessible label
    pub title: String,
    /// CSS class for the button
    #[props(default = "icon-btn".to_string())]
    pub class: String,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    rsx! {
        button {
            class: "{props.class}",
            r#type: "button",
            title: "{props.title}",
            "aria-label": "{props.title}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Remove control for one uploaded file row
#[component]
pub fn RemoveButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            title: "Remove file".to_string(),
            class: "file-remove".to_string(),
            "\u{00D7}"
        }
    }
}
