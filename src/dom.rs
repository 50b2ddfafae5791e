//! Browser bridge: element lookup, geometry, timers and event streams.
//!
//! Everything that touches `web_sys` directly goes through here so the
//! components stay focused on state.

use std::borrow::Cow;
use std::time::Duration;

use folio_core::{FolioError, Rect};
use futures::channel::{mpsc, oneshot};
use futures::StreamExt;
use gloo::events::EventListener;
use gloo::render::request_animation_frame;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, ScrollBehavior,
    ScrollToOptions, Window,
};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Element with `id`, or [`FolioError::MissingElement`]
pub fn element_by_id(id: &str) -> Result<Element, FolioError> {
    document()
        .and_then(|doc| doc.get_element_by_id(id))
        .ok_or_else(|| FolioError::MissingElement(format!("#{id}")))
}

/// All elements matching `selector`, in document order
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Inner width and height of the window in CSS pixels
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Bounding box of `element` relative to the viewport
pub fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Document offset of the section with `id`
pub fn offset_top(id: &str) -> Result<f64, FolioError> {
    let element = element_by_id(id)?;
    let html = element
        .dyn_into::<HtmlElement>()
        .map_err(|_| FolioError::Dom(format!("#{id} is not an HTML element")))?;
    Ok(html.offset_top() as f64)
}

pub fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Add or remove `class` on `<body>`
pub fn set_body_class(class: &str, on: bool) {
    if let Some(body) = document().and_then(|doc| doc.body()) {
        let _ = body.class_list().toggle_with_force(class, on);
    }
}

/// Reset a file input so the same selection fires `change` again
pub fn clear_input(id: &str) -> Result<(), FolioError> {
    let input = element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| FolioError::Dom(format!("#{id} is not an input")))?;
    input.set_value("");
    Ok(())
}

/// Current wall-clock time as an offset from the epoch
pub fn now() -> Duration {
    Duration::from_millis(js_sys::Date::now() as u64)
}

pub async fn sleep(duration: Duration) {
    let ms = duration.as_millis().min(u32::MAX as u128) as u32;
    TimeoutFuture::new(ms).await;
}

/// Resolve on the next animation frame with its timestamp
pub async fn next_frame() -> f64 {
    let (tx, rx) = oneshot::channel();
    let _handle = request_animation_frame(move |timestamp| {
        let _ = tx.send(timestamp);
    });
    rx.await.unwrap_or_default()
}

/// DOM events from one or more targets, delivered as an async stream.
///
/// The listeners are removed when the stream is dropped, so a stream held
/// by a component task lives exactly as long as that task.
pub struct EventStream {
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    listeners: Vec<EventListener>,
}

impl EventStream {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded();
        Self {
            tx,
            rx,
            listeners: Vec::new(),
        }
    }

    /// Forward `kind` events from `target` into the stream
    pub fn listen(&mut self, target: &EventTarget, kind: impl Into<Cow<'static, str>>) {
        let tx = self.tx.clone();
        let listener = EventListener::new(target, kind, move |event| {
            let _ = tx.unbounded_send(event.clone());
        });
        self.listeners.push(listener);
    }

    /// Stream of `kinds` on the window; empty when there is no window
    pub fn on_window(kinds: &[&'static str]) -> Self {
        let mut stream = Self::new();
        if let Some(window) = window() {
            for kind in kinds {
                stream.listen(&window, *kind);
            }
        }
        stream
    }

    pub async fn next(&mut self) -> Option<Event> {
        if self.listeners.is_empty() {
            return None;
        }
        self.rx.next().await
    }
}
