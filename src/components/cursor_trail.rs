//! Shooting-star cursor with a fading trail and a soft fog glow.
//!
//! Pointer events feed the core [`CursorTrail`] state; a frame loop eases
//! the markers toward the pointer and redraws the trail path.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::geometry::Point;
use folio_core::CursorTrail as TrailState;
use wasm_bindgen::JsCast;

use crate::dom::{self, EventStream};
use crate::page_config;

#[component]
pub fn CursorTrail() -> Element {
    let state = use_hook(|| {
        let (width, height) = dom::viewport_size();
        Rc::new(RefCell::new(TrailState::new(
            width,
            height,
            page_config().trail_capacity,
        )))
    });

    let (start_w, start_h) = state.borrow().viewport();
    let start = Point::new(start_w / 2.0, start_h / 2.0);
    let mut cursor = use_signal(|| start);
    let mut fog = use_signal(|| start);
    let mut visible = use_signal(|| true);
    let mut trail_path: Signal<Option<String>> = use_signal(|| None);
    let mut view_box = use_signal(|| state.borrow().view_box());

    // Pointer and resize events
    let events_state = state.clone();
    use_effect(move || {
        let state = events_state.clone();
        spawn(async move {
            let mut events = EventStream::on_window(&["mousemove", "resize"]);
            if let Some(root) = dom::document().and_then(|doc| doc.document_element()) {
                events.listen(&root, "mouseleave");
                events.listen(&root, "mouseenter");
            }

            while let Some(event) = events.next().await {
                let mut trail = state.borrow_mut();
                match event.type_().as_str() {
                    "mousemove" => {
                        if let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() {
                            trail.pointer_moved(mouse.client_x() as f64, mouse.client_y() as f64);
                        }
                    }
                    "mouseleave" => trail.pointer_left(),
                    "mouseenter" => trail.pointer_entered(),
                    "resize" => {
                        let (width, height) = dom::viewport_size();
                        trail.resized(width, height);
                        view_box.set(trail.view_box());
                    }
                    _ => {}
                }
            }
        });
    });

    // Frame loop
    let frame_state = state.clone();
    use_effect(move || {
        let state = frame_state.clone();
        spawn(async move {
            loop {
                dom::next_frame().await;
                let frame = state.borrow_mut().frame();
                if *cursor.peek() != frame.cursor {
                    cursor.set(frame.cursor);
                }
                if *fog.peek() != frame.fog {
                    fog.set(frame.fog);
                }
                if *visible.peek() != frame.visible {
                    visible.set(frame.visible);
                }
                if frame.path.is_some() && frame.path != *trail_path.peek() {
                    trail_path.set(frame.path);
                }
            }
        });
    });

    let opacity = if visible() { 1.0 } else { 0.0 };
    let fog_class = if visible() { "cursor-fog active" } else { "cursor-fog" };
    let d = trail_path().unwrap_or_default();
    let Point { x: cursor_x, y: cursor_y } = cursor();
    let Point { x: fog_x, y: fog_y } = fog();

    rsx! {
        div {
            class: "shooting-star-cursor",
            style: "left: {cursor_x}px; top: {cursor_y}px; opacity: {opacity};",
            "aria-hidden": "true",
        }
        svg {
            class: "cursor-trail-svg",
            "viewBox": "{view_box}",
            "width": "100%",
            "height": "100%",
            "aria-hidden": "true",
            style: "opacity: {opacity};",
            defs {
                linearGradient {
                    id: "trailGradient",
                    x1: "0%",
                    y1: "0%",
                    x2: "100%",
                    y2: "0%",
                    stop { offset: "0%", "stop-color": "#ffffff", "stop-opacity": "0.9" }
                    stop { offset: "50%", "stop-color": "#ffffff", "stop-opacity": "0.4" }
                    stop { offset: "100%", "stop-color": "#ffffff", "stop-opacity": "0" }
                }
            }
            path {
                class: "cursor-trail",
                d: "{d}",
                fill: "none",
                stroke: "url(#trailGradient)",
                "stroke-width": "1",
                "stroke-linecap": "round",
                "stroke-linejoin": "round",
            }
        }
        div {
            class: "{fog_class}",
            style: "left: {fog_x}px; top: {fog_y}px;",
            "aria-hidden": "true",
        }
    }
}
