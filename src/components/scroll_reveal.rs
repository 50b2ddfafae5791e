//! Scroll-triggered reveal of sections, cards and text.
//!
//! Elements gain the `visible` class while they intersect the viewport
//! (shrunk by the bottom margin) and lose it when they leave, so entrances
//! replay on every pass. Reports are applied once per animation frame.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use folio_core::reveal::{
    ClassChange, RevealBatch, RevealGroup, RevealOptions, REVEAL_GROUPS, SCROLL_ANIMATE_CLASS,
    TEXT_EXCLUDED_ANCESTORS, TEXT_EXCLUDED_CLASS, TEXT_GROUP, VISIBLE_CLASS,
};
use folio_core::FolioError;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{self, EventStream};
use crate::page_config;

fn apply(element: &Element, change: ClassChange) {
    let classes = element.class_list();
    let _ = match change {
        ClassChange::Add => classes.add_1(VISIBLE_CLASS),
        ClassChange::Remove => classes.remove_1(VISIBLE_CLASS),
    };
}

/// IntersectionObserver whose reports are batched into animation frames
struct ObserverReveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverReveal {
    fn new(options: RevealOptions) -> Result<Self, FolioError> {
        let batch: Rc<RefCell<RevealBatch<Element>>> = Rc::new(RefCell::new(RevealBatch::new()));
        let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let mut needs_frame = false;
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    needs_frame |= batch.borrow_mut().push(entry.target(), entry.is_intersecting());
                }
                if !needs_frame || frame.borrow().is_some() {
                    return;
                }

                let pending = batch.clone();
                let slot = frame.clone();
                let handle = request_animation_frame(move |_| {
                    slot.borrow_mut().take();
                    let changes = pending.borrow_mut().flush();
                    for (element, change) in changes {
                        apply(&element, change);
                    }
                });
                *frame.borrow_mut() = Some(handle);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| FolioError::Dom(format!("IntersectionObserver unavailable: {e:?}")))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObserverReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// How registered elements are watched
#[derive(Clone)]
enum Watcher {
    Observer(Rc<ObserverReveal>),
    /// Geometry checks on scroll and resize, for browsers without an observer
    Polling {
        options: RevealOptions,
        elements: Rc<RefCell<Vec<Element>>>,
    },
}

impl Watcher {
    fn new(options: RevealOptions) -> Self {
        match ObserverReveal::new(options) {
            Ok(observer) => Watcher::Observer(Rc::new(observer)),
            Err(e) => {
                tracing::warn!("Falling back to scroll polling: {}", e);
                Watcher::Polling {
                    options,
                    elements: Rc::new(RefCell::new(Vec::new())),
                }
            }
        }
    }

    fn watch(&self, element: Element) {
        match self {
            Watcher::Observer(reveal) => reveal.observer.observe(&element),
            Watcher::Polling { options, elements } => {
                let (width, height) = dom::viewport_size();
                let region = options.reveal_region(width, height);
                let hit = options.is_revealed(&dom::rect_of(&element), &region);
                apply(&element, ClassChange::for_intersection(hit));
                elements.borrow_mut().push(element);
            }
        }
    }

    /// Re-evaluate every polled element; no-op for the observer
    fn refresh(&self) {
        let Watcher::Polling { options, elements } = self else {
            return;
        };
        let (width, height) = dom::viewport_size();
        let region = options.reveal_region(width, height);
        for element in elements.borrow().iter() {
            let hit = options.is_revealed(&dom::rect_of(element), &region);
            apply(element, ClassChange::for_intersection(hit));
        }
    }
}

/// Whether a generic text match should be left alone
fn is_excluded_text(element: &Element) -> bool {
    if element.class_list().contains(TEXT_EXCLUDED_CLASS) {
        return true;
    }
    TEXT_EXCLUDED_ANCESTORS
        .iter()
        .any(|selector| matches!(element.closest(selector), Ok(Some(_))))
}

/// Observe each element of `group`, waiting out its stagger between them
async fn register_group(watcher: Watcher, group: RevealGroup, elements: Vec<Element>) {
    let mut waited = Duration::ZERO;
    for (index, element) in elements.into_iter().enumerate() {
        let due = group.stagger.delay_for(index);
        if due > waited {
            dom::sleep(due - waited).await;
            waited = due;
        }
        watcher.watch(element);
    }
}

/// Install the page-wide scroll reveal once the page has rendered.
///
/// Sections and card groups are registered first, then every generic
/// text element outside the hero banner and planet legend is tagged with
/// `scroll-animate` and registered with a small per-element stagger.
pub fn use_scroll_reveal() {
    let slot: Rc<RefCell<Option<Watcher>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let installed = slot.clone();
    use_effect(move || {
        if installed.borrow().is_some() {
            return;
        }
        let watcher = Watcher::new(RevealOptions::from(page_config()));
        *installed.borrow_mut() = Some(watcher.clone());

        for group in REVEAL_GROUPS {
            let elements = dom::query_all(group.selector);
            spawn(register_group(watcher.clone(), group, elements));
        }

        // Indices count every match, excluded or not
        let text: Vec<(usize, Element)> = dom::query_all(TEXT_GROUP.selector)
            .into_iter()
            .enumerate()
            .filter(|(_, element)| !is_excluded_text(element))
            .collect();
        for (_, element) in &text {
            let _ = element.class_list().add_1(SCROLL_ANIMATE_CLASS);
        }
        tracing::debug!("Registering {} text elements for reveal", text.len());

        let text_watcher = watcher.clone();
        spawn(async move {
            let mut waited = Duration::ZERO;
            for (index, element) in text {
                let due = TEXT_GROUP.stagger.delay_for(index);
                if due > waited {
                    dom::sleep(due - waited).await;
                    waited = due;
                }
                text_watcher.watch(element);
            }
        });

        if matches!(watcher, Watcher::Polling { .. }) {
            spawn(async move {
                let mut events = EventStream::on_window(&["scroll", "resize"]);
                while events.next().await.is_some() {
                    watcher.refresh();
                }
            });
        }
    });

    use_drop(move || {
        slot.borrow_mut().take();
    });
}
