//! Scroll reveal: which elements are observed, when, and how intersection
//! reports turn into class changes.
//!
//! The `visible` class is added while an element intersects the reveal
//! region and removed when it leaves, so the entrance replays every time
//! the element scrolls back into view.

use std::time::Duration;

use crate::config::FolioConfig;
use crate::geometry::Rect;

/// Class toggled on observed elements
pub const VISIBLE_CLASS: &str = "visible";
/// Class given to generic text elements before they are observed
pub const SCROLL_ANIMATE_CLASS: &str = "scroll-animate";

/// Every generic text-bearing element on the page
pub const TEXT_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, span, a, li, \
.project-title-large, .project-description-large, .project-badge-large, \
.education-title-large, .education-year-large, .skill-category-title-large, \
.skill-tag-large, .experience-title-large, .experience-description-large, \
.tech-category-title-large, .tech-tag-large, .about-text-large, \
.contact-item-large, .resume-link";

/// Text elements inside these containers are left alone
pub const TEXT_EXCLUDED_ANCESTORS: [&str; 2] = [".hero-section", ".planets-legend"];
/// Text elements carrying this class are left alone
pub const TEXT_EXCLUDED_CLASS: &str = "letter";

/// Registration delay between consecutive card-like items
pub const ITEM_STAGGER: Duration = Duration::from_millis(100);
/// Registration delay between consecutive text elements
pub const TEXT_STAGGER: Duration = Duration::from_millis(10);

/// Intersection options for the reveal observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Share of the element that must be inside the reveal region
    pub threshold: f64,
    /// The region's bottom edge sits this far above the viewport bottom
    pub bottom_margin_px: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 100.0,
        }
    }
}

impl From<&FolioConfig> for RevealOptions {
    fn from(config: &FolioConfig) -> Self {
        Self {
            threshold: config.reveal_threshold,
            bottom_margin_px: config.reveal_bottom_margin_px,
        }
    }
}

impl RevealOptions {
    /// `rootMargin` string for `IntersectionObserver`
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }

    /// The viewport shrunk by the bottom margin
    pub fn reveal_region(&self, viewport_width: f64, viewport_height: f64) -> Rect {
        Rect::new(
            0.0,
            0.0,
            viewport_width,
            (viewport_height - self.bottom_margin_px).max(0.0),
        )
    }

    /// Whether `element` currently satisfies the threshold within `region`
    pub fn is_revealed(&self, element: &Rect, region: &Rect) -> bool {
        let ratio = intersection_ratio(element, region);
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// Visible share of `element` inside `region`, in `0..=1`
pub fn intersection_ratio(element: &Rect, region: &Rect) -> f64 {
    let area = element.area();
    match element.intersection(region) {
        Some(overlap) if area > 0.0 => (overlap.area() / area).clamp(0.0, 1.0),
        // Zero-area elements count as fully visible when they touch the region
        Some(_) => 1.0,
        None => 0.0,
    }
}

/// How observation is spread over a group of matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stagger {
    Immediate,
    PerIndex(Duration),
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> Duration {
        match self {
            Stagger::Immediate => Duration::ZERO,
            Stagger::PerIndex(step) => *step * index as u32,
        }
    }
}

/// A selector whose matches are observed together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealGroup {
    pub selector: &'static str,
    pub stagger: Stagger,
}

/// Sections and card-like item groups, in registration order
pub const REVEAL_GROUPS: [RevealGroup; 6] = [
    RevealGroup {
        selector: ".full-section",
        stagger: Stagger::Immediate,
    },
    RevealGroup {
        selector: ".project-item-large",
        stagger: Stagger::PerIndex(ITEM_STAGGER),
    },
    RevealGroup {
        selector: ".education-item-large",
        stagger: Stagger::Immediate,
    },
    RevealGroup {
        selector: ".skill-category-large",
        stagger: Stagger::PerIndex(ITEM_STAGGER),
    },
    RevealGroup {
        selector: ".experience-item-large",
        stagger: Stagger::PerIndex(ITEM_STAGGER),
    },
    RevealGroup {
        selector: ".cert-item-large",
        stagger: Stagger::PerIndex(ITEM_STAGGER),
    },
];

/// Generic text elements, observed with a small stagger
pub const TEXT_GROUP: RevealGroup = RevealGroup {
    selector: TEXT_SELECTOR,
    stagger: Stagger::PerIndex(TEXT_STAGGER),
};

/// Class mutation for one intersection report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassChange {
    Add,
    Remove,
}

impl ClassChange {
    pub fn for_intersection(is_intersecting: bool) -> Self {
        if is_intersecting {
            ClassChange::Add
        } else {
            ClassChange::Remove
        }
    }
}

/// Intersection reports collected until the next animation frame.
///
/// Several observer callbacks within one frame are coalesced; for an
/// element reported more than once the latest report wins.
#[derive(Debug)]
pub struct RevealBatch<T> {
    pending: Vec<(T, bool)>,
}

impl<T> Default for RevealBatch<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<T: PartialEq> RevealBatch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a report; returns true when a frame must be requested
    pub fn push(&mut self, target: T, is_intersecting: bool) -> bool {
        let needs_frame = self.pending.is_empty();
        if let Some(slot) = self.pending.iter_mut().find(|(t, _)| *t == target) {
            slot.1 = is_intersecting;
        } else {
            self.pending.push((target, is_intersecting));
        }
        needs_frame
    }

    /// Take the queued changes, oldest first
    pub fn flush(&mut self) -> Vec<(T, ClassChange)> {
        self.pending
            .drain(..)
            .map(|(t, hit)| (t, ClassChange::for_intersection(hit)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
