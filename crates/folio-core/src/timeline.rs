//! Journey timeline line.
//!
//! Four marker elements sit inside a container; the line joining them is a
//! chain of quadratic Bézier segments whose control points alternate to
//! the left and right of each segment's midpoint.

use std::fmt::Write;

use crate::geometry::{Point, Rect};

/// Element ids of the timeline markers, in drawing order
pub const TIMELINE_MARKERS: [&str; 4] = [
    "timeline-marker-1",
    "timeline-marker-2",
    "timeline-marker-3",
    "timeline-marker-4",
];

/// Lateral control-point offset per segment, in percent of the container width
pub const TIMELINE_WIGGLE: f64 = 8.0;

/// Centre of `marker` relative to `container`, in percent of its size
pub fn marker_center_percent(marker: &Rect, container: &Rect) -> Option<Point> {
    if container.width <= 0.0 || container.height <= 0.0 {
        return None;
    }
    let c = marker.center();
    Some(Point::new(
        (c.x - container.left) / container.width * 100.0,
        (c.y - container.top) / container.height * 100.0,
    ))
}

/// Path through `points` for a `0 0 100 100` viewBox.
///
/// Even segments bend left, odd segments bend right.
pub fn wiggle_path(points: &[Point], wiggle: f64) -> Option<String> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut d = format!("M {} {}", first.x, first.y);
    let mut prev = *first;
    for (i, &point) in rest.iter().enumerate() {
        let mid = prev.midpoint(point);
        let side = if i % 2 == 0 { -1.0 } else { 1.0 };
        let _ = write!(
            d,
            " Q {} {}, {} {}",
            mid.x + side * wiggle,
            mid.y,
            point.x,
            point.y
        );
        prev = point;
    }
    Some(d)
}
