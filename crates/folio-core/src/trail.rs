//! Cursor marker, fog and the smoothed pointer trail.
//!
//! The pointer is sampled on every move; each animation frame the cursor
//! and fog markers ease toward it and the recent samples are smoothed and
//! rebuilt into one curve of chained cubic Bézier segments.

use std::collections::VecDeque;
use std::fmt::Write;

use crate::geometry::Point;

/// Easing factor of the cursor marker
pub const CURSOR_EASE: f64 = 0.25;
/// Easing factor of the fog marker
pub const FOG_EASE: f64 = 0.1;
/// Markers closer than this many pixels to the pointer snap onto it
pub const SETTLE_DISTANCE: f64 = 0.05;
/// Single-pass smoothing factor applied to the raw samples
pub const TRAIL_SMOOTHING: f64 = 0.2;
/// Control point tension between consecutive smoothed points
pub const TRAIL_TENSION: f64 = 0.3;
/// Default number of raw samples kept
pub const DEFAULT_TRAIL_CAPACITY: usize = 30;

/// Bounded FIFO of raw pointer samples
#[derive(Debug, Clone, PartialEq)]
pub struct TrailBuffer {
    points: VecDeque<Point>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest once over capacity
    pub fn push(&mut self, point: Point) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Exponentially smoothed copy: each point eases from its smoothed predecessor
    pub fn smoothed(&self) -> Vec<Point> {
        let mut out: Vec<Point> = Vec::with_capacity(self.points.len());
        for &raw in &self.points {
            let next = match out.last() {
                Some(&prev) => prev.lerp(raw, TRAIL_SMOOTHING),
                None => raw,
            };
            out.push(next);
        }
        out
    }

    /// SVG path for the current samples, or `None` with fewer than two
    pub fn path_data(&self) -> Option<String> {
        curve_path(&self.smoothed(), TRAIL_TENSION)
    }
}

/// Build an SVG path through `points`.
///
/// Two points give a straight segment; more give one cubic segment per
/// consecutive pair, with control points pulled by `tension`.
pub fn curve_path(points: &[Point], tension: f64) -> Option<String> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut d = format!("M {} {}", first.x, first.y);
    if points.len() == 2 {
        let _ = write!(d, " L {} {}", points[1].x, points[1].y);
        return Some(d);
    }

    for i in 1..points.len() {
        let prev = points[i - 1];
        let current = points[i];
        let next = points.get(i + 1).copied().unwrap_or(current);

        let cp1x = prev.x + (current.x - prev.x) * (1.0 - tension);
        let cp1y = prev.y + (current.y - prev.y) * (1.0 - tension);
        let cp2x = current.x - (next.x - current.x) * tension;
        let cp2y = current.y - (next.y - current.y) * tension;

        let _ = write!(
            d,
            " C {} {}, {} {}, {} {}",
            cp1x, cp1y, cp2x, cp2y, current.x, current.y
        );
    }
    Some(d)
}

/// What one animation frame should render
#[derive(Debug, Clone, PartialEq)]
pub struct TrailFrame {
    pub cursor: Point,
    pub fog: Point,
    /// New trail path; `None` leaves the previous path in place
    pub path: Option<String>,
    pub visible: bool,
}

/// State of the cursor effect: pointer, eased markers, trail and viewport
#[derive(Debug, Clone)]
pub struct CursorTrail {
    pointer: Point,
    cursor: Point,
    fog: Point,
    trail: TrailBuffer,
    visible: bool,
    viewport: (f64, f64),
}

impl CursorTrail {
    /// Start with every marker at the viewport centre
    pub fn new(width: f64, height: f64, capacity: usize) -> Self {
        let center = Point::new(width / 2.0, height / 2.0);
        Self {
            pointer: center,
            cursor: center,
            fog: center,
            trail: TrailBuffer::new(capacity),
            visible: true,
            viewport: (width, height),
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.pointer = point;
        self.visible = true;
        self.trail.push(point);
    }

    pub fn pointer_left(&mut self) {
        self.visible = false;
    }

    pub fn pointer_entered(&mut self) {
        self.visible = true;
    }

    /// Re-derive the SVG coordinate space after a window resize
    pub fn resized(&mut self, width: f64, height: f64) {
        self.viewport = (width, height);
    }

    /// `viewBox` attribute for the full-viewport trail SVG
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.viewport.0, self.viewport.1)
    }

    pub fn viewport(&self) -> (f64, f64) {
        self.viewport
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    /// Advance the easing by one frame
    pub fn frame(&mut self) -> TrailFrame {
        self.cursor = ease_toward(self.cursor, self.pointer, CURSOR_EASE);
        self.fog = ease_toward(self.fog, self.pointer, FOG_EASE);
        TrailFrame {
            cursor: self.cursor,
            fog: self.fog,
            path: self.trail.path_data(),
            visible: self.visible,
        }
    }
}

/// One easing step that lands exactly on `target` once close enough, so a
/// resting pointer yields identical frames
fn ease_toward(from: Point, target: Point, factor: f64) -> Point {
    let next = from.lerp(target, factor);
    if (target.x - next.x).abs() < SETTLE_DISTANCE && (target.y - next.y).abs() < SETTLE_DISTANCE {
        target
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_evicts_oldest() {
        let mut buf = TrailBuffer::new(3);
        for i in 0..5 {
            buf.push(Point::new(i as f64, 0.0));
        }
        let xs: Vec<f64> = buf.points().map(|p| p.x).collect();
        assert_eq!(xs, [2.0, 3.0, 4.0]);
    }

    #[test]
    fn smoothing_eases_from_previous_smoothed_point() {
        let mut buf = TrailBuffer::new(30);
        buf.push(Point::new(0.0, 0.0));
        buf.push(Point::new(100.0, 50.0));
        buf.push(Point::new(100.0, 50.0));
        let s = buf.smoothed();
        assert_eq!(s[0], Point::new(0.0, 0.0));
        assert_eq!(s[1], Point::new(20.0, 10.0));
        assert_eq!(s[2], Point::new(36.0, 18.0));
    }

    #[test]
    fn no_path_below_two_points() {
        assert_eq!(curve_path(&[], TRAIL_TENSION), None);
        assert_eq!(curve_path(&[Point::new(1.0, 1.0)], TRAIL_TENSION), None);
    }

    #[test]
    fn two_points_make_a_line() {
        let d = curve_path(&[Point::new(0.0, 0.0), Point::new(10.0, 5.0)], TRAIL_TENSION);
        assert_eq!(d.as_deref(), Some("M 0 0 L 10 5"));
    }

    #[test]
    fn three_points_make_two_cubics() {
        let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(20.0, 0.0)];
        let d = curve_path(&pts, 0.5).unwrap();
        assert_eq!(d, "M 0 0 C 5 0, 5 0, 10 0 C 15 0, 20 0, 20 0");
    }

    #[test]
    fn markers_ease_at_their_own_rates() {
        let mut trail = CursorTrail::new(200.0, 100.0, 30);
        trail.pointer_moved(200.0, 50.0);
        let frame = trail.frame();
        assert_eq!(frame.cursor, Point::new(125.0, 50.0));
        assert_eq!(frame.fog, Point::new(110.0, 50.0));
        assert!(frame.path.is_none());
    }

    #[test]
    fn resting_pointer_settles_to_identical_frames() {
        let mut trail = CursorTrail::new(1000.0, 800.0, 30);
        trail.pointer_moved(900.0, 700.0);

        let mut frames = 0;
        let mut last = trail.frame();
        loop {
            let next = trail.frame();
            frames += 1;
            if next.cursor == last.cursor && next.fog == last.fog {
                break;
            }
            assert!(frames < 300, "markers still moving after {frames} frames");
            last = next;
        }

        assert_eq!(last.cursor, Point::new(900.0, 700.0));
        assert_eq!(last.fog, Point::new(900.0, 700.0));
        assert_eq!(trail.frame(), last);
    }

    #[test]
    fn leave_and_enter_toggle_visibility() {
        let mut trail = CursorTrail::new(100.0, 100.0, 30);
        trail.pointer_left();
        assert!(!trail.frame().visible);
        trail.pointer_entered();
        assert!(trail.frame().visible);
        trail.pointer_left();
        trail.pointer_moved(1.0, 1.0);
        assert!(trail.is_visible());
    }

    #[test]
    fn resize_updates_view_box() {
        let mut trail = CursorTrail::new(800.0, 600.0, 30);
        assert_eq!(trail.view_box(), "0 0 800 600");
        trail.resized(1024.0, 768.0);
        assert_eq!(trail.view_box(), "0 0 1024 768");
    }
}
