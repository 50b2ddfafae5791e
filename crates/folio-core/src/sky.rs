//! Starfield dots and shooting stars.

use std::time::Duration;

use rand::Rng;

use crate::schedule::{DelayRange, Schedule};

/// First shooting star after 3-6s, then one every 5-12s
pub const SHOOTING_STAR_SCHEDULE: Schedule =
    Schedule::every(DelayRange::new(3_000, 6_000), DelayRange::new(5_000, 12_000));

/// Extra time a shooting star stays in the document after its animation
pub const SHOOTING_STAR_LINGER: Duration = Duration::from_millis(500);

/// One static dot in the background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Horizontal position in percent of the viewport
    pub x: f64,
    /// Vertical position in percent of the viewport
    pub y: f64,
    /// Diameter in pixels (1 or 2)
    pub size: u8,
}

/// Generate `count` dots at uniform-random positions, 70% small / 30% large.
///
/// The field is generated once per page and never mutated.
pub fn generate_starfield<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            x: rng.random::<f64>() * 100.0,
            y: rng.random::<f64>() * 100.0,
            size: if rng.random::<f64>() < 0.7 { 1 } else { 2 },
        })
        .collect()
}

/// A transient streak crossing the hero banner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShootingStar {
    pub id: u64,
    /// Vertical band, 15-25% of the viewport height
    pub top_percent: f64,
    /// Animation duration, 1.5-2.5s
    pub duration: Duration,
    /// Set on the frame after insertion so the CSS transition runs
    pub active: bool,
}

impl ShootingStar {
    pub fn spawn<R: Rng + ?Sized>(id: u64, rng: &mut R) -> Self {
        let seconds = 1.5 + rng.random::<f64>();
        Self {
            id,
            top_percent: 15.0 + rng.random::<f64>() * 10.0,
            duration: Duration::from_secs_f64(seconds),
            active: false,
        }
    }

    /// How long the element stays in the document
    pub fn lifetime(&self) -> Duration {
        self.duration + SHOOTING_STAR_LINGER
    }

    /// Inline style carrying position and duration
    pub fn style(&self) -> String {
        format!(
            "top: {}%; --star-duration: {}s;",
            self.top_percent,
            self.duration.as_secs_f64()
        )
    }
}
