//! One-shot opening fade over the whole page.

use std::time::Duration;

/// The overlay starts fading this long after load
pub const FADE_START: Duration = Duration::from_millis(500);
/// The overlay is removed this long after the fade starts
pub const FADE_DURATION: Duration = Duration::from_millis(1_500);

/// Lifecycle of the opening overlay; it never returns to an earlier phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadePhase {
    #[default]
    Opaque,
    Fading,
    Removed,
}

impl FadePhase {
    /// Next phase and the wait before entering it
    pub fn next(&self) -> Option<(FadePhase, Duration)> {
        match self {
            FadePhase::Opaque => Some((FadePhase::Fading, FADE_START)),
            FadePhase::Fading => Some((FadePhase::Removed, FADE_DURATION)),
            FadePhase::Removed => None,
        }
    }

    pub fn opacity(&self) -> f64 {
        match self {
            FadePhase::Opaque => 1.0,
            FadePhase::Fading | FadePhase::Removed => 0.0,
        }
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, FadePhase::Removed)
    }
}
