//! Planet navigation: exclusive active marker, scroll targets and the
//! cluster's scroll-dependent visibility.

use std::time::Duration;

/// A planet clears its active marker this long after being clicked
pub const ACTIVE_DURATION: Duration = Duration::from_secs(2);

/// Token identifying one activation, used to expire only that activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub planet: usize,
    pub token: u64,
}

/// Which planet (if any) is currently marked active
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetNav {
    active: Option<Activation>,
    next_token: u64,
}

impl PlanetNav {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `planet` active, clearing any other planet first.
    ///
    /// Returns the new activation, whose token is later passed to
    /// [`Self::expire`].
    pub fn activate(&mut self, planet: usize) -> Activation {
        let activation = Activation {
            planet,
            token: self.next_token,
        };
        self.next_token += 1;
        self.active = Some(activation);
        activation
    }

    /// Clear the marker if `activation` is still the current one
    pub fn expire(&mut self, activation: Activation) -> bool {
        if self.active == Some(activation) {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active.map(|a| a.planet)
    }

    pub fn is_active(&self, planet: usize) -> bool {
        self.active() == Some(planet)
    }
}

/// Scroll offset for a section, leaving room for the fixed header
pub fn scroll_target(section_offset_top: f64, header_offset: f64) -> f64 {
    (section_offset_top - header_offset).max(0.0)
}

/// Whether the planet cluster is shown for a scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterVisibility {
    Shown,
    Hidden,
}

impl ClusterVisibility {
    /// Hidden once `scroll_y` exceeds `hide_ratio` of the viewport height
    pub fn for_scroll(scroll_y: f64, viewport_height: f64, hide_ratio: f64) -> Self {
        if scroll_y > viewport_height * hide_ratio {
            ClusterVisibility::Hidden
        } else {
            ClusterVisibility::Shown
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, ClusterVisibility::Hidden)
    }

    /// Inline style for the cluster container
    pub fn style(&self) -> &'static str {
        match self {
            ClusterVisibility::Shown => "opacity: 1; pointer-events: auto;",
            ClusterVisibility::Hidden => "opacity: 0; pointer-events: none;",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_is_exclusive() {
        let mut nav = PlanetNav::new();
        nav.activate(0);
        assert!(nav.is_active(0));

        nav.activate(2);
        assert!(!nav.is_active(0));
        assert!(nav.is_active(2));
        assert_eq!(nav.active(), Some(2));
    }

    #[test]
    fn stale_expiry_is_ignored() {
        let mut nav = PlanetNav::new();
        let first = nav.activate(1);
        let second = nav.activate(3);

        assert!(!nav.expire(first));
        assert_eq!(nav.active(), Some(3));

        assert!(nav.expire(second));
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn reclicking_same_planet_extends_activation() {
        let mut nav = PlanetNav::new();
        let first = nav.activate(1);
        let again = nav.activate(1);
        assert!(!nav.expire(first));
        assert!(nav.is_active(1));
        assert!(nav.expire(again));
    }

    #[test]
    fn scroll_target_subtracts_header() {
        assert_eq!(scroll_target(1200.0, 80.0), 1120.0);
        assert_eq!(scroll_target(40.0, 80.0), 0.0);
    }

    #[test]
    fn cluster_hides_past_half_viewport() {
        let h = 800.0;
        assert_eq!(ClusterVisibility::for_scroll(0.0, h, 0.5), ClusterVisibility::Shown);
        assert_eq!(ClusterVisibility::for_scroll(400.0, h, 0.5), ClusterVisibility::Shown);
        assert_eq!(ClusterVisibility::for_scroll(401.0, h, 0.5), ClusterVisibility::Hidden);
        assert_eq!(ClusterVisibility::for_scroll(120.0, h, 0.5), ClusterVisibility::Shown);
    }

    #[test]
    fn hidden_cluster_blocks_pointer() {
        assert!(ClusterVisibility::Hidden.style().contains("pointer-events: none"));
        assert!(ClusterVisibility::Shown.style().contains("opacity: 1"));
    }
}
