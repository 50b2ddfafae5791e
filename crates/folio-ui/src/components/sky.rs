//! Starfield and shooting star elements.

use dioxus::prelude::*;
use folio_core::sky::{ShootingStar, Star};

/// Inline style for one static star dot
pub fn star_style(star: &Star) -> String {
    format!(
        "position: absolute; left: {}%; top: {}%; width: {size}px; height: {size}px; \
border-radius: 50%; background: white;",
        star.x,
        star.y,
        size = star.size
    )
}

/// Fixed background of static dots, rendered once
#[component]
pub fn StarField(stars: Vec<Star>) -> Element {
    rsx! {
        div { class: "stars-container", "aria-hidden": "true",
            for (index, star) in stars.iter().enumerate() {
                div { key: "{index}", class: "star", style: star_style(star) }
            }
        }
    }
}

/// CSS classes for a shooting star; `active` starts the streak
pub fn shooting_star_class(star: &ShootingStar) -> &'static str {
    if star.active {
        "shooting-star active"
    } else {
        "shooting-star"
    }
}

/// One streak crossing the hero banner
#[component]
pub fn ShootingStarView(star: ShootingStar) -> Element {
    rsx! {
        div {
            class: shooting_star_class(&star),
            style: star.style(),
            "aria-hidden": "true",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn star_style_positions_dot() {
        let star = Star { x: 12.5, y: 40.0, size: 2 };
        let style = star_style(&star);
        assert!(style.contains("left: 12.5%"));
        assert!(style.contains("top: 40%"));
        assert!(style.contains("width: 2px; height: 2px"));
    }

    #[test]
    fn shooting_star_activates() {
        let mut star = ShootingStar {
            id: 1,
            top_percent: 18.0,
            duration: Duration::from_millis(1_800),
            active: false,
        };
        assert_eq!(shooting_star_class(&star), "shooting-star");
        star.active = true;
        assert_eq!(shooting_star_class(&star), "shooting-star active");
    }
}
