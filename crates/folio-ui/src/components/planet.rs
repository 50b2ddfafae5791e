//! Planet navigation buttons and their legend.

use dioxus::prelude::*;
use folio_core::content::Planet;

/// CSS class list for a planet button
pub fn planet_class(planet: &Planet, active: bool) -> String {
    if active {
        format!("planet {} active", planet.class)
    } else {
        format!("planet {}", planet.class)
    }
}

/// A clickable planet bound to a page section
#[component]
pub fn PlanetButton(planet: Planet, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let class = planet_class(&planet, active);

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "data-section": "{planet.section}",
            title: "{planet.label}",
            onclick: move |evt| onclick.call(evt),
        }
    }
}

/// Legend listing each planet's section
#[component]
pub fn PlanetLegend(planets: Vec<Planet>) -> Element {
    rsx! {
        ul { class: "planets-legend",
            for planet in planets {
                li { key: "{planet.section}", class: "legend-item",
                    span { class: "legend-dot {planet.class}" }
                    span { class: "legend-label", "{planet.label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::PLANETS;

    #[test]
    fn active_planet_class() {
        let planet = PLANETS[0];
        assert_eq!(planet_class(&planet, false), "planet planet-mercury");
        assert_eq!(planet_class(&planet, true), "planet planet-mercury active");
    }
}
