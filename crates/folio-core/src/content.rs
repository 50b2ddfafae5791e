//! Fixed page content: hero title, sections, planets, the arrow phrase and
//! the journey card texts.

/// Main heading, split into letter spans
pub const HERO_TITLE: &str = "Walid Latif";

/// Phrase typed by the arrow callout next to the portrait
pub const ARROW_PHRASE: &str = "that's me!";

/// A page section reachable from the planet cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Planet {
    /// Label shown in the legend
    pub label: &'static str,
    /// Id of the target section
    pub section: &'static str,
    /// Extra class selecting the planet's look and orbit
    pub class: &'static str,
}

pub const PLANETS: [Planet; 5] = [
    Planet {
        label: "About",
        section: "about",
        class: "planet-mercury",
    },
    Planet {
        label: "Projects",
        section: "projects",
        class: "planet-venus",
    },
    Planet {
        label: "Journey",
        section: "journey",
        class: "planet-earth",
    },
    Planet {
        label: "Skills",
        section: "skills",
        class: "planet-mars",
    },
    Planet {
        label: "Contact",
        section: "contact",
        class: "planet-jupiter",
    },
];

/// A journey card: a title on the front, a typed description on the back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const JOURNEY_CARDS: [JourneyCard; 2] = [
    JourneyCard {
        id: "journey-card-origin",
        title: "Where it started",
        description: "It began with taking things apart to see how they worked, \
and it grew into a habit of building them back better.",
    },
    JourneyCard {
        id: "journey-card-horizon",
        title: "Where it's going",
        description: "Next stop: engineering systems that feel effortless to use, \
one careful iteration at a time.",
    },
];

/// Labels beside the four timeline markers, top to bottom
pub const TIMELINE_MILESTONES: [&str; 4] = ["First line of code", "University", "First role", "Today"];
