//! The single portfolio page.
//!
//! A hero banner with the floating title and planet navigation, followed
//! by the about, projects, journey, skills and contact sections. Ambient
//! layers (opening fade, starfield, shooting stars, cursor trail) sit
//! above or behind the content.

use dioxus::prelude::*;
use folio_core::content::HERO_TITLE;

use crate::components::{
    use_scroll_reveal, ArrowCallout, CursorTrail, HeroTitle, JourneyCards, JourneyTimeline,
    OpeningFade, PhotoUpload, PlanetCluster, ProjectFiles, ShootingStars, Starfield,
};

struct Project {
    title: &'static str,
    badge: &'static str,
    description: &'static str,
}

const PROJECTS: [Project; 3] = [
    Project {
        title: "Orbit Planner",
        badge: "Web",
        description: "A trip planner that lays out each day as an orbit around the places you care about.",
    },
    Project {
        title: "Signal Garden",
        badge: "Embedded",
        description: "Soil sensors reporting over LoRa to a small dashboard that waters plants on schedule.",
    },
    Project {
        title: "Quiet Notes",
        badge: "Mobile",
        description: "An offline-first notes app with end-to-end encrypted sync between devices.",
    },
];

const SKILLS: [(&str, &[&str]); 3] = [
    ("Languages", &["Rust", "TypeScript", "Python", "SQL"]),
    ("Frontend", &["Dioxus", "React", "CSS animation", "SVG"]),
    ("Tooling", &["Git", "Docker", "Linux", "CI pipelines"]),
];

#[component]
pub fn Portfolio() -> Element {
    use_scroll_reveal();

    rsx! {
        OpeningFade {}
        Starfield {}
        CursorTrail {}

        main { class: "portfolio",
            section { id: "home", class: "hero-section",
                ShootingStars {}
                HeroTitle { text: HERO_TITLE.to_string() }
                p { class: "hero-subtitle", "Software engineer exploring the space between code and design" }
                PlanetCluster {}
            }

            section { id: "about", class: "full-section",
                div { class: "about-layout",
                    div { class: "photo-column",
                        PhotoUpload {}
                        ArrowCallout { section: "about".to_string() }
                    }
                    div { class: "about-column",
                        h2 { class: "section-title", "Who am I?" }
                        div { class: "about-text-large",
                            "I build software that feels calm to use: fast interfaces, careful \
                             state handling and small details that make a page feel alive."
                        }
                        a { class: "resume-link", href: "#contact", "Get in touch" }
                    }
                }
            }

            section { id: "projects", class: "full-section",
                h2 { class: "section-title", "Projects" }
                div { class: "projects-grid",
                    for project in PROJECTS.iter() {
                        div { key: "{project.title}", class: "project-item-large",
                            div { class: "project-badge-large", "{project.badge}" }
                            div { class: "project-title-large", "{project.title}" }
                            div { class: "project-description-large", "{project.description}" }
                        }
                    }
                }
                ProjectFiles {}
            }

            section { id: "journey", class: "full-section",
                h2 { class: "section-title", "Journey" }
                JourneyTimeline {}
                div { class: "education-item-large",
                    div { class: "education-title-large", "B.Sc. Computer Science" }
                    div { class: "education-year-large", "2019 - 2023" }
                }
                div { class: "experience-item-large",
                    div { class: "experience-title-large", "Software Engineer" }
                    div { class: "experience-description-large",
                        "Building web tooling and the services behind it."
                    }
                }
                JourneyCards {}
            }

            section { id: "skills", class: "full-section",
                h2 { class: "section-title", "Skills" }
                div { class: "skills-grid",
                    for (category, tags) in SKILLS {
                        div { key: "{category}", class: "skill-category-large",
                            div { class: "skill-category-title-large", "{category}" }
                            div { class: "skill-tags",
                                for tag in tags.iter() {
                                    div { key: "{tag}", class: "skill-tag-large", "{tag}" }
                                }
                            }
                        }
                    }
                }
                div { class: "cert-item-large", "Certified Kubernetes Application Developer" }
            }

            section { id: "contact", class: "full-section",
                h2 { class: "section-title", "Contact" }
                div { class: "contact-list",
                    a { class: "contact-item-large", href: "mailto:hello@example.com", "hello@example.com" }
                    a { class: "contact-item-large", href: "https://github.com", "GitHub" }
                    a { class: "contact-item-large", href: "https://www.linkedin.com", "LinkedIn" }
                }
            }
        }
    }
}
