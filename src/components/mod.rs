//! Page components for the portfolio.
//!
//! Each one owns its state and timers; markup shared with other pages
//! lives in `folio-ui`.

mod arrow_callout;
mod cursor_trail;
mod file_upload;
mod hero_title;
mod journey_cards;
mod opening_fade;
mod photo_upload;
mod planet_nav;
mod scroll_reveal;
mod shooting_stars;
mod starfield;
mod timeline;

pub use arrow_callout::ArrowCallout;
pub use cursor_trail::CursorTrail;
pub use file_upload::ProjectFiles;
pub use hero_title::HeroTitle;
pub use journey_cards::{JourneyCards, JourneyFlipCard};
pub use opening_fade::OpeningFade;
pub use photo_upload::PhotoUpload;
pub use planet_nav::PlanetCluster;
pub use scroll_reveal::use_scroll_reveal;
pub use shooting_stars::ShootingStars;
pub use starfield::Starfield;
pub use timeline::JourneyTimeline;
