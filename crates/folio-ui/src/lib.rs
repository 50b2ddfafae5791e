//! Stellar Folio UI Components
//!
//! Stateless Dioxus components for the portfolio page. State and timing
//! live in the application crate; these only render what they are given.
//!
//! ## Visual Language
//!
//! A night sky over a dark page:
//! - **White glow**: stars, the cursor marker and its trail
//! - **Planets**: the navigation cluster orbiting the hero title
//! - **Glass rows**: uploaded file entries

pub mod components;

pub use components::*;
