//! Stellar Folio Core Library
//!
//! DOM-free behavior logic for a single personal portfolio page.
//!
//! ## Overview
//!
//! Every interactive effect on the page is split into a pure state object
//! that lives here and a thin browser binding in the application crate:
//!
//! - **Uploads**: size formatting, extension icons, the file list and
//!   data URL previews ([`upload`])
//! - **Scroll reveal**: observer options, registration groups and
//!   frame-batched class toggles ([`reveal`])
//! - **Ambient motion**: starfield, shooting stars, cursor trail, letter
//!   float, planet navigation, typewriters, the timeline path
//!   ([`sky`], [`trail`], [`letters`], [`planets`], [`typewriter`], [`timeline`])
//! - **Scheduling**: the repeating-task runner with an explicit stop handle
//!   ([`schedule`])
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::upload::{file_icon, format_file_size};
//!
//! assert_eq!(file_icon("REPORT.PDF"), "📄");
//! assert_eq!(format_file_size(2048), "2 KB");
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod geometry;
pub mod intro;
pub mod letters;
pub mod planets;
pub mod reveal;
pub mod schedule;
pub mod sky;
pub mod timeline;
pub mod trail;
pub mod typewriter;
pub mod upload;

// Re-exports
pub use config::FolioConfig;
pub use error::FolioError;
pub use geometry::{Point, Rect};
pub use schedule::{DelayRange, Schedule, StopHandle};
pub use trail::CursorTrail;
pub use upload::{BatchOutcome, FileId, FileList, UploadedFile};

/// Result alias for fallible page operations.
pub type Result<T> = std::result::Result<T, FolioError>;
