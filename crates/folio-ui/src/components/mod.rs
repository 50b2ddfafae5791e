//! Reusable page components.

mod button;
mod file_item;
mod planet;
mod sky;

pub use button::*;
pub use file_item::*;
pub use planet::*;
pub use sky::*;
