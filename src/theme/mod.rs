//! Visual theme: the global stylesheet injected by the root component.

mod styles;

pub use styles::GLOBAL_STYLES;
