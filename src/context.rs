//! Shared page context.
//!
//! Provides one random number generator to every animated component via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(SharedRng::from_entropy);
//!
//! // In child components
//! let rng = use_rng();
//! let delay = rng.with(|r| range.sample(r));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Page-wide random source.
///
/// The browser is single threaded, so `Rc<RefCell<>>` is enough for every
/// component and task to share it.
#[derive(Clone)]
pub struct SharedRng(Rc<RefCell<SmallRng>>);

impl SharedRng {
    /// Seed from the browser's `Math.random` and clock
    pub fn from_entropy() -> Self {
        let noise = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let clock = js_sys::Date::now() as u64;
        Self::seeded(noise ^ clock)
    }

    pub fn seeded(seed: u64) -> Self {
        Self(Rc::new(RefCell::new(SmallRng::seed_from_u64(seed))))
    }

    /// Borrow the generator for one draw
    pub fn with<T>(&self, f: impl FnOnce(&mut SmallRng) -> T) -> T {
        f(&mut self.0.borrow_mut())
    }
}

/// Hook to access the page random source.
pub fn use_rng() -> SharedRng {
    use_context::<SharedRng>()
}
