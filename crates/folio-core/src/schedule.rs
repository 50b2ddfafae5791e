//! Repeating tasks with randomized delays and an explicit stop handle.
//!
//! Every ambient effect reschedules itself after a random pause. The
//! runner here owns that loop so the browser side only supplies a sleep
//! primitive and the per-occurrence action. The runner is executor-agnostic:
//! it is driven by gloo timers in the page and by tokio's paused clock in
//! tests.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use rand::Rng;

/// Inclusive range of delays in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub const fn fixed(ms: u64) -> Self {
        Self::new(ms, ms)
    }

    /// Draw a delay uniformly from the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let ms = if self.max_ms <= self.min_ms {
            self.min_ms
        } else {
            rng.random_range(self.min_ms..=self.max_ms)
        };
        Duration::from_millis(ms)
    }
}

/// When a repeating task fires.
///
/// The task waits `initial`, optionally fires, then alternates between
/// waiting `interval` and firing until stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub initial: DelayRange,
    pub interval: DelayRange,
    /// Fire right after the initial delay instead of treating it as a lead-in
    pub fire_after_initial: bool,
}

impl Schedule {
    /// First occurrence after `initial`, then every `interval`
    pub const fn every(initial: DelayRange, interval: DelayRange) -> Self {
        Self {
            initial,
            interval,
            fire_after_initial: true,
        }
    }

    /// Wait `lead_in`, then start the regular `interval` cadence
    pub const fn after_lead_in(lead_in: DelayRange, interval: DelayRange) -> Self {
        Self {
            initial: lead_in,
            interval,
            fire_after_initial: false,
        }
    }
}

/// Shared flag that ends a repeating task at its next wake-up
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Drive `tick` according to `schedule` until `stop` is raised.
///
/// `delay` turns a range into a concrete pause (usually by sampling an
/// RNG) and `sleep` waits for it. The stop flag is checked after every
/// wake-up, so a stopped task never fires again.
pub async fn run<D, S, Fut, T>(schedule: Schedule, stop: StopHandle, mut delay: D, mut sleep: S, mut tick: T)
where
    D: FnMut(DelayRange) -> Duration,
    S: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
    T: FnMut(),
{
    sleep(delay(schedule.initial)).await;
    if stop.is_stopped() {
        return;
    }
    if schedule.fire_after_initial {
        tick();
    }

    loop {
        if stop.is_stopped() {
            return;
        }
        sleep(delay(schedule.interval)).await;
        if stop.is_stopped() {
            return;
        }
        tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn sample_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        let range = DelayRange::new(5_000, 12_000);
        for _ in 0..500 {
            let d = range.sample(&mut rng).as_millis() as u64;
            assert!((5_000..=12_000).contains(&d));
        }
    }

    #[test]
    fn fixed_range_is_exact() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            DelayRange::fixed(2_000).sample(&mut rng),
            Duration::from_millis(2_000)
        );
    }

    #[test]
    fn stop_handle_is_shared() {
        let handle = StopHandle::new();
        let clone = handle.clone();
        assert!(!clone.is_stopped());
        handle.stop();
        assert!(clone.is_stopped());
    }
}
