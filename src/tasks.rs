//! Repeating effect tasks owned by components.

use dioxus::prelude::*;
use folio_core::schedule::{self, Schedule};
use folio_core::StopHandle;

use crate::context::SharedRng;
use crate::dom;

/// A randomized repeating task running on the Dioxus scheduler.
///
/// Stopping raises the shared flag and cancels the task, so a tick that
/// was already waiting on a timer never fires.
#[derive(Clone)]
pub struct RepeatingTask {
    stop: StopHandle,
    task: Task,
}

impl RepeatingTask {
    pub fn spawn(schedule: Schedule, rng: SharedRng, tick: impl FnMut() + 'static) -> Self {
        let stop = StopHandle::new();
        let task = spawn(schedule::run(
            schedule,
            stop.clone(),
            move |range| rng.with(|r| range.sample(r)),
            dom::sleep,
            tick,
        ));
        Self { stop, task }
    }

    pub fn stop(&self) {
        self.stop.stop();
        self.task.cancel();
    }
}
