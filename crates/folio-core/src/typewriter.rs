//! Typewriter text: the arrow callout and the journey flip cards.

use std::future::Future;
use std::time::Duration;

use crate::content::ARROW_PHRASE;
use crate::schedule::{DelayRange, Schedule};

/// Character cadence of the arrow callout
pub const ARROW_CHAR_DELAY: Duration = Duration::from_millis(80);
/// Pause between the trigger and the first typed character
pub const ARROW_LEAD_IN: Duration = Duration::from_millis(1_700);
/// The callout fades this long after typing completes
pub const ARROW_FADE_DELAY: Duration = Duration::from_secs(1);
/// Length of the fade-out transition
pub const ARROW_FADE_DURATION: Duration = Duration::from_millis(600);
/// Gap between the starts of consecutive plays
pub const ARROW_REPLAY_INTERVAL: DelayRange = DelayRange::new(8_000, 10_000);
/// While its section is in view the callout replays every 8-10s
pub const ARROW_REPLAY_SCHEDULE: Schedule =
    Schedule::every(DelayRange::fixed(0), ARROW_REPLAY_INTERVAL);

/// Character cadence of flip-card descriptions
pub const CARD_CHAR_DELAY: Duration = Duration::from_millis(50);

/// Reveals a fixed string one character at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Reveal one more character; returns false once everything is shown
    pub fn tick(&mut self) -> bool {
        if self.shown < self.chars.len() {
            self.shown += 1;
            true
        } else {
            false
        }
    }

    pub fn text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.chars.len()
    }

    pub fn clear(&mut self) {
        self.shown = 0;
    }
}

/// Stage of one arrow callout play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalloutPhase {
    #[default]
    Idle,
    /// Triggered, waiting out the lead-in
    Waiting,
    Typing,
    /// Fully typed, waiting to fade
    Shown,
    Fading,
}

impl CalloutPhase {
    pub fn class(&self) -> &'static str {
        match self {
            CalloutPhase::Idle => "arrow-callout",
            CalloutPhase::Waiting | CalloutPhase::Typing | CalloutPhase::Shown => {
                "arrow-callout visible"
            }
            CalloutPhase::Fading => "arrow-callout visible fading",
        }
    }
}

/// Guard against overlapping or too frequent callout plays.
///
/// Times are offsets on any monotonic clock; the page passes
/// milliseconds since load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Callout {
    phase: CalloutPhase,
    plays: u64,
    last_start: Option<Duration>,
}

impl Callout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a play at `now` unless one is running or the last one began
    /// less than the minimum replay gap ago
    pub fn try_begin(&mut self, now: Duration) -> bool {
        if self.phase != CalloutPhase::Idle || self.wait_at(now) > Duration::ZERO {
            return false;
        }
        self.phase = CalloutPhase::Waiting;
        self.plays += 1;
        self.last_start = Some(now);
        true
    }

    /// Time left at `now` before another play may start
    pub fn wait_at(&self, now: Duration) -> Duration {
        let min_gap = Duration::from_millis(ARROW_REPLAY_INTERVAL.min_ms);
        self.last_start
            .map(|start| (start + min_gap).saturating_sub(now))
            .unwrap_or(Duration::ZERO)
    }

    /// Replay cadence for a section that comes into view at `now`.
    ///
    /// The first play waits out whatever remains of the gap since the
    /// previous one, so leaving and re-entering never shortens it.
    pub fn replay_schedule(&self, now: Duration) -> Schedule {
        let wait = self.wait_at(now).as_millis() as u64;
        Schedule::every(DelayRange::fixed(wait), ARROW_REPLAY_INTERVAL)
    }

    pub fn set_phase(&mut self, phase: CalloutPhase) {
        self.phase = phase;
    }

    pub fn phase(&self) -> CalloutPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase != CalloutPhase::Idle
    }

    pub fn plays(&self) -> u64 {
        self.plays
    }
}

/// Type `text` one character per `char_delay`.
///
/// `show` receives each prefix after its delay and returns false to
/// abandon the rest. Returns whether the whole text was shown.
pub async fn type_out<S, Fut, F>(text: &str, char_delay: Duration, mut sleep: S, mut show: F) -> bool
where
    S: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
    F: FnMut(&str) -> bool,
{
    let mut writer = Typewriter::new(text);
    while writer.tick() {
        sleep(char_delay).await;
        if !show(&writer.text()) {
            return false;
        }
    }
    true
}

/// One full arrow callout play after [`Callout::try_begin`] succeeded.
///
/// Lead-in, typing, a hold and the fade, ending back at
/// [`CalloutPhase::Idle`] with the text cleared.
pub async fn play_callout<S, Fut, P, T>(mut sleep: S, mut phase: P, mut show: T)
where
    S: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
    P: FnMut(CalloutPhase),
    T: FnMut(&str),
{
    show("");
    sleep(ARROW_LEAD_IN).await;

    phase(CalloutPhase::Typing);
    type_out(ARROW_PHRASE, ARROW_CHAR_DELAY, &mut sleep, |text| {
        show(text);
        true
    })
    .await;

    phase(CalloutPhase::Shown);
    sleep(ARROW_FADE_DELAY).await;
    phase(CalloutPhase::Fading);
    sleep(ARROW_FADE_DURATION).await;

    show("");
    phase(CalloutPhase::Idle);
}

/// Result of clicking a flip card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flip {
    /// Now showing the back; type the description for this epoch
    ToBack { epoch: u64 },
    /// Now showing the front; text cleared at once
    ToFront,
}

/// Front/back state of one journey card.
///
/// Every flip bumps the epoch, so a typing loop started for an older
/// flip sees [`Self::is_current`] turn false and stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipCard {
    flipped: bool,
    epoch: u64,
}

impl FlipCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) -> Flip {
        self.flipped = !self.flipped;
        self.epoch += 1;
        if self.flipped {
            Flip::ToBack { epoch: self.epoch }
        } else {
            Flip::ToFront
        }
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.flipped && self.epoch == epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typewriter_reveals_in_order() {
        let mut tw = Typewriter::new("héy");
        assert_eq!(tw.text(), "");
        assert!(tw.tick());
        assert_eq!(tw.text(), "h");
        assert!(tw.tick());
        assert_eq!(tw.text(), "hé");
        assert!(tw.tick());
        assert!(tw.is_done());
        assert!(!tw.tick());
        assert_eq!(tw.text(), "héy");

        tw.clear();
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn callout_refuses_overlap() {
        let ms = Duration::from_millis;
        let mut callout = Callout::new();
        assert!(callout.try_begin(ms(0)));
        assert!(!callout.try_begin(ms(100)));

        callout.set_phase(CalloutPhase::Typing);
        assert!(!callout.try_begin(ms(9_000)));

        callout.set_phase(CalloutPhase::Idle);
        assert!(callout.try_begin(ms(9_000)));
        assert_eq!(callout.plays(), 2);
    }

    #[test]
    fn callout_holds_the_replay_gap_after_a_play_ends() {
        let ms = Duration::from_millis;
        let mut callout = Callout::new();
        assert!(callout.try_begin(ms(0)));
        callout.set_phase(CalloutPhase::Idle);

        assert!(!callout.try_begin(ms(5_000)));
        assert_eq!(callout.wait_at(ms(5_000)), ms(3_000));
        assert!(!callout.try_begin(ms(7_999)));
        assert!(callout.try_begin(ms(8_000)));
        assert_eq!(callout.plays(), 2);
    }

    #[test]
    fn replay_schedule_waits_out_the_remaining_gap() {
        let ms = Duration::from_millis;
        let mut callout = Callout::new();
        assert_eq!(callout.replay_schedule(ms(0)), ARROW_REPLAY_SCHEDULE);

        assert!(callout.try_begin(ms(1_000)));
        callout.set_phase(CalloutPhase::Idle);
        let schedule = callout.replay_schedule(ms(6_000));
        assert_eq!(schedule.initial, DelayRange::fixed(3_000));
        assert_eq!(schedule.interval, ARROW_REPLAY_INTERVAL);
        assert_eq!(callout.replay_schedule(ms(20_000)).initial, DelayRange::fixed(0));
    }

    #[test]
    fn callout_classes() {
        assert_eq!(CalloutPhase::Idle.class(), "arrow-callout");
        assert!(CalloutPhase::Typing.class().contains("visible"));
        assert!(CalloutPhase::Fading.class().ends_with("fading"));
    }

    #[test]
    fn flip_cycles_and_invalidates_typing() {
        let mut card = FlipCard::new();
        let Flip::ToBack { epoch } = card.toggle() else {
            panic!("first flip should show the back");
        };
        assert!(card.is_current(epoch));

        assert_eq!(card.toggle(), Flip::ToFront);
        assert!(!card.is_current(epoch));

        let Flip::ToBack { epoch: again } = card.toggle() else {
            panic!("third flip should show the back");
        };
        assert_ne!(epoch, again);
        assert!(!card.is_current(epoch));
        assert!(card.is_current(again));
    }

    #[test]
    fn cards_are_independent() {
        let mut a = FlipCard::new();
        let b = FlipCard::new();
        a.toggle();
        assert!(a.is_flipped());
        assert!(!b.is_flipped());
    }
}
