//! Live counter state machine.
//!
//! A `CounterSession` owns the count for one open item. It is ephemeral:
//! created when the item is opened, dropped when the user navigates back,
//! never persisted. The session performs no side effects itself: each
//! increment reports which feedback signals became due, and the caller
//! decides what (if anything) to do with them.

use crate::model::item::{Direction, Item, ItemId};

/// Near-end distance used when an item does not carry its own threshold.
pub const DEFAULT_VIBRATE_THRESHOLD: i64 = 3;

/// Feedback that became due on an increment.
///
/// `near_end` may fire on every tap while the remaining count sits within
/// the threshold; `completed` fires exactly once per session, on the
/// not-complete → complete edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signals {
    pub near_end: bool,
    pub completed: bool,
}

/// Live counting state for one open item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSession {
    item_id: ItemId,
    display_text: String,
    title: String,
    target: Option<i64>,
    start_value: i64,
    direction: Direction,
    vibrate_near_end: bool,
    sound_on_complete: bool,
    vibrate_threshold: i64,
    current_value: i64,
    is_complete: bool,
}

impl CounterSession {
    /// Open a counting session for an item, snapshotting its counting
    /// parameters. A non-positive target is treated as absent: the session
    /// then never completes counting up and reports no progress.
    pub fn open(item: &Item) -> Self {
        let target = item.target.filter(|t| *t > 0);
        let start_value = match item.direction {
            Direction::Down => target.unwrap_or(item.start_value),
            Direction::Up => item.start_value,
        };
        let mut session = CounterSession {
            item_id: item.id,
            display_text: item.display_text.clone(),
            title: item.title.clone(),
            target,
            start_value,
            direction: item.direction,
            vibrate_near_end: item.vibrate_near_end,
            sound_on_complete: item.sound_on_complete,
            vibrate_threshold: item.vibrate_threshold.unwrap_or(DEFAULT_VIBRATE_THRESHOLD),
            current_value: start_value,
            is_complete: false,
        };
        // A session that starts at its end state is complete from the
        // first frame; the completion edge has then already passed.
        session.is_complete = session.at_end();
        session
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn current_value(&self) -> i64 {
        self.current_value
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn sound_on_complete(&self) -> bool {
        self.sound_on_complete
    }

    /// Distance left to completion. None while counting up without a
    /// target (nothing to be near).
    pub fn remaining(&self) -> Option<i64> {
        match self.direction {
            Direction::Down => Some(self.current_value),
            Direction::Up => self.target.map(|t| t - self.current_value),
        }
    }

    /// 0.0 .. 100.0 progress toward the target; 0.0 when the target is
    /// absent (nothing to divide by). Exactly 100.0 at the completing
    /// increment.
    pub fn progress_percent(&self) -> f64 {
        let Some(target) = self.target else {
            return 0.0;
        };
        match self.direction {
            Direction::Down => (target - self.current_value) as f64 / target as f64 * 100.0,
            Direction::Up => self.current_value as f64 / target as f64 * 100.0,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Advance the count by one step. A completed session ignores further
    /// taps. The near-end check runs on the post-step value, so the
    /// completing tap can report both signals at once.
    pub fn increment(&mut self) -> Signals {
        if self.is_complete {
            return Signals::default();
        }

        self.current_value += match self.direction {
            Direction::Down => -1,
            Direction::Up => 1,
        };

        let near_end = self.vibrate_near_end
            && self
                .remaining()
                .is_some_and(|r| r <= self.vibrate_threshold);

        let completed = self.at_end();
        if completed {
            self.is_complete = true;
        }

        Signals { near_end, completed }
    }

    /// Back to the open-time start value; the completion edge may fire
    /// again afterwards. The underlying item is untouched.
    pub fn reset(&mut self) {
        self.current_value = self.start_value;
        self.is_complete = false;
    }

    fn at_end(&self) -> bool {
        match self.direction {
            Direction::Down => self.current_value <= 0,
            Direction::Up => self.target.is_some_and(|t| self.current_value >= t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::{ItemDraft, ResetPeriod};

    fn item(direction: Direction, target: Option<i64>, threshold: Option<i64>) -> Item {
        let draft = ItemDraft {
            title: "Test".into(),
            target,
            direction,
            vibrate_threshold: threshold,
            ..ItemDraft::default()
        };
        draft.into_item(7, "2026-08-06")
    }

    #[test]
    fn up_count_completes_at_target_and_then_ignores_taps() {
        let mut session = CounterSession::open(&item(Direction::Up, Some(33), Some(3)));
        assert_eq!(session.current_value(), 0);

        for n in 1..33 {
            let signals = session.increment();
            assert!(!signals.completed, "completed early at {n}");
        }
        let signals = session.increment();
        assert!(signals.completed);
        assert!(session.is_complete());
        assert_eq!(session.current_value(), 33);

        // 34th tap: idempotent no-op.
        let signals = session.increment();
        assert_eq!(signals, Signals::default());
        assert_eq!(session.current_value(), 33);
    }

    #[test]
    fn down_count_opens_at_target_and_completes_at_zero() {
        let mut session = CounterSession::open(&item(Direction::Down, Some(5), Some(0)));
        assert_eq!(session.current_value(), 5);

        for _ in 0..4 {
            assert!(!session.increment().completed);
        }
        let signals = session.increment();
        assert!(signals.completed);
        assert_eq!(session.current_value(), 0);
        assert!(session.is_complete());
    }

    #[test]
    fn completion_edge_fires_once() {
        let mut session = CounterSession::open(&item(Direction::Up, Some(2), None));
        session.increment();
        assert!(session.increment().completed);
        assert!(!session.increment().completed);
        assert!(!session.increment().completed);
    }

    #[test]
    fn progress_is_monotone_and_hits_exactly_100() {
        let mut session = CounterSession::open(&item(Direction::Up, Some(33), None));
        let mut last = session.progress_percent();
        for _ in 0..33 {
            session.increment();
            let now = session.progress_percent();
            assert!(now >= last);
            last = now;
        }
        assert_eq!(session.progress_percent(), 100.0);

        let mut down = CounterSession::open(&item(Direction::Down, Some(4), None));
        assert_eq!(down.progress_percent(), 0.0);
        for _ in 0..4 {
            down.increment();
        }
        assert_eq!(down.progress_percent(), 100.0);
    }

    #[test]
    fn absent_target_means_no_progress_and_no_completion() {
        let mut session = CounterSession::open(&item(Direction::Up, None, Some(3)));
        for _ in 0..200 {
            let signals = session.increment();
            assert!(!signals.completed);
            assert!(!signals.near_end);
            assert_eq!(session.progress_percent(), 0.0);
        }
        assert_eq!(session.current_value(), 200);
        assert!(!session.is_complete());
    }

    #[test]
    fn near_end_fires_inside_threshold_when_enabled() {
        let mut session = CounterSession::open(&item(Direction::Up, Some(10), Some(3)));
        let mut fired_at = Vec::new();
        for value in 1..=10 {
            if session.increment().near_end {
                fired_at.push(value);
            }
        }
        // remaining <= 3 holds at values 7, 8, 9, 10.
        assert_eq!(fired_at, vec![7, 8, 9, 10]);
    }

    #[test]
    fn near_end_never_fires_when_disabled() {
        let mut quiet = item(Direction::Up, Some(5), Some(3));
        quiet.vibrate_near_end = false;
        let mut session = CounterSession::open(&quiet);
        for _ in 0..5 {
            assert!(!session.increment().near_end);
        }
    }

    #[test]
    fn threshold_defaults_to_three() {
        let mut no_threshold = item(Direction::Up, Some(5), None);
        no_threshold.vibrate_threshold = None;
        let mut session = CounterSession::open(&no_threshold);
        let fired: Vec<bool> = (0..5).map(|_| session.increment().near_end).collect();
        assert_eq!(fired, vec![false, true, true, true, true]);
    }

    #[test]
    fn reset_restores_start_and_rearms_completion() {
        let mut session = CounterSession::open(&item(Direction::Up, Some(3), None));
        for _ in 0..3 {
            session.increment();
        }
        assert!(session.is_complete());

        session.reset();
        assert_eq!(session.current_value(), 0);
        assert!(!session.is_complete());

        session.increment();
        session.increment();
        assert!(session.increment().completed);
    }

    #[test]
    fn completing_tap_can_carry_both_signals() {
        let mut session = CounterSession::open(&item(Direction::Up, Some(2), Some(3)));
        session.increment();
        let signals = session.increment();
        assert!(signals.completed);
        assert!(signals.near_end);
    }

    #[test]
    fn reset_period_does_not_affect_counting() {
        let mut weekly = item(Direction::Up, Some(2), None);
        weekly.reset_period = ResetPeriod::Weekly;
        let mut session = CounterSession::open(&weekly);
        session.increment();
        assert!(session.increment().completed);
    }
}
