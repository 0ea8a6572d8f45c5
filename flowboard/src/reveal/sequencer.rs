//! The reveal state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of the reveal sequence.
///
/// `Idle → Revealing → Settling → Complete`; `Complete` is terminal and
/// is entered exactly once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    /// No generation in progress; everything is visible.
    Idle,
    /// Rows are being revealed one per tick.
    Revealing,
    /// All rows visible; waiting out the settling delay.
    Settling,
    /// Generation finished. Terminal.
    Complete,
}

impl Default for RevealPhase {
    fn default() -> Self {
        Self::Idle
    }
}

impl fmt::Display for RevealPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Revealing => write!(f, "revealing"),
            Self::Settling => write!(f, "settling"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// The row at `position` (render order) became visible.
    Revealed {
        /// Render-order position of the newly visible row.
        position: usize,
    },
    /// The settling delay elapsed and generation completed.
    Completed,
    /// The tick had no effect (not generating, or already complete).
    Noop,
}

/// Counts revealed rows while a flow is being generated.
///
/// The counter starts at 0 and increments by exactly 1 per tick, never
/// exceeding the total row count. Reaching the total moves the sequence
/// into `Settling`; one further tick completes it. Consuming views
/// translate the counter into per-position visibility via
/// [`is_revealed`](Self::is_revealed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealSequencer {
    total: usize,
    counter: usize,
    phase: RevealPhase,
}

impl RevealSequencer {
    /// Creates an idle sequencer over the given row count.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            counter: 0,
            phase: RevealPhase::Idle,
        }
    }

    /// The total row count.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// The current counter value.
    #[must_use]
    pub fn counter(&self) -> usize {
        self.counter
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// True while rows are still being revealed or settling.
    #[must_use]
    pub fn is_generating(&self) -> bool {
        matches!(self.phase, RevealPhase::Revealing | RevealPhase::Settling)
    }

    /// True once the sequence has reached its terminal phase.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == RevealPhase::Complete
    }

    /// Whether the row at render position `i` is visible.
    ///
    /// Outside a generation run everything is visible.
    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        match self.phase {
            RevealPhase::Idle | RevealPhase::Complete => true,
            RevealPhase::Revealing | RevealPhase::Settling => self.counter > position,
        }
    }

    /// Render position of the next unrevealed row, if any.
    #[must_use]
    pub fn next_position(&self) -> Option<usize> {
        if self.is_generating() && self.counter < self.total {
            Some(self.counter)
        } else {
            None
        }
    }

    /// Starts (or restarts) the sequence, resetting the counter.
    ///
    /// An empty collection skips straight to `Settling`, so the run still
    /// completes through the settling delay.
    pub fn start(&mut self) {
        self.counter = 0;
        self.phase = if self.total == 0 {
            RevealPhase::Settling
        } else {
            RevealPhase::Revealing
        };
    }

    /// Advances the sequence by one tick.
    ///
    /// Ticking an `Idle` or `Complete` sequencer is a no-op; the terminal
    /// phase is never re-entered.
    pub fn tick(&mut self) -> RevealStep {
        match self.phase {
            RevealPhase::Idle | RevealPhase::Complete => RevealStep::Noop,
            RevealPhase::Revealing => {
                if self.counter < self.total {
                    self.counter += 1;
                    let position = self.counter - 1;
                    if self.counter == self.total {
                        self.phase = RevealPhase::Settling;
                    }
                    RevealStep::Revealed { position }
                } else {
                    self.phase = RevealPhase::Settling;
                    RevealStep::Noop
                }
            }
            RevealPhase::Settling => {
                self.phase = RevealPhase::Complete;
                RevealStep::Completed
            }
        }
    }

    /// Notes that a row was appended to the collection.
    ///
    /// After completion the counter grows in lockstep so the new row is
    /// immediately visible; mid-settling the sequence drops back to
    /// `Revealing` so the new row is revealed on the next tick.
    pub fn stage_appended(&mut self) {
        self.total += 1;
        match self.phase {
            RevealPhase::Complete => self.counter += 1,
            RevealPhase::Settling => self.phase = RevealPhase::Revealing,
            RevealPhase::Idle | RevealPhase::Revealing => {}
        }
    }

    /// Notes that a row was removed from the collection, clamping the
    /// counter.
    pub fn stage_removed(&mut self) {
        self.total = self.total.saturating_sub(1);
        self.counter = self.counter.min(self.total);
        if self.phase == RevealPhase::Revealing && self.counter >= self.total {
            self.phase = RevealPhase::Settling;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_sequencer_reveals_everything() {
        let sequencer = RevealSequencer::new(4);
        assert_eq!(sequencer.phase(), RevealPhase::Idle);
        assert!(!sequencer.is_generating());
        assert!(sequencer.is_revealed(0));
        assert!(sequencer.is_revealed(3));
    }

    #[test]
    fn test_tick_idle_is_noop() {
        let mut sequencer = RevealSequencer::new(4);
        assert_eq!(sequencer.tick(), RevealStep::Noop);
        assert_eq!(sequencer.counter(), 0);
    }

    #[test]
    fn test_counter_monotonic_and_bounded() {
        let mut sequencer = RevealSequencer::new(3);
        sequencer.start();

        let mut last = 0;
        for _ in 0..10 {
            sequencer.tick();
            assert!(sequencer.counter() >= last);
            assert!(sequencer.counter() <= sequencer.total());
            last = sequencer.counter();
        }
        assert_eq!(sequencer.counter(), 3);
    }

    #[test]
    fn test_reveal_gating_per_position() {
        let mut sequencer = RevealSequencer::new(3);
        sequencer.start();
        assert!(!sequencer.is_revealed(0));

        assert_eq!(sequencer.tick(), RevealStep::Revealed { position: 0 });
        assert!(sequencer.is_revealed(0));
        assert!(!sequencer.is_revealed(1));
        assert_eq!(sequencer.next_position(), Some(1));
    }

    #[test]
    fn test_completes_exactly_once() {
        let mut sequencer = RevealSequencer::new(2);
        sequencer.start();

        let mut completions = 0;
        for _ in 0..10 {
            if sequencer.tick() == RevealStep::Completed {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert!(sequencer.is_complete());
        assert!(!sequencer.is_generating());
    }

    #[test]
    fn test_empty_total_settles_then_completes() {
        let mut sequencer = RevealSequencer::new(0);
        sequencer.start();
        assert_eq!(sequencer.phase(), RevealPhase::Settling);
        assert_eq!(sequencer.tick(), RevealStep::Completed);
    }

    #[test]
    fn test_append_after_complete_stays_visible() {
        let mut sequencer = RevealSequencer::new(1);
        sequencer.start();
        sequencer.tick();
        sequencer.tick();
        assert!(sequencer.is_complete());

        sequencer.stage_appended();
        assert!(sequencer.is_complete());
        assert_eq!(sequencer.counter(), sequencer.total());
        assert!(sequencer.is_revealed(1));
    }

    #[test]
    fn test_append_during_settling_reenters_revealing() {
        let mut sequencer = RevealSequencer::new(1);
        sequencer.start();
        sequencer.tick();
        assert_eq!(sequencer.phase(), RevealPhase::Settling);

        sequencer.stage_appended();
        assert_eq!(sequencer.phase(), RevealPhase::Revealing);
        assert_eq!(sequencer.tick(), RevealStep::Revealed { position: 1 });
    }

    #[test]
    fn test_append_during_revealing_extends_run() {
        let mut sequencer = RevealSequencer::new(2);
        sequencer.start();
        sequencer.tick();
        sequencer.stage_appended();

        assert_eq!(sequencer.total(), 3);
        assert_eq!(sequencer.counter(), 1);
        assert_eq!(sequencer.phase(), RevealPhase::Revealing);
    }

    #[test]
    fn test_remove_clamps_counter() {
        let mut sequencer = RevealSequencer::new(3);
        sequencer.start();
        sequencer.tick();
        sequencer.tick();

        sequencer.stage_removed();
        sequencer.stage_removed();
        assert_eq!(sequencer.total(), 1);
        assert_eq!(sequencer.counter(), 1);
        assert_eq!(sequencer.phase(), RevealPhase::Settling);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(RevealPhase::Idle.to_string(), "idle");
        assert_eq!(RevealPhase::Revealing.to_string(), "revealing");
        assert_eq!(RevealPhase::Settling.to_string(), "settling");
        assert_eq!(RevealPhase::Complete.to_string(), "complete");
    }
}
