//! Timer-driven reveal for a shared editor session.

use super::sequencer::{RevealPhase, RevealStep};
use crate::editor::SharedSession;
use crate::timer::{TickOutcome, TimerDriver};
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_tick_interval() -> Duration {
    Duration::from_millis(900)
}

fn default_settle_delay() -> Duration {
    Duration::from_millis(1200)
}

/// Timing configuration for the reveal driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Delay between reveal ticks.
    #[serde(default = "default_tick_interval")]
    pub tick_interval: Duration,
    /// Delay between the last reveal and the completion transition.
    #[serde(default = "default_settle_delay")]
    pub settle_delay: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            tick_interval: default_tick_interval(),
            settle_delay: default_settle_delay(),
        }
    }
}

/// Drives a session's reveal sequencer on a fixed cadence.
///
/// The driver advances the sequence every `tick_interval`, switches to
/// `settle_delay` once all rows are visible, and stops on its own after
/// the completion transition. Cancelling (or dropping) the driver clears
/// the pending timer; the sequencer stays wherever it was.
#[derive(Debug)]
pub struct RevealDriver {
    inner: TimerDriver,
}

impl RevealDriver {
    /// Spawns a driver over a shared session.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(session: SharedSession, config: RevealConfig) -> Self {
        let settle_delay = config.settle_delay;
        let inner = TimerDriver::spawn(config.tick_interval, move || {
            let mut session = session.lock();
            let step = session.advance_reveal();
            let phase = session.reveal().phase();
            drop(session);

            match step {
                RevealStep::Completed => TickOutcome::Stop,
                RevealStep::Revealed { .. } | RevealStep::Noop => match phase {
                    RevealPhase::Settling => TickOutcome::ContinueAfter(settle_delay),
                    RevealPhase::Revealing => TickOutcome::Continue,
                    RevealPhase::Idle | RevealPhase::Complete => TickOutcome::Stop,
                },
            }
        });

        Self { inner }
    }

    /// Cancels the driver, clearing any pending timer.
    pub fn cancel(&self, reason: impl Into<String>) {
        self.inner.cancel(reason);
    }

    /// Returns whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.is_cancelled()
    }

    /// Returns whether the driver task has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RevealConfig::default();
        assert_eq!(config.tick_interval, Duration::from_millis(900));
        assert_eq!(config.settle_delay, Duration::from_millis(1200));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: RevealConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RevealConfig::default());
    }
}
