//! Round timings: deadline control for the coordinator.
//!
//! [`RoundTimings`] groups the two deadlines of a round. Both are measured
//! from the same anchor (the first vote of the round), never from later
//! votes. These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default seconds from round start to decision
pub const DEFAULT_DECISION_DELAY: Duration = Duration::from_secs(10);

/// Default seconds from round start to reset
pub const DEFAULT_TOTAL_ROUND_DURATION: Duration = Duration::from_secs(17);

/// Longest supported deadline, measured from round start
pub const MAX_ROUND_DURATION: Duration = Duration::from_secs(24 * 60 * 60);

/// Deadline parameters of a round.
///
/// | Deadline | Measured from | Effect |
/// |----------|---------------|--------|
/// | `decision_delay` | first vote | votes evaluated, `accept`/`reject` shown |
/// | `total_round_duration` | first vote | state cleared back to `waiting` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTimings {
    /// Time from round start to the decision.
    pub decision_delay: Duration,
    /// Time from round start to the reset (never earlier than the decision).
    pub total_round_duration: Duration,
}

impl Default for RoundTimings {
    fn default() -> Self {
        Self {
            decision_delay: DEFAULT_DECISION_DELAY,
            total_round_duration: DEFAULT_TOTAL_ROUND_DURATION,
        }
    }
}

impl RoundTimings {
    pub fn new(decision_delay: Duration, total_round_duration: Duration) -> Self {
        Self {
            decision_delay,
            total_round_duration,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_decision_delay(mut self, delay: Duration) -> Self {
        self.decision_delay = delay;
        self
    }

    pub fn with_total_round_duration(mut self, total: Duration) -> Self {
        self.total_round_duration = total;
        self
    }

    /// Time from round start to reset, clamped so reset never precedes the decision
    pub fn reset_after(&self) -> Duration {
        self.total_round_duration.max(self.decision_delay)
    }

    /// How long the decided status stays visible before reset
    pub fn display_window(&self) -> Duration {
        self.reset_after() - self.decision_delay
    }
}
