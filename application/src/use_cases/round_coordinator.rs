//! Round coordinator use case
//!
//! Owns the [`RoundState`] and [`HistoryLog`] behind a single mutex and runs
//! one driver task per round:
//!
//! ```text
//! submit_vote ──▶ lock ─┬─ record vote
//!                       └─ first vote? ──▶ spawn driver(round, anchor)
//!
//! driver: sleep_until(anchor + decision_delay) ──▶ evaluate_and_decide(round)
//!         sleep_until(anchor + total_duration) ──▶ reset_round(round)
//! ```
//!
//! The first-vote check and the driver spawn happen under the same lock
//! acquisition, so concurrent first votes start exactly one round. Both
//! deadlines hang off the same monotonic anchor; a late decision shortens
//! the wait before reset instead of pushing it back.

use crate::config::{CoordinatorConfig, MAX_ROUND_DURATION};
use crate::ports::clock::{Clock, SystemClock};
use crate::ports::round_observer::{NoRoundObserver, RoundObserver};
use chrono::{DateTime, Utc};
use lobby_domain::{
    DomainError, HistoryLog, RoundId, RoundOutcome, RoundPhase, RoundState, StatusLabel, Vote,
    VoteDisposition,
};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Errors returned to vote submitters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinatorError {
    #[error(transparent)]
    Rejected(#[from] DomainError),

    #[error("Coordinator is shut down")]
    ShutDown,
}

impl CoordinatorError {
    /// Check if the submission payload itself was invalid
    pub fn is_validation(&self) -> bool {
        matches!(self, CoordinatorError::Rejected(e) if e.is_validation())
    }

    /// Check if the vote arrived after the round was decided
    pub fn is_round_closed(&self) -> bool {
        matches!(self, CoordinatorError::Rejected(e) if e.is_round_closed())
    }
}

/// Acknowledgment of an accepted vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteReceipt {
    pub accepted: bool,
    /// Round the vote was counted in
    pub round: RoundId,
    /// Whether this vote opened the round
    pub started_round: bool,
    pub disposition: VoteDisposition,
}

/// Snapshot returned by [`RoundCoordinator::status`]
#[derive(Debug, Clone, Serialize)]
pub struct RoundStatus {
    /// `waiting`, `accept` or `reject`
    pub phase: StatusLabel,
    /// Round in progress, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundId>,
    /// Wall-clock time of the round's first vote
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_start: Option<DateTime<Utc>>,
    /// Votes of the current round, ordered by participant id
    pub votes: Vec<Vote>,
    /// Decided rounds, oldest first
    pub history: Vec<RoundOutcome>,
}

impl RoundStatus {
    pub fn is_waiting(&self) -> bool {
        self.phase == StatusLabel::Waiting
    }
}

/// Driver bookkeeping for the round in progress
struct ActiveRound {
    id: RoundId,
    driver: Option<JoinHandle<()>>,
}

struct CoordinatorState {
    round: RoundState,
    history: HistoryLog,
    active: Option<ActiveRound>,
}

/// Coordinates lobby rounds: collects votes, decides at the deadline,
/// records the outcome and resets for the next round.
///
/// Cloning is cheap; all clones share the same state. Vote submission
/// spawns onto the current Tokio runtime and must be called from within one.
#[derive(Clone)]
pub struct RoundCoordinator {
    state: Arc<Mutex<CoordinatorState>>,
    config: Arc<CoordinatorConfig>,
    clock: Arc<dyn Clock>,
    observer: Arc<dyn RoundObserver>,
    shutdown: CancellationToken,
}

impl RoundCoordinator {
    /// Create a coordinator using the system clock and no observer
    pub fn new(config: CoordinatorConfig) -> Self {
        let history = HistoryLog::with_limit(config.policy().effective_history_limit());

        Self {
            state: Arc::new(Mutex::new(CoordinatorState {
                round: RoundState::new(),
                history,
                active: None,
            })),
            config: Arc::new(config),
            clock: Arc::new(SystemClock),
            observer: Arc::new(NoRoundObserver),
            shutdown: CancellationToken::new(),
        }
    }

    /// Use a different wall clock for vote and decision timestamps
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Report lifecycle events to `observer`
    pub fn with_observer(mut self, observer: Arc<dyn RoundObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    // ==================== Submit ====================

    /// Submit (or overwrite) `participant_id`'s vote for `lobby_id`
    ///
    /// Returns as soon as the vote is recorded; the decision happens later
    /// on the round driver.
    pub fn submit_vote(
        &self,
        participant_id: &str,
        lobby_id: &str,
    ) -> Result<VoteReceipt, CoordinatorError> {
        if self.shutdown.is_cancelled() {
            return Err(CoordinatorError::ShutDown);
        }

        let vote = match Vote::new(participant_id, lobby_id, self.clock.now()) {
            Ok(vote) => vote,
            Err(e) => {
                warn!("Rejected vote from '{}': {}", participant_id, e);
                return Err(e.into());
            }
        };
        let recorded = vote.clone();

        let admission = {
            let mut state = self.lock();
            let admission = match state
                .round
                .record_vote(vote, self.config.policy().late_votes)
            {
                Ok(admission) => admission,
                Err(e) => {
                    warn!("Rejected vote from '{}': {}", participant_id, e);
                    return Err(e.into());
                }
            };

            if admission.started_round() {
                let anchor = Instant::now();
                let driver = tokio::spawn(self.clone().drive_round(admission.round, anchor));
                state.active = Some(ActiveRound {
                    id: admission.round,
                    driver: Some(driver),
                });
            }

            admission
        };

        if admission.started_round() {
            info!(
                "Round {} started by '{}' (decision in {:?}, reset in {:?})",
                admission.round,
                recorded.participant_id,
                self.config.timings().decision_delay,
                self.config.timings().reset_after()
            );
            self.observer.on_round_started(admission.round, &recorded);
        } else {
            debug!(
                "Vote from '{}' for lobby '{}' {:?} in round {}",
                recorded.participant_id, recorded.lobby_id, admission.disposition, admission.round
            );
        }
        self.observer
            .on_vote_recorded(admission.round, &recorded, admission.disposition);

        Ok(VoteReceipt {
            accepted: true,
            round: admission.round,
            started_round: admission.started_round(),
            disposition: admission.disposition,
        })
    }

    // ==================== Deadlines ====================

    /// Decide `round` at its decision deadline
    ///
    /// Called by the round driver; calling it again for the same round (or
    /// for a round that is not in progress) returns `None` and changes
    /// nothing.
    pub fn evaluate_and_decide(&self, round: RoundId) -> Option<RoundOutcome> {
        let decided_at = self.clock.now();

        let (outcome, recorded) = {
            let mut state = self.lock();
            let Some(outcome) = state.round.decide(round, self.config.policy(), decided_at) else {
                debug!("Skipping decision for round {}: not collecting", round);
                return None;
            };

            let recorded = self.config.policy().records(outcome.is_accepted());
            if recorded && let Some(evicted) = state.history.append(outcome.clone()) {
                debug!("History full, dropped round {}", evicted.round);
            }
            (outcome, recorded)
        };

        info!(
            "Round {} decided: {} (lobby: {}, recorded: {})",
            round,
            outcome.result,
            outcome.lobby_id.as_deref().unwrap_or("-"),
            recorded
        );
        self.observer.on_round_decided(&outcome);

        Some(outcome)
    }

    /// Clear `round` at its reset deadline, whatever its outcome
    ///
    /// Returns `false` if `round` is not the round in progress or has not
    /// been decided yet.
    pub fn reset_round(&self, round: RoundId) -> bool {
        let reset = {
            let mut state = self.lock();
            let reset = state.round.reset(round);
            if reset {
                state.active = None;
            }
            reset
        };

        if reset {
            info!("Round {} reset, waiting for votes", round);
            self.observer.on_round_reset(round);
        } else {
            debug!("Skipping reset for round {}: not active", round);
        }

        reset
    }

    async fn drive_round(self, round: RoundId, anchor: Instant) {
        let timings = *self.config.timings();

        tokio::select! {
            _ = self.shutdown.cancelled() => {
                debug!("Round {} driver cancelled before decision", round);
                return;
            }
            _ = sleep_until(Self::deadline(anchor, timings.decision_delay, round)) => {}
        }
        self.evaluate_and_decide(round);

        // Anchored to the first vote, so a late decision shortens this wait.
        tokio::select! {
            _ = self.shutdown.cancelled() => {
                debug!("Round {} driver cancelled before reset", round);
                return;
            }
            _ = sleep_until(Self::deadline(anchor, timings.reset_after(), round)) => {}
        }
        self.reset_round(round);
    }

    /// `anchor + after`, clamped to the longest supported deadline
    fn deadline(anchor: Instant, after: Duration, round: RoundId) -> Instant {
        let after = if after > MAX_ROUND_DURATION {
            error!(
                "Round {} deadline {:?} exceeds {:?}; clamping",
                round, after, MAX_ROUND_DURATION
            );
            MAX_ROUND_DURATION
        } else {
            after
        };

        anchor.checked_add(after).unwrap_or_else(|| {
            error!("Round {} deadline is not representable; firing now", round);
            anchor
        })
    }

    // ==================== Observe ====================

    /// Snapshot of the phase label, current votes and history
    pub fn status(&self) -> RoundStatus {
        let state = self.lock();
        RoundStatus {
            phase: state.round.phase().label(),
            round: state.round.round(),
            round_start: state.round.round_start(),
            votes: state.round.votes().cloned().collect(),
            history: state.history.snapshot(),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.lock().round.phase()
    }

    /// Round whose driver is currently scheduled
    pub fn active_round(&self) -> Option<RoundId> {
        self.lock().active.as_ref().map(|active| active.id)
    }

    /// Number of rounds started since the coordinator was created
    pub fn rounds_started(&self) -> u64 {
        self.lock().round.last_round().map_or(0, |round| round.value())
    }

    pub fn history(&self) -> Vec<RoundOutcome> {
        self.lock().history.snapshot()
    }

    // ==================== Shutdown ====================

    /// Stop the active round driver and refuse further votes
    ///
    /// The in-progress round (if any) is left as it is; nothing else fires.
    pub async fn shutdown(&self) {
        self.shutdown.cancel();

        let driver = self
            .lock()
            .active
            .as_mut()
            .and_then(|active| active.driver.take());

        if let Some(driver) = driver
            && let Err(e) = driver.await
        {
            warn!("Round driver join error: {}", e);
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    fn lock(&self) -> MutexGuard<'_, CoordinatorState> {
        // State transitions never panic halfway, so a poisoned lock still
        // guards consistent data.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
