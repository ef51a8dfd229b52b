//! Round state machine
//!
//! ```text
//! Idle --(first vote)--> Collecting --(decision deadline)--> Decided
//!   ^                                                           |
//!   +-------------------(reset deadline)------------------------+
//! ```
//!
//! [`RoundState`] is a plain, synchronous state machine. It knows nothing
//! about timers or locking; the coordinator in the application layer owns
//! it behind a mutex and drives the deadline transitions.

use super::outcome::{RoundId, RoundOutcome, RoundResult, StatusLabel};
use super::policy::{LateVotePolicy, RoundPolicy};
use super::vote::Vote;
use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Phase of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round in progress
    Idle,
    /// First vote received, waiting for the decision deadline
    Collecting,
    /// Decision taken, waiting for the reset deadline
    Decided(RoundResult),
}

impl RoundPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, RoundPhase::Idle)
    }

    pub fn is_collecting(&self) -> bool {
        matches!(self, RoundPhase::Collecting)
    }

    pub fn is_decided(&self) -> bool {
        matches!(self, RoundPhase::Decided(_))
    }

    /// Label shown to clients
    pub fn label(&self) -> StatusLabel {
        match self {
            RoundPhase::Idle | RoundPhase::Collecting => StatusLabel::Waiting,
            RoundPhase::Decided(result) => StatusLabel::from(*result),
        }
    }
}

/// How a submitted vote was taken into the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteDisposition {
    /// First vote of a new round
    StartedRound,
    /// New participant in a collecting round
    Recorded,
    /// Same participant voted again; the earlier vote was overwritten
    Replaced,
    /// Stored after the decision without affecting the outcome
    Absorbed,
}

/// Result of admitting a vote into the round state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteAdmission {
    pub round: RoundId,
    pub disposition: VoteDisposition,
}

impl VoteAdmission {
    /// Whether this vote opened the round (and its deadlines must be scheduled)
    pub fn started_round(&self) -> bool {
        self.disposition == VoteDisposition::StartedRound
    }
}

/// A round that has received at least one vote
#[derive(Debug, Clone)]
struct OpenRound {
    id: RoundId,
    started_at: DateTime<Utc>,
    votes: BTreeMap<String, Vote>,
    decision: Option<RoundResult>,
}

/// Mutable record of the in-progress round
///
/// Invariants (enforced by construction):
/// - `round_start()` is `Some` iff the phase is `Collecting` or `Decided`
/// - `votes()` is empty iff the phase is `Idle`
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    open: Option<OpenRound>,
    last_round: Option<RoundId>,
}

impl RoundState {
    /// Create an idle state (process start)
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Accessors ====================

    pub fn phase(&self) -> RoundPhase {
        match &self.open {
            None => RoundPhase::Idle,
            Some(OpenRound { decision: None, .. }) => RoundPhase::Collecting,
            Some(OpenRound {
                decision: Some(result),
                ..
            }) => RoundPhase::Decided(*result),
        }
    }

    /// Identity of the round in progress
    pub fn round(&self) -> Option<RoundId> {
        self.open.as_ref().map(|open| open.id)
    }

    /// Wall-clock time of the round's first vote
    pub fn round_start(&self) -> Option<DateTime<Utc>> {
        self.open.as_ref().map(|open| open.started_at)
    }

    /// Identity of the most recently started round, even after reset
    pub fn last_round(&self) -> Option<RoundId> {
        self.last_round
    }

    /// Votes of the current round, ordered by participant id
    pub fn votes(&self) -> impl Iterator<Item = &Vote> {
        self.open.iter().flat_map(|open| open.votes.values())
    }

    pub fn vote_count(&self) -> usize {
        self.open.as_ref().map_or(0, |open| open.votes.len())
    }

    pub fn vote_of(&self, participant_id: &str) -> Option<&Vote> {
        self.open.as_ref()?.votes.get(participant_id)
    }

    // ==================== Transitions ====================

    /// Admit a vote into the current round
    ///
    /// The first vote while idle opens a new round whose start time is the
    /// vote's `submitted_at`. A repeated vote from the same participant
    /// overwrites the earlier one. Votes after the decision are handled
    /// according to `late_votes`.
    pub fn record_vote(
        &mut self,
        vote: Vote,
        late_votes: LateVotePolicy,
    ) -> Result<VoteAdmission, DomainError> {
        let Some(open) = self.open.as_mut() else {
            let id = self.last_round.map_or(RoundId::FIRST, |last| last.next());
            let mut votes = BTreeMap::new();
            let started_at = vote.submitted_at;
            votes.insert(vote.participant_id.clone(), vote);

            self.open = Some(OpenRound {
                id,
                started_at,
                votes,
                decision: None,
            });
            self.last_round = Some(id);

            return Ok(VoteAdmission {
                round: id,
                disposition: VoteDisposition::StartedRound,
            });
        };

        let disposition = match (open.decision, late_votes) {
            (Some(_), LateVotePolicy::Reject) => {
                return Err(DomainError::RoundClosed { round: open.id });
            }
            (Some(_), LateVotePolicy::Absorb) => VoteDisposition::Absorbed,
            (None, _) if open.votes.contains_key(&vote.participant_id) => {
                VoteDisposition::Replaced
            }
            (None, _) => VoteDisposition::Recorded,
        };

        open.votes.insert(vote.participant_id.clone(), vote);

        Ok(VoteAdmission {
            round: open.id,
            disposition,
        })
    }

    /// Decide `round` using `policy`
    ///
    /// Returns `None` (and changes nothing) unless `round` is the current
    /// round and it is still collecting, so a second call for the same
    /// round is a no-op.
    pub fn decide(
        &mut self,
        round: RoundId,
        policy: &RoundPolicy,
        decided_at: DateTime<Utc>,
    ) -> Option<RoundOutcome> {
        let open = self.open.as_mut()?;
        if open.id != round || open.decision.is_some() {
            return None;
        }

        let outcome = match policy.agreed_lobby(open.votes.values()) {
            Some(lobby) => RoundOutcome::accepted(round, lobby, decided_at),
            None => RoundOutcome::rejected(round, decided_at),
        };
        open.decision = Some(outcome.result);

        Some(outcome)
    }

    /// Clear a decided `round` back to idle, regardless of its outcome
    ///
    /// Returns `false` if `round` is not the current round or has not been
    /// decided yet.
    pub fn reset(&mut self, round: RoundId) -> bool {
        match &self.open {
            Some(open) if open.id == round && open.decision.is_some() => {
                self.open = None;
                true
            }
            _ => false,
        }
    }
}
