//! Round policy and quorum evaluation
//!
//! This module defines the rules used to decide a round once its decision
//! deadline has passed.

use super::vote::Vote;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default quorum size (number of PCs that must agree)
pub const DEFAULT_REQUIRED_VOTERS: usize = 4;

/// Which decided rounds are appended to the history log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Only accepted rounds (a game actually started)
    #[default]
    Accepted,
    /// Every decided round, accepted or rejected
    All,
}

impl HistoryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryMode::Accepted => "accepted",
            HistoryMode::All => "all",
        }
    }
}

impl std::fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HistoryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accepted" | "accepted_only" => Ok(HistoryMode::Accepted),
            "all" => Ok(HistoryMode::All),
            _ => Err(format!("Unknown history mode: {}. Valid: accepted, all", s)),
        }
    }
}

/// What happens to votes that arrive after the decision but before reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LateVotePolicy {
    /// Refuse the vote with `RoundClosed`; state is untouched
    #[default]
    Reject,
    /// Store the vote in the decided round without re-evaluating it
    Absorb,
}

impl LateVotePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LateVotePolicy::Reject => "reject",
            LateVotePolicy::Absorb => "absorb",
        }
    }
}

impl std::fmt::Display for LateVotePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LateVotePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(LateVotePolicy::Reject),
            "absorb" | "ignore" => Ok(LateVotePolicy::Absorb),
            _ => Err(format!(
                "Unknown late vote policy: {}. Valid: reject, absorb",
                s
            )),
        }
    }
}

/// Policy controlling how rounds are decided and recorded
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use lobby_domain::round::{RoundPolicy, Vote};
///
/// let policy = RoundPolicy::default().with_required_voters(2);
/// let votes = vec![
///     Vote::new("pc1", "L1", Utc::now()).unwrap(),
///     Vote::new("pc2", "L1", Utc::now()).unwrap(),
/// ];
/// assert_eq!(policy.agreed_lobby(&votes), Some("L1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPolicy {
    /// Minimum number of distinct participants for an accept
    pub required_voters: usize,
    /// Which outcomes are recorded in history
    pub history_mode: HistoryMode,
    /// Maximum retained history entries (`None` or `Some(0)` = unbounded)
    pub history_limit: Option<usize>,
    /// Treatment of votes between decision and reset
    pub late_votes: LateVotePolicy,
}

impl Default for RoundPolicy {
    fn default() -> Self {
        Self {
            required_voters: DEFAULT_REQUIRED_VOTERS,
            history_mode: HistoryMode::default(),
            history_limit: None,
            late_votes: LateVotePolicy::default(),
        }
    }
}

impl RoundPolicy {
    // ==================== Builder Methods ====================

    pub fn with_required_voters(mut self, required: usize) -> Self {
        self.required_voters = required;
        self
    }

    pub fn with_history_mode(mut self, mode: HistoryMode) -> Self {
        self.history_mode = mode;
        self
    }

    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn with_late_votes(mut self, policy: LateVotePolicy) -> Self {
        self.late_votes = policy;
        self
    }

    // ==================== Evaluation ====================

    /// The lobby every participant agreed on, if the round is acceptable
    ///
    /// Returns `None` when fewer than `required_voters` distinct
    /// participants voted, or when more than one lobby id was named.
    pub fn agreed_lobby<'a>(&self, votes: impl IntoIterator<Item = &'a Vote>) -> Option<&'a str> {
        let mut participants = BTreeSet::new();
        let mut lobbies = BTreeSet::new();

        for vote in votes {
            participants.insert(vote.participant_id.as_str());
            lobbies.insert(vote.lobby_id.as_str());
        }

        if participants.is_empty() || participants.len() < self.required_voters {
            return None;
        }

        let mut lobbies = lobbies.into_iter();
        match (lobbies.next(), lobbies.next()) {
            (Some(lobby), None) => Some(lobby),
            _ => None,
        }
    }

    /// Whether an outcome with this result should be appended to history
    pub fn records(&self, accepted: bool) -> bool {
        accepted || self.history_mode == HistoryMode::All
    }

    /// Effective history bound (`Some(0)` counts as unbounded)
    pub fn effective_history_limit(&self) -> Option<usize> {
        self.history_limit.filter(|limit| *limit > 0)
    }
}
