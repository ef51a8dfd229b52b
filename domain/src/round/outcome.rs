//! Round outcome types
//!
//! This module defines round identity, decision results and the history
//! entries produced when a round is decided.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of a single round (1-indexed, increasing per process)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(u64);

impl RoundId {
    /// The first round of a process
    pub const FIRST: RoundId = RoundId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The round that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of a decided round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// Quorum reached and every vote named the same lobby
    Accepted,
    /// Too few participants, or the votes disagreed
    Rejected,
}

impl RoundResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, RoundResult::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, RoundResult::Rejected)
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundResult::Accepted => write!(f, "Accepted"),
            RoundResult::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Externally visible status label
///
/// `waiting` covers both an idle coordinator and a round still collecting
/// votes; `accept`/`reject` are shown between decision and reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLabel {
    Waiting,
    Accept,
    Reject,
}

impl StatusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Waiting => "waiting",
            StatusLabel::Accept => "accept",
            StatusLabel::Reject => "reject",
        }
    }
}

impl From<RoundResult> for StatusLabel {
    fn from(result: RoundResult) -> Self {
        match result {
            RoundResult::Accepted => StatusLabel::Accept,
            RoundResult::Rejected => StatusLabel::Reject,
        }
    }
}

impl std::fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decided round, as recorded in the history log
///
/// Entries are immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Round this outcome belongs to
    pub round: RoundId,
    /// When the decision was taken
    #[serde(rename = "timestamp")]
    pub decided_at: DateTime<Utc>,
    /// The agreed lobby (only for accepted rounds)
    pub lobby_id: Option<String>,
    /// Accept/reject decision
    pub result: RoundResult,
}

impl RoundOutcome {
    /// Create an accepted outcome for `lobby_id`
    pub fn accepted(round: RoundId, lobby_id: impl Into<String>, decided_at: DateTime<Utc>) -> Self {
        Self {
            round,
            decided_at,
            lobby_id: Some(lobby_id.into()),
            result: RoundResult::Accepted,
        }
    }

    /// Create a rejected outcome (never carries a lobby id)
    pub fn rejected(round: RoundId, decided_at: DateTime<Utc>) -> Self {
        Self {
            round,
            decided_at,
            lobby_id: None,
            result: RoundResult::Rejected,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.result.is_accepted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_id_sequence() {
        let first = RoundId::FIRST;
        assert_eq!(first.value(), 1);
        assert_eq!(first.next(), RoundId::new(2));
        assert_eq!(first.next().to_string(), "#2");
    }

    #[test]
    fn test_result_display() {
        assert_eq!(RoundResult::Accepted.to_string(), "Accepted");
        assert_eq!(RoundResult::Rejected.to_string(), "Rejected");
    }

    #[test]
    fn test_status_label_from_result() {
        assert_eq!(StatusLabel::from(RoundResult::Accepted), StatusLabel::Accept);
        assert_eq!(StatusLabel::from(RoundResult::Rejected), StatusLabel::Reject);
        assert_eq!(StatusLabel::Waiting.to_string(), "waiting");
    }

    #[test]
    fn test_outcome_constructors() {
        let now = Utc::now();
        let accepted = RoundOutcome::accepted(RoundId::FIRST, "L1", now);
        assert!(accepted.is_accepted());
        assert_eq!(accepted.lobby_id.as_deref(), Some("L1"));

        let rejected = RoundOutcome::rejected(RoundId::FIRST, now);
        assert!(!rejected.is_accepted());
        assert!(rejected.lobby_id.is_none());
    }

    #[test]
    fn test_outcome_serializes_timestamp_field() {
        let outcome = RoundOutcome::accepted(RoundId::new(3), "L1", Utc::now());
        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json.get("timestamp").is_some());
        assert!(json.get("decided_at").is_none());
        assert_eq!(json["round"], 3);
        assert_eq!(json["lobby_id"], "L1");
        assert_eq!(json["result"], "Accepted");

        let label = serde_json::to_value(StatusLabel::Reject).unwrap();
        assert_eq!(label, "reject");
    }
}
