//! Vote types for lobby rounds
//!
//! This module defines the voting primitive submitted by each participant.

use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single participant's vote for a lobby identifier
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use lobby_domain::round::Vote;
///
/// let vote = Vote::new("pc1", "lobby-42", Utc::now()).unwrap();
/// assert_eq!(vote.participant_id, "pc1");
/// assert_eq!(vote.lobby_id, "lobby-42");
///
/// assert!(Vote::new("", "lobby-42", Utc::now()).is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vote {
    /// Participant identifier (e.g., "pc1")
    pub participant_id: String,
    /// Lobby identifier this participant observed
    pub lobby_id: String,
    /// When the vote was submitted
    pub submitted_at: DateTime<Utc>,
}

impl Vote {
    /// Create a validated vote
    ///
    /// Both ids must contain at least one non-whitespace character.
    pub fn new(
        participant_id: impl Into<String>,
        lobby_id: impl Into<String>,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let participant_id = participant_id.into();
        let lobby_id = lobby_id.into();

        if participant_id.trim().is_empty() {
            return Err(DomainError::EmptyParticipantId);
        }
        if lobby_id.trim().is_empty() {
            return Err(DomainError::EmptyLobbyId);
        }

        Ok(Self {
            participant_id,
            lobby_id,
            submitted_at,
        })
    }

    /// Whether this vote names the given lobby
    pub fn is_for(&self, lobby_id: &str) -> bool {
        self.lobby_id == lobby_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_creation() {
        let at = Utc::now();
        let vote = Vote::new("pc1", "L1", at).unwrap();
        assert_eq!(vote.participant_id, "pc1");
        assert_eq!(vote.lobby_id, "L1");
        assert_eq!(vote.submitted_at, at);
        assert!(vote.is_for("L1"));
        assert!(!vote.is_for("L2"));
    }

    #[test]
    fn test_empty_participant_rejected() {
        let err = Vote::new("", "L1", Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::EmptyParticipantId));

        let err = Vote::new("   ", "L1", Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::EmptyParticipantId));
    }

    #[test]
    fn test_empty_lobby_rejected() {
        let err = Vote::new("pc1", "", Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::EmptyLobbyId));

        let err = Vote::new("pc1", "\t", Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::EmptyLobbyId));
    }

    #[test]
    fn test_ids_stored_verbatim() {
        let vote = Vote::new(" pc1", "L1 ", Utc::now()).unwrap();
        assert_eq!(vote.participant_id, " pc1");
        assert_eq!(vote.lobby_id, "L1 ");
    }

    #[test]
    fn test_vote_serialization_field_names() {
        let vote = Vote::new("pc1", "L1", Utc::now()).unwrap();
        let json = serde_json::to_value(&vote).unwrap();
        assert_eq!(json["participant_id"], "pc1");
        assert_eq!(json["lobby_id"], "L1");
        assert!(json.get("submitted_at").is_some());
    }
}
