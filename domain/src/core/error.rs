//! Domain error types

use crate::round::RoundId;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Participant id must not be empty")]
    EmptyParticipantId,

    #[error("Lobby id must not be empty")]
    EmptyLobbyId,

    #[error("Round {round} is already decided; wait for the next round")]
    RoundClosed { round: RoundId },
}

impl DomainError {
    /// Check if this error is a rejected submission payload
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyParticipantId | DomainError::EmptyLobbyId
        )
    }

    /// Check if this error represents a vote arriving after the decision
    pub fn is_round_closed(&self) -> bool {
        matches!(self, DomainError::RoundClosed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::EmptyParticipantId.to_string(),
            "Participant id must not be empty"
        );
        assert_eq!(
            DomainError::RoundClosed {
                round: RoundId::new(7)
            }
            .to_string(),
            "Round #7 is already decided; wait for the next round"
        );
    }

    #[test]
    fn test_is_validation_check() {
        assert!(DomainError::EmptyParticipantId.is_validation());
        assert!(DomainError::EmptyLobbyId.is_validation());
        assert!(!DomainError::RoundClosed {
            round: RoundId::FIRST
        }
        .is_validation());
        assert!(DomainError::RoundClosed {
            round: RoundId::FIRST
        }
        .is_round_closed());
    }
}
