//! Domain layer for lobby-quorum
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure, timers or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Round
//!
//! A fixed group of game PCs each report the lobby id they joined. A round
//! opens with the first report and is decided at a deadline:
//!
//! - **Accepted**: at least `required_voters` PCs reported, all the same lobby
//! - **Rejected**: too few reports, or any disagreement
//!
//! ## History
//!
//! Decided rounds are appended, in decision order, to the [`HistoryLog`].

pub mod config;
pub mod core;
pub mod round;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use round::{
    DEFAULT_REQUIRED_VOTERS, HistoryLog, HistoryMode, LateVotePolicy, RoundId, RoundOutcome,
    RoundPhase, RoundPolicy, RoundResult, RoundState, StatusLabel, Vote, VoteAdmission,
    VoteDisposition,
};
