//! Lobby round domain
//!
//! This module contains the core concepts for agreeing on a lobby id.
//!
//! # Core Concepts
//!
//! ## Round
//! One bounded voting window, from the first vote to the reset deadline.
//! Each participant (a game PC) submits the lobby id it observed; a later
//! vote from the same participant overwrites the earlier one.
//!
//! ## Decision
//! At the decision deadline the round is `Accepted` only if at least
//! `required_voters` distinct participants voted and all of them named the
//! same lobby. Anything else is `Rejected`.
//!
//! ## History
//! Decided rounds are appended to an ordered, append-only log.
//!
//! # Lifecycle
//!
//! ```text
//! ┌──────┐ first vote ┌────────────┐ decision  ┌─────────┐
//! │ Idle │───────────▶│ Collecting │──────────▶│ Decided │
//! └──────┘            └────────────┘ deadline  └─────────┘
//!     ▲                                              │
//!     └──────────────── reset deadline ──────────────┘
//! ```

pub mod history;
pub mod outcome;
pub mod policy;
pub mod state;
pub mod vote;

// Re-export main types
pub use history::HistoryLog;
pub use outcome::{RoundId, RoundOutcome, RoundResult, StatusLabel};
pub use policy::{DEFAULT_REQUIRED_VOTERS, HistoryMode, LateVotePolicy, RoundPolicy};
pub use state::{RoundPhase, RoundState, VoteAdmission, VoteDisposition};
pub use vote::Vote;
