//! Application layer for lobby-quorum
//!
//! This crate contains the round coordinator use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CoordinatorConfig, RoundTimings};
pub use ports::{
    clock::{Clock, SystemClock},
    round_observer::{CompositeRoundObserver, NoRoundObserver, RoundObserver},
};
pub use use_cases::round_coordinator::{
    CoordinatorError, RoundCoordinator, RoundStatus, VoteReceipt,
};
