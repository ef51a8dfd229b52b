//! Application-level configuration.
//!
//! This module provides configuration types that control how the
//! coordinator behaves:
//!
//! - [`RoundTimings`] - decision and reset deadlines
//! - [`CoordinatorConfig`] - policy + timings container

pub mod coordinator_config;
pub mod round_timings;

pub use coordinator_config::CoordinatorConfig;
pub use round_timings::{
    DEFAULT_DECISION_DELAY, DEFAULT_TOTAL_ROUND_DURATION, MAX_ROUND_DURATION, RoundTimings,
};
