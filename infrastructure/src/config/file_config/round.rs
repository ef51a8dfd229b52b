//! Round configuration from TOML (`[round]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [round]
//! required_voters = 4
//! decision_delay_secs = 10
//! total_duration_secs = 17
//! late_votes = "reject"   # or "absorb"
//! ```

use lobby_application::RoundTimings;
use lobby_application::config::round_timings::{
    DEFAULT_DECISION_DELAY, DEFAULT_TOTAL_ROUND_DURATION,
};
use lobby_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_REQUIRED_VOTERS, LateVotePolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw round configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRoundConfig {
    /// Number of distinct PCs that must agree
    pub required_voters: usize,
    /// Seconds from the first vote to the decision
    pub decision_delay_secs: u64,
    /// Seconds from the first vote to the reset
    pub total_duration_secs: u64,
    /// Late vote handling: "reject" or "absorb"
    pub late_votes: String,
}

impl Default for FileRoundConfig {
    fn default() -> Self {
        Self {
            required_voters: DEFAULT_REQUIRED_VOTERS,
            decision_delay_secs: DEFAULT_DECISION_DELAY.as_secs(),
            total_duration_secs: DEFAULT_TOTAL_ROUND_DURATION.as_secs(),
            late_votes: LateVotePolicy::default().to_string(),
        }
    }
}

impl FileRoundConfig {
    /// Parse the late vote policy, falling back to `reject` with a warning
    pub fn parse_late_votes(&self) -> (LateVotePolicy, Vec<ConfigIssue>) {
        match self.late_votes.parse() {
            Ok(policy) => (policy, vec![]),
            Err(_) => (
                LateVotePolicy::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "round.late_votes".to_string(),
                        value: self.late_votes.clone(),
                        valid_values: vec!["reject".to_string(), "absorb".to_string()],
                    },
                    format!(
                        "round.late_votes: unknown value '{}', falling back to 'reject'",
                        self.late_votes
                    ),
                )],
            ),
        }
    }

    pub fn timings(&self) -> RoundTimings {
        RoundTimings::new(
            Duration::from_secs(self.decision_delay_secs),
            Duration::from_secs(self.total_duration_secs),
        )
    }
}
