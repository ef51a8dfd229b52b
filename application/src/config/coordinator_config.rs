//! Coordinator configuration container.
//!
//! [`CoordinatorConfig`] groups the domain [`RoundPolicy`] (who must agree,
//! what is recorded) with the application [`RoundTimings`] (when things
//! happen). It is built once at startup and never mutated afterwards.

use crate::config::{MAX_ROUND_DURATION, RoundTimings};
use lobby_domain::{ConfigIssue, ConfigIssueCode, RoundPolicy};
use std::time::Duration;

/// Configuration for a [`RoundCoordinator`](crate::RoundCoordinator).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinatorConfig {
    policy: RoundPolicy,
    timings: RoundTimings,
}

impl CoordinatorConfig {
    pub fn new(policy: RoundPolicy, timings: RoundTimings) -> Self {
        Self { policy, timings }
    }

    // ==================== Accessors ====================

    /// Quorum and history policy.
    pub fn policy(&self) -> &RoundPolicy {
        &self.policy
    }

    /// Decision and reset deadlines.
    pub fn timings(&self) -> &RoundTimings {
        &self.timings
    }

    // ==================== Builder Methods ====================

    pub fn with_required_voters(mut self, required: usize) -> Self {
        self.policy = self.policy.with_required_voters(required);
        self
    }

    pub fn with_policy(mut self, policy: RoundPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_timings(mut self, timings: RoundTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn with_decision_delay(mut self, delay: Duration) -> Self {
        self.timings = self.timings.with_decision_delay(delay);
        self
    }

    pub fn with_total_round_duration(mut self, total: Duration) -> Self {
        self.timings = self.timings.with_total_round_duration(total);
        self
    }

    // ==================== Validation ====================

    /// Validate the configuration combination.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.policy.required_voters == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroQuorum,
                "round.required_voters must be at least 1",
            ));
        }

        if self.timings.total_round_duration < self.timings.decision_delay {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ResetBeforeDecision,
                format!(
                    "round total duration ({}s) is shorter than the decision delay ({}s)",
                    self.timings.total_round_duration.as_secs_f64(),
                    self.timings.decision_delay.as_secs_f64()
                ),
            ));
        }

        for (field, value) in [
            ("round.decision_delay_secs", self.timings.decision_delay),
            ("round.total_duration_secs", self.timings.total_round_duration),
        ] {
            if value > MAX_ROUND_DURATION {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::DeadlineTooLong {
                        field: field.to_string(),
                    },
                    format!(
                        "{} ({}s) exceeds the maximum of {}s",
                        field,
                        value.as_secs(),
                        MAX_ROUND_DURATION.as_secs()
                    ),
                ));
            }
        }

        if self.timings.decision_delay.is_zero() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroDecisionDelay,
                "round decision delay is 0s; rounds are decided on their first vote",
            ));
        }

        if self.policy.history_limit == Some(0) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroHistoryLimit,
                "history.limit = 0 keeps an unbounded history",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lobby_domain::{LateVotePolicy, Severity};

    #[test]
    fn test_default() {
        let config = CoordinatorConfig::default();
        assert_eq!(config.policy().required_voters, 4);
        assert_eq!(config.policy().late_votes, LateVotePolicy::Reject);
        assert_eq!(config.timings().decision_delay, Duration::from_secs(10));
        assert_eq!(config.timings().total_round_duration, Duration::from_secs(17));
    }

    #[test]
    fn test_builder_methods() {
        let config = CoordinatorConfig::default()
            .with_required_voters(2)
            .with_decision_delay(Duration::from_secs(5))
            .with_total_round_duration(Duration::from_secs(10));

        assert_eq!(config.policy().required_voters, 2);
        assert_eq!(config.timings().decision_delay, Duration::from_secs(5));
        assert_eq!(config.timings().total_round_duration, Duration::from_secs(10));
    }

    #[test]
    fn test_validate_valid() {
        assert!(CoordinatorConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_zero_quorum() {
        let issues = CoordinatorConfig::default().with_required_voters(0).validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::ZeroQuorum);
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn test_validate_reset_before_decision() {
        let issues = CoordinatorConfig::default()
            .with_decision_delay(Duration::from_secs(10))
            .with_total_round_duration(Duration::from_secs(5))
            .validate();
        assert!(issues
            .iter()
            .any(|i| i.code == ConfigIssueCode::ResetBeforeDecision
                && i.severity == Severity::Error));
    }

    #[test]
    fn test_validate_rejects_oversized_deadlines() {
        let issues = CoordinatorConfig::default()
            .with_decision_delay(Duration::from_secs(u64::MAX))
            .with_total_round_duration(Duration::from_secs(u64::MAX))
            .validate();

        let fields: Vec<_> = issues
            .iter()
            .filter_map(|i| match &i.code {
                ConfigIssueCode::DeadlineTooLong { field } => Some(field.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            fields,
            vec!["round.decision_delay_secs", "round.total_duration_secs"]
        );
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn test_validate_accepts_maximum_deadline() {
        let issues = CoordinatorConfig::default()
            .with_total_round_duration(MAX_ROUND_DURATION)
            .validate();
        assert!(issues.is_empty());
    }

    #[test]
    fn test_validate_warnings_only() {
        let config = CoordinatorConfig::default()
            .with_policy(RoundPolicy::default().with_history_limit(Some(0)))
            .with_decision_delay(Duration::ZERO);

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(!ConfigIssue::has_errors(&issues));
    }
}
