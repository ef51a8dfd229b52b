//! Configuration validation issues.
//!
//! Validation never fails outright; it returns structured issues with
//! severity levels so callers can decide whether to abort or just warn.
//!
//! # Examples
//!
//! ```
//! use lobby_domain::config::{ConfigIssue, Severity};
//!
//! let issues: Vec<ConfigIssue> = Vec::new();
//! assert!(!ConfigIssue::has_errors(&issues));
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// Quorum size of zero: no round could ever be meaningfully accepted.
    ZeroQuorum,
    /// Reset deadline earlier than the decision deadline.
    ResetBeforeDecision,
    /// Decision deadline at round start: only the first vote is ever counted.
    ZeroDecisionDelay,
    /// History limit of zero, treated as unbounded.
    ZeroHistoryLimit,
    /// A round deadline beyond the supported maximum.
    DeadlineTooLong { field: String },
    /// A string setting did not parse into its enum.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    /// Check whether any issues are errors (i.e. fatal).
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_errors_returns_true_for_errors() {
        let issues = vec![
            ConfigIssue::warning(ConfigIssueCode::ZeroHistoryLimit, "w"),
            ConfigIssue::error(ConfigIssueCode::ZeroQuorum, "e"),
        ];
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn has_errors_returns_false_for_warnings_only() {
        let issues = vec![ConfigIssue::warning(ConfigIssueCode::ZeroDecisionDelay, "w")];
        assert!(!ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn has_errors_returns_false_for_empty() {
        assert!(!ConfigIssue::has_errors(&[]));
    }

    #[test]
    fn display_includes_severity() {
        let issue = ConfigIssue::error(ConfigIssueCode::ZeroQuorum, "round.required_voters must be at least 1");
        assert_eq!(
            issue.to_string(),
            "error: round.required_voters must be at least 1"
        );
    }
}
