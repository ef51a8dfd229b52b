//! JSON output formatter
//!
//! Status documents have the same shape as the coordinator's
//! [`RoundStatus`] serialization, so scripts can consume them directly.

use crate::output::formatter::OutputFormatter;
use lobby_application::{CoordinatorError, RoundStatus, VoteReceipt};
use lobby_domain::RoundOutcome;
use serde_json::json;

/// Formats coordinator responses as JSON, one line per response unless
/// `pretty` is set
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render(&self, value: &impl serde::Serialize) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_status(&self, status: &RoundStatus) -> String {
        self.render(status)
    }

    fn format_history(&self, history: &[RoundOutcome]) -> String {
        let newest_first: Vec<_> = history.iter().rev().collect();
        self.render(&json!({ "history": newest_first }))
    }

    fn format_receipt(&self, receipt: &VoteReceipt) -> String {
        self.render(receipt)
    }

    fn format_error(&self, error: &CoordinatorError) -> String {
        let kind = if error.is_validation() {
            "invalid_vote"
        } else if error.is_round_closed() {
            "round_closed"
        } else {
            "shut_down"
        };
        self.render(&json!({
            "accepted": false,
            "error": kind,
            "message": error.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lobby_domain::{DomainError, RoundId, StatusLabel, VoteDisposition};
    use serde_json::Value;

    fn parse(output: String) -> Value {
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_receipt_json() {
        let receipt = VoteReceipt {
            accepted: true,
            round: RoundId::FIRST,
            started_round: true,
            disposition: VoteDisposition::StartedRound,
        };
        let value = parse(JsonFormatter::default().format_receipt(&receipt));
        assert_eq!(value["accepted"], true);
        assert_eq!(value["round"], 1);
        assert_eq!(value["disposition"], "started_round");
    }

    #[test]
    fn test_error_json_kinds() {
        let invalid = CoordinatorError::from(DomainError::EmptyLobbyId);
        let value = parse(JsonFormatter::default().format_error(&invalid));
        assert_eq!(value["accepted"], false);
        assert_eq!(value["error"], "invalid_vote");

        let closed = CoordinatorError::from(DomainError::RoundClosed {
            round: RoundId::FIRST,
        });
        let value = parse(JsonFormatter::default().format_error(&closed));
        assert_eq!(value["error"], "round_closed");

        let value = parse(JsonFormatter::default().format_error(&CoordinatorError::ShutDown));
        assert_eq!(value["error"], "shut_down");
    }

    #[test]
    fn test_history_json_is_newest_first() {
        let history = vec![
            RoundOutcome::accepted(RoundId::new(1), "L1", Utc::now()),
            RoundOutcome::accepted(RoundId::new(2), "L2", Utc::now()),
        ];
        let value = parse(JsonFormatter::default().format_history(&history));
        assert_eq!(value["history"][0]["round"], 2);
        assert_eq!(value["history"][1]["lobby_id"], "L1");
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let history = vec![RoundOutcome::rejected(RoundId::FIRST, Utc::now())];

        let compact = JsonFormatter::default().format_history(&history);
        let pretty = JsonFormatter::new(true).format_history(&history);
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));

        let compact: Value = serde_json::from_str(&compact).unwrap();
        let pretty: Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(compact, pretty);
    }

    #[test]
    fn test_status_json_matches_status_shape() {
        let status = RoundStatus {
            phase: StatusLabel::Waiting,
            round: Some(RoundId::FIRST),
            round_start: Some(Utc::now()),
            votes: vec![],
            history: vec![],
        };
        let value = parse(JsonFormatter::default().format_status(&status));
        assert_eq!(value["phase"], "waiting");
        assert_eq!(value["round"], 1);
        assert!(value["votes"].as_array().unwrap().is_empty());
    }
}
