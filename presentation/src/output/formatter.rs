//! Output formatter trait

use lobby_application::{CoordinatorError, RoundStatus, VoteReceipt};
use crate::config::OutputConfig;
use lobby_domain::{OutputFormat, RoundOutcome};

/// Trait for rendering coordinator responses
pub trait OutputFormatter: Send + Sync {
    /// Format a full status snapshot
    fn format_status(&self, status: &RoundStatus) -> String;

    /// Format the history log, newest round first
    fn format_history(&self, history: &[RoundOutcome]) -> String;

    /// Format the acknowledgment of an accepted vote
    fn format_receipt(&self, receipt: &VoteReceipt) -> String;

    /// Format a refused vote
    fn format_error(&self, error: &CoordinatorError) -> String;
}

/// Pick the formatter for the configured output format
pub fn formatter_for(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(super::console::ConsoleFormatter),
        OutputFormat::Json => Box::new(super::json::JsonFormatter::new(config.pretty_json)),
    }
}
