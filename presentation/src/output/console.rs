//! Console output formatter for round status

use crate::output::formatter::OutputFormatter;
use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use lobby_application::{CoordinatorError, RoundStatus, VoteReceipt};
use lobby_domain::{RoundOutcome, RoundResult, StatusLabel, Vote, VoteDisposition};

/// Formats round status for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete status snapshot
    pub fn format_status(status: &RoundStatus) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Lobby Quorum"));
        output.push('\n');

        // Status line
        let round = match (status.round, status.round_start) {
            (Some(round), Some(start)) => format!(
                " round {} started {}",
                round,
                Self::clock_time(&start)
            ),
            (Some(round), None) => format!(" round {}", round),
            _ => String::new(),
        };
        output.push_str(&format!(
            "{} {}{}\n",
            "Status:".cyan().bold(),
            Self::label(status.phase),
            round.dimmed()
        ));

        // Votes of the current round
        output.push_str(&Self::section_header(&format!(
            "Votes ({})",
            status.votes.len()
        )));
        if status.votes.is_empty() {
            output.push_str(&format!("  {}\n", "no votes".dimmed()));
        } else {
            for vote in &status.votes {
                output.push_str(&Self::vote_line(vote));
            }
        }

        output.push_str(&Self::format_history(&status.history));
        output.push_str(&Self::footer());

        output
    }

    /// Format the history log, newest round first
    pub fn format_history(history: &[RoundOutcome]) -> String {
        let mut output = Self::section_header(&format!("History ({})", history.len()));

        if history.is_empty() {
            output.push_str(&format!("  {}\n", "no rounds recorded".dimmed()));
            return output;
        }

        for outcome in history.iter().rev() {
            let result = match outcome.result {
                RoundResult::Accepted => "accepted".green(),
                RoundResult::Rejected => "rejected".red(),
            };
            output.push_str(&format!(
                "  {:<6} {}  {:<8}  {}\n",
                outcome.round.to_string(),
                Self::clock_time(&outcome.decided_at),
                result,
                outcome.lobby_id.as_deref().unwrap_or("-")
            ));
        }

        output
    }

    /// Format a vote acknowledgment
    pub fn format_receipt(receipt: &VoteReceipt) -> String {
        let what = match receipt.disposition {
            VoteDisposition::StartedRound => "vote recorded, round started",
            VoteDisposition::Recorded => "vote recorded",
            VoteDisposition::Replaced => "vote replaced",
            VoteDisposition::Absorbed => "vote stored after decision",
        };
        format!("{} {} (round {})", "ok".green().bold(), what, receipt.round)
    }

    /// Format a refused vote
    pub fn format_error(error: &CoordinatorError) -> String {
        format!("{} {}", "refused".red().bold(), error)
    }

    /// Colored status label
    pub fn label(label: StatusLabel) -> ColoredString {
        match label {
            StatusLabel::Waiting => "WAITING".yellow().bold(),
            StatusLabel::Accept => "ACCEPT".green().bold(),
            StatusLabel::Reject => "REJECT".red().bold(),
        }
    }

    fn vote_line(vote: &Vote) -> String {
        format!(
            "  {:<12} -> {:<16} {}\n",
            vote.participant_id,
            vote.lobby_id,
            Self::clock_time(&vote.submitted_at).dimmed()
        )
    }

    fn clock_time(at: &DateTime<Utc>) -> String {
        at.format("%H:%M:%S").to_string()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(48);
        format!("{}\n{:^48}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(32))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(48).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_status(&self, status: &RoundStatus) -> String {
        Self::format_status(status)
    }

    fn format_history(&self, history: &[RoundOutcome]) -> String {
        Self::format_history(history)
    }

    fn format_receipt(&self, receipt: &VoteReceipt) -> String {
        Self::format_receipt(receipt)
    }

    fn format_error(&self, error: &CoordinatorError) -> String {
        Self::format_error(error)
    }
}
