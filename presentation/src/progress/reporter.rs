//! Round event reporting for the interactive console

use colored::Colorize;
use lobby_application::RoundObserver;
use lobby_domain::{RoundId, RoundOutcome, RoundResult, Vote, VoteDisposition};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Prints round lifecycle events as they happen
///
/// Decisions and resets are driven by background timers, so these lines
/// can appear while the prompt is waiting for input.
pub struct ConsoleRoundReporter {
    out: Mutex<Box<dyn Write + Send>>,
    show_events: bool,
    show_votes: bool,
}

impl ConsoleRoundReporter {
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// Report to an arbitrary writer
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            show_events: true,
            show_votes: false,
        }
    }

    /// Report round transitions (opened, decided, closed)
    pub fn with_events(mut self, show: bool) -> Self {
        self.show_events = show;
        self
    }

    /// Also report every recorded vote, not just round transitions
    pub fn with_votes(mut self, show: bool) -> Self {
        self.show_votes = show;
        self
    }

    fn emit(&self, line: String) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }
}

impl Default for ConsoleRoundReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundObserver for ConsoleRoundReporter {
    fn on_round_started(&self, round: RoundId, first_vote: &Vote) {
        if !self.show_events {
            return;
        }
        self.emit(format!(
            "{} round {} opened by {}",
            "->".cyan(),
            round.to_string().bold(),
            first_vote.participant_id
        ));
    }

    fn on_vote_recorded(&self, round: RoundId, vote: &Vote, disposition: VoteDisposition) {
        // The opening vote is already covered by the round line
        if !self.show_votes || (self.show_events && disposition == VoteDisposition::StartedRound) {
            return;
        }
        let verb = match disposition {
            VoteDisposition::Replaced => "changed vote to",
            VoteDisposition::Absorbed => "voted late for",
            _ => "voted for",
        };
        self.emit(format!(
            "   {} {} {} ({})",
            vote.participant_id,
            verb,
            vote.lobby_id,
            round
        ));
    }

    fn on_round_decided(&self, outcome: &RoundOutcome) {
        if !self.show_events {
            return;
        }
        let line = match (outcome.result, outcome.lobby_id.as_deref()) {
            (RoundResult::Accepted, Some(lobby)) => format!(
                "{} round {} accepted: start lobby {}",
                "v".green(),
                outcome.round,
                lobby.green().bold()
            ),
            _ => format!("{} round {} rejected", "x".red(), outcome.round),
        };
        self.emit(line);
    }

    fn on_round_reset(&self, round: RoundId) {
        if !self.show_events {
            return;
        }
        self.emit(format!(
            "{} round {} closed, waiting for votes",
            "..".dimmed(),
            round
        ));
    }
}
