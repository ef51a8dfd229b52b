//! CLI command definitions

use clap::{Parser, ValueEnum};
use lobby_domain::{HistoryMode, LateVotePolicy};
use std::path::PathBuf;

/// Output format for status and vote acknowledgments
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored status line, vote table and history
    Text,
    /// One JSON document per command
    Json,
}

impl From<OutputFormat> for lobby_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => lobby_domain::OutputFormat::Text,
            OutputFormat::Json => lobby_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for lobby-quorum
#[derive(Parser, Debug)]
#[command(name = "lobby-quorum")]
#[command(author, version, about = "Lobby quorum - PCs vote on a lobby id and start together")]
#[command(long_about = r#"
Lobby Quorum coordinates rounds in which participants (PCs) vote for a
lobby id. A round opens with the first vote and is decided once the
decision delay has elapsed:

1. accept: enough distinct participants voted and all named the same lobby
2. reject: too few participants, or the votes disagreed

The decided status stays visible until the round resets, then the next
vote opens a new round. Accepted rounds are kept in the history log.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. LOBBY_<SECTION>__<KEY> environment variables
3. ./lobby.toml        Project-level config
4. ~/.config/lobby-quorum/config.toml   Global config

Example:
  lobby-quorum
  lobby-quorum --required-voters 2 --decision-delay 5 --total-duration 8
  lobby-quorum --output json --events-file rounds.jsonl
"#)]
pub struct Cli {
    /// Distinct participants needed to accept a round
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub required_voters: Option<usize>,

    /// Seconds from the first vote until the round is decided
    #[arg(long, value_name = "SECS")]
    pub decision_delay: Option<u64>,

    /// Seconds from the first vote until the round resets
    #[arg(long, value_name = "SECS")]
    pub total_duration: Option<u64>,

    /// Treatment of votes between decision and reset (reject, absorb)
    #[arg(long, value_name = "POLICY")]
    pub late_votes: Option<LateVotePolicy>,

    /// Which decided rounds are recorded (accepted, all)
    #[arg(long, value_name = "MODE")]
    pub history: Option<HistoryMode>,

    /// Keep at most this many history entries (0 = unbounded)
    #[arg(long, value_name = "COUNT")]
    pub history_limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress round event notifications
    #[arg(short, long)]
    pub quiet: bool,

    /// Append round events as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub events_file: Option<PathBuf>,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_config_untouched() {
        let cli = Cli::parse_from(["lobby-quorum"]);
        assert!(cli.required_voters.is_none());
        assert!(cli.decision_delay.is_none());
        assert!(cli.output.is_none());
        assert!(cli.late_votes.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_round_overrides() {
        let cli = Cli::parse_from([
            "lobby-quorum",
            "-n",
            "2",
            "--decision-delay",
            "5",
            "--total-duration",
            "8",
            "--late-votes",
            "absorb",
            "--history",
            "all",
            "-o",
            "json",
            "-vv",
        ]);
        assert_eq!(cli.required_voters, Some(2));
        assert_eq!(cli.decision_delay, Some(5));
        assert_eq!(cli.total_duration, Some(8));
        assert_eq!(cli.late_votes, Some(LateVotePolicy::Absorb));
        assert_eq!(cli.history, Some(HistoryMode::All));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_unknown_late_vote_policy() {
        assert!(Cli::try_parse_from(["lobby-quorum", "--late-votes", "drop"]).is_err());
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        let format: lobby_domain::OutputFormat = OutputFormat::Json.into();
        assert_eq!(format, lobby_domain::OutputFormat::Json);
    }
}
