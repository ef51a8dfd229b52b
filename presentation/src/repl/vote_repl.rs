//! REPL (Read-Eval-Print Loop) for submitting votes

use super::command::ReplCommand;
use crate::config::{OutputConfig, ReplConfig};
use crate::output::formatter::{OutputFormatter, formatter_for};
use lobby_application::RoundCoordinator;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::debug;

/// Whether the loop should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive vote console
pub struct VoteRepl {
    coordinator: RoundCoordinator,
    formatter: Box<dyn OutputFormatter>,
    config: ReplConfig,
}

impl VoteRepl {
    /// Create a new VoteRepl
    pub fn new(coordinator: RoundCoordinator) -> Self {
        Self {
            coordinator,
            formatter: formatter_for(&OutputConfig::default()),
            config: ReplConfig::default(),
        }
    }

    /// Set how responses are rendered
    pub fn with_output(mut self, output: &OutputConfig) -> Self {
        self.formatter = formatter_for(output);
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL until `quit` or end of input
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(&self.config.prompt) {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if self.handle_line(line) == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        let config = self.coordinator.config();
        let timings = config.timings();

        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Lobby Quorum - Vote Console        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Quorum: {} participants, decision after {}s, reset after {}s",
            config.policy().required_voters,
            timings.decision_delay.as_secs(),
            timings.reset_after().as_secs()
        );
        println!();
        println!("{}", ReplCommand::USAGE);
        println!();
    }

    /// Execute one input line and print the response
    fn handle_line(&self, line: &str) -> Flow {
        match ReplCommand::parse(line) {
            Ok(command) => {
                let (output, flow) = self.execute(command);
                if let Some(output) = output {
                    println!("{}", output);
                }
                flow
            }
            Err(message) => {
                eprintln!("{}", message);
                Flow::Continue
            }
        }
    }

    /// Execute a parsed command, returning the text to print
    fn execute(&self, command: ReplCommand) -> (Option<String>, Flow) {
        match command {
            ReplCommand::Vote { participant, lobby } => {
                debug!("Console vote: {} -> {}", participant, lobby);
                let output = match self.coordinator.submit_vote(&participant, &lobby) {
                    Ok(receipt) => self.formatter.format_receipt(&receipt),
                    Err(e) => self.formatter.format_error(&e),
                };
                (Some(output), Flow::Continue)
            }
            ReplCommand::Status => {
                let status = self.coordinator.status();
                (Some(self.formatter.format_status(&status)), Flow::Continue)
            }
            ReplCommand::History => {
                let history = self.coordinator.history();
                (Some(self.formatter.format_history(&history)), Flow::Continue)
            }
            ReplCommand::Help => (Some(ReplCommand::USAGE.to_string()), Flow::Continue),
            ReplCommand::Quit => (Some("Bye!".to_string()), Flow::Exit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lobby_application::CoordinatorConfig;
    use lobby_domain::OutputFormat;
    use serde_json::Value;

    fn json_repl() -> VoteRepl {
        let coordinator = RoundCoordinator::new(CoordinatorConfig::default());
        VoteRepl::new(coordinator).with_output(&OutputConfig {
            format: OutputFormat::Json,
            ..Default::default()
        })
    }

    fn run(repl: &VoteRepl, line: &str) -> (Value, Flow) {
        let command = ReplCommand::parse(line).unwrap();
        let (output, flow) = repl.execute(command);
        (serde_json::from_str(&output.unwrap()).unwrap(), flow)
    }

    #[tokio::test(start_paused = true)]
    async fn test_vote_then_status() {
        let repl = json_repl();

        let (receipt, flow) = run(&repl, "vote pc1 L1");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(receipt["accepted"], true);
        assert_eq!(receipt["started_round"], true);

        let (status, _) = run(&repl, "status");
        assert_eq!(status["phase"], "waiting");
        assert_eq!(status["votes"][0]["participant_id"], "pc1");

        repl.coordinator.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_vote_is_reported() {
        let repl = json_repl();
        repl.coordinator.shutdown().await;

        let (error, flow) = run(&repl, "vote pc1 L1");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(error["accepted"], false);
        assert_eq!(error["error"], "shut_down");
    }

    #[tokio::test]
    async fn test_history_starts_empty() {
        let repl = json_repl();
        let (history, _) = run(&repl, "history");
        assert!(history["history"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_quit_exits() {
        let repl = VoteRepl::new(RoundCoordinator::new(CoordinatorConfig::default()));
        let (output, flow) = repl.execute(ReplCommand::Quit);
        assert_eq!(flow, Flow::Exit);
        assert_eq!(output.as_deref(), Some("Bye!"));
    }
}
