//! Console command parsing

/// A parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Submit a vote for `participant`
    Vote { participant: String, lobby: String },
    /// Show the full status snapshot
    Status,
    /// Show the history log
    History,
    Help,
    Quit,
}

impl ReplCommand {
    pub const USAGE: &'static str = "\
Commands:
  vote, v <participant> <lobby>  - Submit a vote
  status, s                      - Show round status and votes
  history, h                     - Show decided rounds, newest first
  help, ?                        - Show this help
  quit, exit, q                  - Exit";

    /// Parse a non-empty input line; a leading `/` is accepted
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let line = line.strip_prefix('/').unwrap_or(line);
        let mut parts = line.split_whitespace();

        let Some(name) = parts.next() else {
            return Err("Empty command".to_string());
        };

        match name.to_lowercase().as_str() {
            "vote" | "v" => {
                let (Some(participant), Some(lobby)) = (parts.next(), parts.next()) else {
                    return Err("Usage: vote <participant> <lobby>".to_string());
                };
                if parts.next().is_some() {
                    return Err(
                        "Usage: vote <participant> <lobby> (ids cannot contain spaces)".to_string(),
                    );
                }
                Ok(ReplCommand::Vote {
                    participant: participant.to_string(),
                    lobby: lobby.to_string(),
                })
            }
            "status" | "s" => Ok(ReplCommand::Status),
            "history" | "h" => Ok(ReplCommand::History),
            "help" | "?" => Ok(ReplCommand::Help),
            "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
            other => Err(format!(
                "Unknown command: {}. Type help for available commands",
                other
            )),
        }
    }
}
