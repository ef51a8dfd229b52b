//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use lobby_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Indent JSON documents
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            pretty_json: false,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Input prompt
    pub prompt: String,
    /// Print round events as they happen
    pub show_events: bool,
    /// Also print every recorded vote
    pub show_votes: bool,
    /// Path to history file (platform data dir when unset)
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "vote> ".to_string(),
            show_events: true,
            show_votes: false,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Resolve the readline history path, expanding a leading `~/`
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => match path.strip_prefix("~") {
                Ok(rest) => dirs::home_dir().map(|home| home.join(rest)),
                Err(_) => Some(path.clone()),
            },
            None => dirs::data_dir().map(|p| p.join("lobby-quorum").join("history.txt")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_path_is_kept() {
        let config = ReplConfig {
            history_file: Some(PathBuf::from("/tmp/lobby-history.txt")),
            ..Default::default()
        };
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/lobby-history.txt"))
        );
    }

    #[test]
    fn test_tilde_history_path_expands_to_home() {
        let config = ReplConfig {
            history_file: Some(PathBuf::from("~/lobby/history.txt")),
            ..Default::default()
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                config.history_path(),
                Some(home.join("lobby").join("history.txt"))
            );
        }
    }
}
