//! Vote console configuration from TOML (`[repl]` section)
//!
//! ```toml
//! [repl]
//! prompt = "lobby> "
//! show_events = true     # round opened / decided / closed lines
//! show_votes = false     # one line per recorded vote
//! history_file = "~/.local/share/lobby-quorum/history.txt"
//! ```

use serde::{Deserialize, Serialize};

/// Prompt shown when `[repl] prompt` is not set
pub const DEFAULT_PROMPT: &str = "vote> ";

/// Raw vote console configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Input prompt of the vote console
    pub prompt: String,
    /// Print round transitions as the timers fire
    pub show_events: bool,
    /// Also print every vote taken into a round
    pub show_votes: bool,
    /// Readline history file (`~/` is expanded)
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_events: true,
            show_votes: false,
            history_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileReplConfig::default();
        assert_eq!(config.prompt, "vote> ");
        assert!(config.show_events);
        assert!(!config.show_votes);
        assert!(config.history_file.is_none());
    }

    #[test]
    fn test_repl_section_deserialize() {
        let toml_str = r#"
[repl]
prompt = "pc-room> "
show_events = false
show_votes = true
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.repl.prompt, "pc-room> ");
        assert!(!config.repl.show_events);
        assert!(config.repl.show_votes);
    }
}
