//! History configuration from TOML (`[history]` section)
//!
//! ```toml
//! [history]
//! mode = "accepted"   # or "all"
//! limit = 100         # omit for unbounded
//! ```

use lobby_domain::{ConfigIssue, ConfigIssueCode, HistoryMode};
use serde::{Deserialize, Serialize};

/// Raw history configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// Which decided rounds to record: "accepted" or "all"
    pub mode: String,
    /// Maximum number of retained entries
    pub limit: Option<usize>,
}

impl Default for FileHistoryConfig {
    fn default() -> Self {
        Self {
            mode: HistoryMode::default().to_string(),
            limit: None,
        }
    }
}

impl FileHistoryConfig {
    /// Parse the history mode, falling back to `accepted` with a warning
    pub fn parse_mode(&self) -> (HistoryMode, Vec<ConfigIssue>) {
        match self.mode.parse() {
            Ok(mode) => (mode, vec![]),
            Err(_) => (
                HistoryMode::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "history.mode".to_string(),
                        value: self.mode.clone(),
                        valid_values: vec!["accepted".to_string(), "all".to_string()],
                    },
                    format!(
                        "history.mode: unknown value '{}', falling back to 'accepted'",
                        self.mode
                    ),
                )],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_config_deserialize() {
        let toml_str = r#"
[history]
mode = "all"
limit = 50
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.history.limit, Some(50));
        assert_eq!(config.history.parse_mode().0, HistoryMode::All);
    }

    #[test]
    fn test_invalid_mode_warns() {
        let config = FileHistoryConfig {
            mode: "rejected".to_string(),
            limit: None,
        };
        let (mode, issues) = config.parse_mode();
        assert_eq!(mode, HistoryMode::Accepted);
        assert_eq!(issues.len(), 1);
    }
}
