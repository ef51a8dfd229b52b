//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types by
//! [`FileConfig::to_coordinator_config`].

mod history;
mod logging;
mod output;
mod repl;
mod round;

pub use history::FileHistoryConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;
pub use round::FileRoundConfig;

use lobby_application::CoordinatorConfig;
use lobby_domain::{ConfigIssue, RoundPolicy};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quorum size and deadlines
    pub round: FileRoundConfig,
    /// History recording and retention
    pub history: FileHistoryConfig,
    /// Event and diagnostic log files
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Build the coordinator configuration, collecting every detected issue.
    ///
    /// Unknown enum strings fall back to defaults (warnings); impossible
    /// combinations such as a reset before the decision are errors.
    pub fn to_coordinator_config(&self) -> (CoordinatorConfig, Vec<ConfigIssue>) {
        let (late_votes, mut issues) = self.round.parse_late_votes();
        let (history_mode, history_issues) = self.history.parse_mode();
        issues.extend(history_issues);

        let policy = RoundPolicy::default()
            .with_required_voters(self.round.required_voters)
            .with_history_mode(history_mode)
            .with_history_limit(self.history.limit)
            .with_late_votes(late_votes);

        let config = CoordinatorConfig::new(policy, self.round.timings());
        issues.extend(config.validate());

        (config, issues)
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.to_coordinator_config().1
    }
}
