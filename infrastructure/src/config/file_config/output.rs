//! Output configuration from TOML (`[output]` section)
//!
//! ```toml
//! [output]
//! format = "json"        # or "text"
//! color = true
//! pretty_json = false    # indent JSON status documents
//! ```

use lobby_domain::OutputFormat;
use serde::{Deserialize, Serialize};

pub use lobby_domain::OutputFormat as FileOutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Status and receipt rendering; `--output` wins when given
    pub format: Option<OutputFormat>,
    /// Color the status label and history results
    pub color: bool,
    /// Indent JSON documents instead of one line per response
    pub pretty_json: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            pretty_json: false,
        }
    }
}

impl FileOutputConfig {
    /// Resolve the format, preferring an explicit command-line choice
    pub fn resolve_format(&self, cli: Option<OutputFormat>) -> OutputFormat {
        cli.or(self.format).unwrap_or_default()
    }
}
