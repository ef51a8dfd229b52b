//! Configuration file loading for lobby-quorum
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Environment: `LOBBY_ROUND__REQUIRED_VOTERS=3`, `LOBBY_HISTORY__MODE=all`, ...
//! 3. Project root: `./lobby.toml` or `./.lobby.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/lobby-quorum/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileHistoryConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
    FileReplConfig, FileRoundConfig,
};
pub use loader::ConfigLoader;
