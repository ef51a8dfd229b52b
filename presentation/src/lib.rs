//! Presentation layer for lobby-quorum
//!
//! This crate contains CLI definitions, output formatters,
//! round event reporters, and the interactive vote console.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, formatter_for};
pub use output::json::JsonFormatter;
pub use progress::reporter::ConsoleRoundReporter;
pub use repl::{ReplCommand, VoteRepl};
