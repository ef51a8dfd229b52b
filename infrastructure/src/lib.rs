//! Infrastructure layer for lobby-quorum
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileHistoryConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig, FileRoundConfig,
};
pub use logging::JsonlRoundLogger;
