//! Logging infrastructure: structured round event logging.
//!
//! Provides [`JsonlRoundLogger`], a JSONL file writer that implements
//! the [`RoundObserver`](lobby_application::RoundObserver) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlRoundLogger;
