//! Interactive vote console
//!
//! Provides a readline-based console where operators submit votes on
//! behalf of participants and inspect the round status.

mod command;
mod vote_repl;

pub use command::ReplCommand;
pub use vote_repl::VoteRepl;
