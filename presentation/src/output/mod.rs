//! Output formatting for status snapshots and vote acknowledgments

pub mod console;
pub mod formatter;
pub mod json;
