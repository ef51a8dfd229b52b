//! Round event reporting

pub mod reporter;
