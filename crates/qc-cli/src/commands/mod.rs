//! Command implementations

pub mod common;
pub mod compile;
pub mod dry_run;
pub mod ls;
pub mod open;
pub mod process;
