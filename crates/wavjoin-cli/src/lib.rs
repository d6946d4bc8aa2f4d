//! wavjoin CLI library.
//!
//! Command implementations, JSON output types, and logging setup for the
//! `wavjoin` binary.

pub mod commands;
pub mod json_output;
pub mod logging;
