//! The tools module provides the helpers around the huffzip engine.
//!
//! The tools are:
//! - cli: command line interface, mapping flags to the two engine
//!   operations and the log level.
//! - freq_count: frequency count over the input buffer.

pub mod cli;
pub mod freq_count;
