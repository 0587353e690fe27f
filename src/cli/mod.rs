//! Command-line interface module
//!
//! Provides argument parsing and command execution.

pub mod args;
pub mod commands;

pub use args::{Args, Invocation, command, parse_args, try_parse_args_from};
pub use commands::execute;
