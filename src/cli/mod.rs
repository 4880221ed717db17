//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing and subcommand handlers.

mod args;
mod commands;

pub use args::{Args, Command, ConfigAction};
pub use commands::{default_output, init_config, run, CommandError, Settings};
