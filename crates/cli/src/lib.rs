//! TACo registry command-line interface
//!
//! Argument parsing, subcommands and the interactive console used by the
//! `taco` binary.

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod args;
pub mod commands;
pub mod console;

pub use args::CliArgs;
