use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use taco_config::DEFAULT_CONFIG_FILE;

/// Command-line arguments for the TACo registry tool
#[derive(Parser, Debug, Clone)]
#[command(
    name = "taco",
    version = env!("CARGO_PKG_VERSION"),
    about = "Contract registry tooling for TACo deployments",
    long_about = "Reads, writes and merges the JSON contract registries produced by TACo deployments. Conflicting entries found while merging are settled interactively."
)]
pub struct CliArgs {
    /// Specifies the config file
    #[arg(short = 'c', long = "config", value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Overrides the configured artifacts directory
    #[arg(long = "artifacts-dir", value_name = "DIR")]
    pub artifacts_dir: Option<PathBuf>,

    /// Overrides the configured log level
    #[arg(long = "log-level", value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log level enumeration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Trace level logging
    Trace,
    /// Debug level logging
    Debug,
    /// Info level logging
    Info,
    /// Warning level logging
    Warn,
    /// Error level logging
    Error,
}

impl LogLevel {
    /// Filter directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Merge two registries, resolving conflicts interactively
    Merge(MergeArgs),
    /// Create or extend a registry from deployment records
    Import(ImportArgs),
    /// List the entries of a registry
    List(ListArgs),
    /// Show one contract of a domain's registry
    Lookup(LookupArgs),
}

#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    /// First registry
    #[arg(value_name = "REGISTRY_1")]
    pub first: PathBuf,

    /// Second registry
    #[arg(value_name = "REGISTRY_2")]
    pub second: PathBuf,

    /// Merged registry (*.json)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Contract excluded from the merged registry (repeatable)
    #[arg(short = 'd', long = "deprecated", value_name = "NAME")]
    pub deprecated: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// JSON array of deployment records
    #[arg(long = "deployments", value_name = "FILE")]
    pub deployments: PathBuf,

    /// Registry to write
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Registers a contract type under another name (repeatable)
    #[arg(long = "rename", value_name = "TYPE=NAME", value_parser = parse_rename)]
    pub rename: Vec<(String, String)>,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Registry to list
    #[arg(value_name = "REGISTRY")]
    pub registry: PathBuf,

    /// Only list entries of this chain
    #[arg(long = "chain-id", value_name = "ID")]
    pub chain_id: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// TACo domain
    #[arg(short = 'd', long = "domain", value_name = "DOMAIN")]
    pub domain: String,

    /// Contract name
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: String,

    /// Chain the contract is deployed on
    #[arg(long = "chain-id", value_name = "ID")]
    pub chain_id: Option<u64>,
}

fn parse_rename(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => {
            Ok((from.trim().to_string(), to.trim().to_string()))
        }
        _ => Err(format!("expected TYPE=NAME, got '{value}'")),
    }
}
