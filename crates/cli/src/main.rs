use anyhow::{Context, Result};
use clap::Parser;
use taco_cli::args::{CliArgs, Command};
use taco_cli::commands;
use taco_config::DeployConfig;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let cli = CliArgs::parse();

    let mut config = DeployConfig::load(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?;
    if let Some(dir) = &cli.artifacts_dir {
        config.artifacts_dir = dir.clone();
    }

    let level = cli
        .log_level
        .map(|level| level.as_directive().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    init_tracing(&level);
    debug!(target: "taco", version = taco_cli::VERSION, config = %cli.config.display(), "starting");

    match &cli.command {
        Command::Merge(args) => commands::merge::run(args),
        Command::Import(args) => commands::import::run(args),
        Command::List(args) => commands::list::run(args),
        Command::Lookup(args) => commands::lookup::run(&config, args),
    }
}

fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
