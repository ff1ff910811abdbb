//! `taco import`

use super::{report_outcome, CommandResult};
use crate::args::ImportArgs;
use anyhow::Context;
use std::collections::HashMap;
use std::fs;
use taco_registry::{registry_from_deployments, DeployedContract};

pub fn run(args: &ImportArgs) -> CommandResult {
    let content = fs::read(&args.deployments).with_context(|| {
        format!(
            "failed to read deployments from {}",
            args.deployments.display()
        )
    })?;
    let deployments: Vec<DeployedContract> = serde_json::from_slice(&content)
        .with_context(|| format!("invalid deployments file {}", args.deployments.display()))?;

    let registry_names: HashMap<String, String> = args.rename.iter().cloned().collect();
    let outcome = registry_from_deployments(&deployments, &args.output, &registry_names)
        .with_context(|| format!("failed to write registry {}", args.output.display()))?;

    report_outcome(&outcome);
    Ok(())
}
