//! `taco lookup`

use super::CommandResult;
use crate::args::LookupArgs;
use crate::console::ConsoleHelper;
use anyhow::Context;
use taco_config::DeployConfig;
use taco_registry::{find_entry, read_registry};

pub fn run(config: &DeployConfig, args: &LookupArgs) -> CommandResult {
    let path = config.registry_filepath(&args.domain)?;
    let entries =
        read_registry(&path).with_context(|| format!("failed to read {}", path.display()))?;
    let entry = find_entry(&entries, args.chain_id, &args.name)?;

    ConsoleHelper::info(["Contract:     ", entry.name.as_str()]);
    ConsoleHelper::info(["Chain ID:     ", entry.chain_id.to_string().as_str()]);
    ConsoleHelper::info(["Address:      ", entry.address.as_str()]);
    ConsoleHelper::info(["Tx hash:      ", entry.tx_hash.as_str()]);
    ConsoleHelper::info(["Block number: ", entry.block_number.to_string().as_str()]);
    ConsoleHelper::info(["Deployer:     ", entry.deployer.as_str()]);
    Ok(())
}
