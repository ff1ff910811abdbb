//! Registry entries from deployment records.

use crate::address::to_checksum_address;
use crate::entry::{ChainId, ContractName, RegistryEntry};
use crate::error::Result;
use crate::writer::{self, PersistOutcome};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Receipt of the transaction that deployed a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentReceipt {
    pub chain_id: ChainId,
    pub tx_hash: String,
    pub block_number: u64,
    /// Transaction sender.
    pub sender: String,
}

/// A contract instance produced by a deployment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedContract {
    /// On-chain contract type name.
    pub contract_type: String,
    pub address: String,
    pub abi: Value,
    pub receipt: DeploymentReceipt,
}

/// Registry name for `contract_type`: its alias in `registry_names` if it
/// has one, otherwise the type name itself.
pub fn registry_name(
    contract_type: &str,
    registry_names: &HashMap<ContractName, ContractName>,
) -> ContractName {
    registry_names
        .get(contract_type)
        .cloned()
        .unwrap_or_else(|| contract_type.to_string())
}

pub fn entry_from_deployment(
    deployment: &DeployedContract,
    registry_names: &HashMap<ContractName, ContractName>,
) -> Result<RegistryEntry> {
    Ok(RegistryEntry {
        chain_id: deployment.receipt.chain_id,
        name: registry_name(&deployment.contract_type, registry_names),
        address: to_checksum_address(&deployment.address)?,
        abi: deployment.abi.clone(),
        tx_hash: deployment.receipt.tx_hash.clone(),
        block_number: deployment.receipt.block_number,
        deployer: deployment.receipt.sender.clone(),
    })
}

pub fn entries_from_deployments(
    deployments: &[DeployedContract],
    registry_names: &HashMap<ContractName, ContractName>,
) -> Result<Vec<RegistryEntry>> {
    deployments
        .iter()
        .map(|deployment| entry_from_deployment(deployment, registry_names))
        .collect()
}

/// Builds registry entries from `deployments` and persists them to `output`.
pub fn registry_from_deployments(
    deployments: &[DeployedContract],
    output: impl AsRef<Path>,
    registry_names: &HashMap<ContractName, ContractName>,
) -> Result<PersistOutcome> {
    let entries = entries_from_deployments(deployments, registry_names)?;
    let outcome = writer::persist(&entries, output)?;
    info!(target: "taco", path = %outcome.path().display(), "registry written");
    Ok(outcome)
}
