//! Chain query facade.
//!
//! Registry entries are turned into live contract handles by a
//! [`ContractResolver`] supplied by the caller. This crate never talks to a
//! chain itself.

use crate::codec::read_registry;
use crate::entry::{find_entry, ChainId, ContractName, RegistryEntry};
use crate::error::{RegistryError, Result};
use std::collections::BTreeMap;
use std::path::Path;
use taco_config::DeployConfig;
use thiserror::Error;
use tracing::debug;

/// Errors reported by a chain client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("unknown contract type '{0}'")]
    UnknownContractType(String),

    #[error("provider error: {0}")]
    Provider(String),
}

/// Resolves a registry entry into a handle on the deployed contract.
pub trait ContractResolver {
    type Handle;

    fn resolve(&self, entry: &RegistryEntry) -> std::result::Result<Self::Handle, ChainError>;
}

/// Resolves every contract of the registry at `path`.
///
/// With a `chain_id` only that chain's entries are used; without one, a name
/// registered on more than one chain is rejected.
pub fn contracts_from_registry<R: ContractResolver>(
    path: impl AsRef<Path>,
    chain_id: Option<ChainId>,
    resolver: &R,
) -> Result<BTreeMap<ContractName, R::Handle>> {
    let entries: Vec<RegistryEntry> = read_registry(path)?
        .into_iter()
        .filter(|entry| chain_id.map_or(true, |id| entry.chain_id == id))
        .collect();

    let mut chains_by_name: BTreeMap<&str, Vec<ChainId>> = BTreeMap::new();
    for entry in &entries {
        chains_by_name
            .entry(entry.name.as_str())
            .or_default()
            .push(entry.chain_id);
    }
    if let Some((name, mut chain_ids)) = chains_by_name
        .into_iter()
        .find(|(_, chain_ids)| chain_ids.len() > 1)
    {
        chain_ids.sort_unstable();
        return Err(RegistryError::AmbiguousContract {
            name: name.to_string(),
            chain_ids,
        });
    }

    let mut contracts = BTreeMap::new();
    for entry in &entries {
        debug!(target: "taco", contract = %entry.name, chain_id = entry.chain_id, "resolving contract");
        contracts.insert(entry.name.clone(), resolver.resolve(entry)?);
    }
    Ok(contracts)
}

/// Resolves contract `name` from the registry published for `domain`.
pub fn get_contract<R: ContractResolver>(
    config: &DeployConfig,
    domain: &str,
    name: &str,
    chain_id: Option<ChainId>,
    resolver: &R,
) -> Result<R::Handle> {
    let path = config.registry_filepath(domain)?;
    let entries = read_registry(&path)?;
    let entry = find_entry(&entries, chain_id, name)?;
    resolver.resolve(entry).map_err(RegistryError::from)
}
