//! Registry entry model.

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Network identifier of the chain a contract is deployed on.
pub type ChainId = u64;

/// Logical contract name. May be a remapped alias of the on-chain type name.
pub type ContractName = String;

/// Uniqueness key of an entry: one contract name per chain.
pub type EntryKey = (ChainId, ContractName);

/// One deployed-contract fact for one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub chain_id: ChainId,
    pub name: ContractName,
    /// Checksummed contract address.
    pub address: String,
    /// Interface description of the contract; passed through unmodified.
    pub abi: Value,
    /// Deployment transaction hash.
    pub tx_hash: String,
    pub block_number: u64,
    /// Address of the deployment transaction sender.
    pub deployer: String,
}

impl RegistryEntry {
    /// Returns the `(chain_id, name)` key of this entry.
    pub fn key(&self) -> EntryKey {
        (self.chain_id, self.name.clone())
    }
}

impl fmt::Display for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} (chain {})", self.name, self.address, self.chain_id)
    }
}

/// Finds the entry called `name`, optionally restricted to `chain_id`.
///
/// Without a chain id the name must be registered on exactly one chain.
pub fn find_entry<'a>(
    entries: &'a [RegistryEntry],
    chain_id: Option<ChainId>,
    name: &str,
) -> Result<&'a RegistryEntry> {
    let mut matches = entries
        .iter()
        .filter(|entry| entry.name == name)
        .filter(|entry| chain_id.map_or(true, |id| entry.chain_id == id));

    let Some(first) = matches.next() else {
        return Err(RegistryError::ContractNotFound {
            chain_id,
            name: name.to_string(),
        });
    };

    let rest: Vec<&RegistryEntry> = matches.collect();
    if rest.is_empty() {
        return Ok(first);
    }

    let mut chain_ids: Vec<ChainId> = std::iter::once(first)
        .chain(rest)
        .map(|entry| entry.chain_id)
        .collect();
    chain_ids.sort_unstable();
    chain_ids.dedup();
    Err(RegistryError::AmbiguousContract {
        name: name.to_string(),
        chain_ids,
    })
}
