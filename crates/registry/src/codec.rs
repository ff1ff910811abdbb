//! Registry codec.
//!
//! On disk a registry is a JSON object keyed by chain id, then by contract
//! name:
//!
//! ```json
//! {
//!     "80002": {
//!         "Coordinator": {
//!             "address": "0x...",
//!             "abi": [...],
//!             "tx_hash": "0x...",
//!             "block_number": 5012345,
//!             "deployer": "0x..."
//!         }
//!     }
//! }
//! ```
//!
//! Chain ids are strings on disk and integers in memory. Both levels are
//! written in ascending key order so that registry diffs stay small.

use crate::entry::{ChainId, ContractName, RegistryEntry};
use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Per-entry fields stored under `chain id -> contract name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct EntryRecord {
    pub address: String,
    pub abi: Value,
    pub tx_hash: String,
    pub block_number: u64,
    pub deployer: String,
}

/// Nested on-disk mapping.
pub(crate) type RegistryDocument = BTreeMap<ChainId, BTreeMap<ContractName, EntryRecord>>;

/// Parses registry bytes into entries.
pub fn decode(bytes: &[u8]) -> Result<Vec<RegistryEntry>> {
    Ok(flatten(decode_document(bytes)?))
}

/// Serializes entries into registry bytes.
///
/// Entries sharing a `(chain_id, name)` key collapse into one; the later
/// entry wins.
pub fn encode(entries: &[RegistryEntry]) -> Result<Vec<u8>> {
    encode_document(&group(entries))
}

/// Reads and decodes the registry file at `path`.
pub fn read_registry(path: impl AsRef<Path>) -> Result<Vec<RegistryEntry>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| RegistryError::io(path, err))?;
    decode(&bytes).map_err(|err| err.at_path(path))
}

pub(crate) fn decode_document(bytes: &[u8]) -> Result<RegistryDocument> {
    serde_json::from_slice(bytes).map_err(|err| RegistryError::malformed(err.to_string()))
}

pub(crate) fn encode_document(document: &RegistryDocument) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    document.serialize(&mut serializer)?;
    buffer.push(b'\n');
    Ok(buffer)
}

/// Groups entries by chain id, then by name.
pub(crate) fn group(entries: &[RegistryEntry]) -> RegistryDocument {
    let mut document = RegistryDocument::new();
    for entry in entries {
        document.entry(entry.chain_id).or_default().insert(
            entry.name.clone(),
            EntryRecord {
                address: entry.address.clone(),
                abi: entry.abi.clone(),
                tx_hash: entry.tx_hash.clone(),
                block_number: entry.block_number,
                deployer: entry.deployer.clone(),
            },
        );
    }
    document
}

pub(crate) fn flatten(document: RegistryDocument) -> Vec<RegistryEntry> {
    document
        .into_iter()
        .flat_map(|(chain_id, contracts)| {
            contracts.into_iter().map(move |(name, record)| RegistryEntry {
                chain_id,
                name,
                address: record.address,
                abi: record.abi,
                tx_hash: record.tx_hash,
                block_number: record.block_number,
                deployer: record.deployer,
            })
        })
        .collect()
}

pub(crate) fn chain_ids(document: &RegistryDocument) -> BTreeSet<ChainId> {
    document.keys().copied().collect()
}
