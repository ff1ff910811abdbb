//! # TACo Contract Registry
//!
//! Reads, writes and reconciles the JSON contract registries produced by TACo
//! deployments. A registry maps each chain id to the contracts deployed on
//! it; every contract carries its address, ABI and deployment provenance.
//!
//! - [`codec`] converts between registry files and [`RegistryEntry`] lists.
//! - [`writer`] persists entries, diverting writes that would overwrite
//!   existing chains to a side file.
//! - [`merge`] combines two registries, asking a [`ConflictResolver`] to
//!   settle every contract both sources register on the same chain.
//! - [`deployment`] builds entries from deployment records.
//! - [`chain`] resolves entries into live contract handles through a
//!   caller-supplied [`ContractResolver`].

pub mod address;
pub mod chain;
pub mod codec;
pub mod deployment;
pub mod entry;
pub mod error;
pub mod merge;
pub mod writer;

pub use address::{is_checksum_address, to_checksum_address};
pub use chain::{contracts_from_registry, get_contract, ChainError, ContractResolver};
pub use codec::{decode, encode, read_registry};
pub use deployment::{
    entries_from_deployments, entry_from_deployment, registry_from_deployments, DeployedContract,
    DeploymentReceipt,
};
pub use entry::{find_entry, ChainId, ContractName, EntryKey, RegistryEntry};
pub use error::{RegistryError, Result};
pub use merge::{
    merge, merge_registries, Conflict, ConflictResolver, Decision, ScriptedResolver,
    SourceRegistry,
};
pub use writer::{persist, unmerged_path, PersistOutcome};
