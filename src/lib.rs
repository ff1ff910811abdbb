//! # TACo Deploy: contract registry tooling for TACo deployments
//!
//! TACo coordinates threshold access control through on-chain contracts.
//! Every deployment run records the contracts it produced in a JSON
//! registry, keyed by chain id and contract name. This library provides:
//!
//! - reading and writing registries without clobbering chains that are
//!   already recorded
//! - merging two registries, with conflicting entries settled by an
//!   operator
//! - building registry entries from deployment records
//! - resolving entries into contract handles through a caller-supplied
//!   chain client
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::collections::BTreeSet;
//! use taco_deploy::prelude::*;
//!
//! fn main() -> Result<(), RegistryError> {
//!     let mut resolver = ScriptedResolver::new([Decision::UseSecond]);
//!     let outcome = merge_registries(
//!         "deployment/artifacts/tapir.json",
//!         "deployment/artifacts/tapir-upgrade.json",
//!         "deployment/artifacts/tapir-merged.json",
//!         &BTreeSet::new(),
//!         &mut resolver,
//!     )?;
//!     println!("merged registry at {}", outcome.path().display());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - constants and `taco.toml` settings
//! - [`registry`] - entry model, codec, writer, merge engine and chain facade

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use taco_config as config;
pub use taco_registry as registry;

/// Common imports for registry tooling
pub mod prelude {
    pub use crate::config::DeployConfig;
    pub use crate::registry::{
        contracts_from_registry, get_contract, merge, merge_registries, persist, read_registry,
        registry_from_deployments, ConflictResolver, ContractResolver, Decision,
        DeployedContract, PersistOutcome, RegistryEntry, RegistryError, ScriptedResolver,
        SourceRegistry,
    };
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
