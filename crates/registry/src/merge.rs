//! Registry merge engine.
//!
//! Two independently captured registries are reconciled entry by entry,
//! keyed by `(chain_id, name)`. A name registered on different chains in the
//! two sources is two facts and both are kept. Entries in both sources that
//! share chain id and name are conflicts, and those are always settled by a
//! [`ConflictResolver`]; there is no automatic preference.

use crate::codec;
use crate::entry::{ContractName, EntryKey, RegistryEntry};
use crate::error::{RegistryError, Result};
use crate::writer::{self, PersistOutcome};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::io;
use std::path::Path;
use taco_config::REGISTRY_EXTENSION;
use tracing::{debug, info, warn};

/// Operator decision for one conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Keep the entry from the first registry.
    UseFirst,
    /// Keep the entry from the second registry.
    UseSecond,
    /// Cancel the whole merge.
    Abort,
}

/// Two entries with the same chain id and name, plus where each came from.
#[derive(Debug, Clone, Copy)]
pub struct Conflict<'a> {
    pub first: &'a RegistryEntry,
    pub first_origin: &'a str,
    pub second: &'a RegistryEntry,
    pub second_origin: &'a str,
}

/// Settles conflicts during a merge.
pub trait ConflictResolver {
    fn resolve(&mut self, conflict: &Conflict<'_>) -> io::Result<Decision>;
}

/// Resolver that replays a fixed sequence of decisions.
///
/// Every conflict it is asked about is recorded as its `(chain_id, name)`
/// key. Running out of decisions aborts the merge.
#[derive(Debug, Default)]
pub struct ScriptedResolver {
    decisions: VecDeque<Decision>,
    prompts: Vec<EntryKey>,
}

impl ScriptedResolver {
    pub fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Conflicts presented so far, in order.
    pub fn prompts(&self) -> &[EntryKey] {
        &self.prompts
    }
}

impl ConflictResolver for ScriptedResolver {
    fn resolve(&mut self, conflict: &Conflict<'_>) -> io::Result<Decision> {
        self.prompts.push(conflict.first.key());
        Ok(self.decisions.pop_front().unwrap_or(Decision::Abort))
    }
}

/// A decoded registry together with a label naming where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRegistry {
    pub origin: String,
    pub entries: Vec<RegistryEntry>,
}

impl SourceRegistry {
    pub fn new(origin: impl Into<String>, entries: Vec<RegistryEntry>) -> Self {
        Self {
            origin: origin.into(),
            entries,
        }
    }

    /// Decodes registry bytes.
    pub fn from_bytes(origin: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        Ok(Self::new(origin, codec::decode(bytes)?))
    }

    /// Reads the registry file at `path`; the path becomes the origin.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let entries = codec::read_registry(path)?;
        Ok(Self::new(path.display().to_string(), entries))
    }

    fn keyed<'a>(
        &'a self,
        deprecated: &BTreeSet<ContractName>,
    ) -> BTreeMap<EntryKey, &'a RegistryEntry> {
        self.entries
            .iter()
            .filter(|entry| !deprecated.contains(&entry.name))
            .map(|entry| (entry.key(), entry))
            .collect()
    }
}

/// Reconciles two registries into one flat entry list.
///
/// Entries named in `deprecated` are dropped from both sides. The result is
/// ordered by chain id, then name.
pub fn merge(
    first: &SourceRegistry,
    second: &SourceRegistry,
    deprecated: &BTreeSet<ContractName>,
    resolver: &mut dyn ConflictResolver,
) -> Result<Vec<RegistryEntry>> {
    let left = first.keyed(deprecated);
    let right = second.keyed(deprecated);

    let dropped = first
        .entries
        .iter()
        .chain(&second.entries)
        .filter(|entry| deprecated.contains(&entry.name))
        .count();
    if dropped > 0 {
        info!(target: "taco", dropped, "excluded deprecated contracts from merge");
    }

    let keys: BTreeSet<&EntryKey> = left.keys().chain(right.keys()).collect();
    let mut merged = Vec::with_capacity(keys.len());

    for key in keys {
        let selected = match (left.get(key), right.get(key)) {
            (Some(a), Some(b)) => {
                warn!(
                    target: "taco",
                    chain_id = key.0,
                    contract = %key.1,
                    "conflict detected"
                );
                let conflict = Conflict {
                    first: *a,
                    first_origin: &first.origin,
                    second: *b,
                    second_origin: &second.origin,
                };
                match resolver.resolve(&conflict).map_err(RegistryError::Prompt)? {
                    Decision::UseFirst => *a,
                    Decision::UseSecond => *b,
                    Decision::Abort => {
                        warn!(target: "taco", "merge aborted");
                        return Err(RegistryError::MergeAborted);
                    }
                }
            }
            (Some(a), _) => *a,
            (None, Some(b)) => *b,
            (None, None) => continue,
        };

        debug!(
            target: "taco",
            chain_id = selected.chain_id,
            contract = %selected.name,
            address = %selected.address,
            "selected entry"
        );
        merged.push(selected.clone());
    }

    Ok(merged)
}

/// Merges two registry files and persists the result to `output`.
///
/// Both inputs are decoded before any conflict is presented. An aborted merge
/// writes nothing.
pub fn merge_registries(
    first: impl AsRef<Path>,
    second: impl AsRef<Path>,
    output: impl AsRef<Path>,
    deprecated: &BTreeSet<ContractName>,
    resolver: &mut dyn ConflictResolver,
) -> Result<PersistOutcome> {
    let output = output.as_ref();
    validate_output_path(output)?;

    let first = SourceRegistry::read(first)?;
    let second = SourceRegistry::read(second)?;

    let merged = merge(&first, &second, deprecated, resolver)?;
    let outcome = writer::persist(&merged, output)?;
    info!(
        target: "taco",
        path = %outcome.path().display(),
        entries = merged.len(),
        "merged registry written"
    );
    Ok(outcome)
}

fn validate_output_path(output: &Path) -> Result<()> {
    match output.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == REGISTRY_EXTENSION => Ok(()),
        _ => Err(RegistryError::InvalidOutputPath(output.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(chain_id: u64, name: &str, address: &str) -> RegistryEntry {
        RegistryEntry {
            chain_id,
            name: name.to_string(),
            address: address.to_string(),
            abi: json!([]),
            tx_hash: format!("0x{chain_id:x}"),
            block_number: chain_id,
            deployer: "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb".to_string(),
        }
    }

    #[test]
    fn identical_entries_still_prompt() {
        let shared = entry(1, "Coordinator", "0xAA");
        let a = SourceRegistry::new("a.json", vec![shared.clone()]);
        let b = SourceRegistry::new("b.json", vec![shared.clone()]);
        let mut resolver = ScriptedResolver::new([Decision::UseFirst]);

        let merged = merge(&a, &b, &BTreeSet::new(), &mut resolver).unwrap();
        assert_eq!(merged, vec![shared]);
        assert_eq!(resolver.prompts(), &[(1, "Coordinator".to_string())]);
    }

    #[test]
    fn conflict_reports_both_origins() {
        struct Capture(Vec<(String, String)>);
        impl ConflictResolver for Capture {
            fn resolve(&mut self, conflict: &Conflict<'_>) -> io::Result<Decision> {
                self.0.push((
                    conflict.first_origin.to_string(),
                    conflict.second_origin.to_string(),
                ));
                Ok(Decision::UseSecond)
            }
        }

        let a = SourceRegistry::new("tapir.json", vec![entry(80002, "Coordinator", "0xAA")]);
        let b = SourceRegistry::new("upgrade.json", vec![entry(80002, "Coordinator", "0xBB")]);
        let mut capture = Capture(Vec::new());

        let merged = merge(&a, &b, &BTreeSet::new(), &mut capture).unwrap();
        assert_eq!(merged[0].address, "0xBB");
        assert_eq!(
            capture.0,
            vec![("tapir.json".to_string(), "upgrade.json".to_string())]
        );
    }

    #[test]
    fn resolver_io_error_is_surfaced() {
        struct Broken;
        impl ConflictResolver for Broken {
            fn resolve(&mut self, _: &Conflict<'_>) -> io::Result<Decision> {
                Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))
            }
        }

        let a = SourceRegistry::new("a", vec![entry(1, "Coordinator", "0xAA")]);
        let b = SourceRegistry::new("b", vec![entry(1, "Coordinator", "0xBB")]);
        assert!(matches!(
            merge(&a, &b, &BTreeSet::new(), &mut Broken),
            Err(RegistryError::Prompt(_))
        ));
    }

    #[test]
    fn output_must_be_json() {
        assert!(validate_output_path(Path::new("out/merged.json")).is_ok());
        assert!(matches!(
            validate_output_path(Path::new("out/merged.yml")),
            Err(RegistryError::InvalidOutputPath(_))
        ));
        assert!(validate_output_path(Path::new("out/merged")).is_err());
    }
}
