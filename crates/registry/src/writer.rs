//! Registry writer.
//!
//! Writes are additive across chains only: entries for chain ids that the
//! target registry already holds are never combined with it, they are
//! diverted to a sibling `*.unmerged.json` file instead.

use crate::codec::{self, RegistryDocument};
use crate::entry::{ChainId, RegistryEntry};
use crate::error::{RegistryError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use taco_config::UNMERGED_EXTENSION;
use tracing::{info, warn};

/// Where a persist call put its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// No entries were given; nothing was written.
    Skipped(PathBuf),
    /// The target did not exist and was created.
    Created(PathBuf),
    /// New chain ids were added to an existing target.
    Updated(PathBuf),
    /// The target already held some of the chain ids, so the entries were
    /// written alone to a side file.
    Diverted {
        target: PathBuf,
        written: PathBuf,
        overlapping: Vec<ChainId>,
    },
}

impl PersistOutcome {
    /// Final location of the registry.
    pub fn path(&self) -> &Path {
        match self {
            Self::Skipped(path) | Self::Created(path) | Self::Updated(path) => path,
            Self::Diverted { written, .. } => written,
        }
    }

    /// Whether anything was written to disk.
    pub fn wrote(&self) -> bool {
        !matches!(self, Self::Skipped(_))
    }
}

/// Side file used when writing to `target` would overwrite existing chains.
///
/// `tapir.json` becomes `tapir.unmerged.json`.
pub fn unmerged_path(target: impl AsRef<Path>) -> PathBuf {
    target.as_ref().with_extension(UNMERGED_EXTENSION)
}

/// Persists `entries` to `target`.
pub fn persist(entries: &[RegistryEntry], target: impl AsRef<Path>) -> Result<PersistOutcome> {
    let target = target.as_ref();

    if entries.is_empty() {
        info!(target: "taco", path = %target.display(), "no registry entries provided");
        return Ok(PersistOutcome::Skipped(target.to_path_buf()));
    }

    let incoming = codec::group(entries);

    if !target.exists() {
        info!(target: "taco", path = %target.display(), "creating new registry");
        create_parent_dirs(target)?;
        write_document(&incoming, target)?;
        return Ok(PersistOutcome::Created(target.to_path_buf()));
    }

    info!(target: "taco", path = %target.display(), "updating existing registry");
    let bytes = fs::read(target).map_err(|err| RegistryError::io(target, err))?;
    let mut existing = codec::decode_document(&bytes).map_err(|err| err.at_path(target))?;

    let overlapping: Vec<ChainId> = codec::chain_ids(&incoming)
        .intersection(&codec::chain_ids(&existing))
        .copied()
        .collect();

    if !overlapping.is_empty() {
        let side = unmerged_path(target);
        warn!(
            target: "taco",
            path = %side.display(),
            chain_ids = ?overlapping,
            "cannot merge registries with overlapping chain ids; writing side file to avoid overwriting existing data"
        );
        write_document(&incoming, &side)?;
        return Ok(PersistOutcome::Diverted {
            target: target.to_path_buf(),
            written: side,
            overlapping,
        });
    }

    existing.extend(incoming);
    write_document(&existing, target)?;
    Ok(PersistOutcome::Updated(target.to_path_buf()))
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|err| RegistryError::io(parent, err))
        }
        _ => Ok(()),
    }
}

fn write_document(document: &RegistryDocument, path: &Path) -> Result<()> {
    let bytes = codec::encode_document(document)?;
    fs::write(path, bytes).map_err(|err| RegistryError::io(path, err))
}
