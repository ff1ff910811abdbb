//! Error types for the contract registry

use crate::chain::ChainError;
use crate::entry::ChainId;
use std::path::{Path, PathBuf};
use taco_config::ConfigError;
use thiserror::Error;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Registry errors
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The content is not a chain id -> contract name -> fields mapping, or
    /// an entry is missing one of its required fields.
    #[error("malformed registry{}: {reason}", describe_origin(.path))]
    MalformedRegistry {
        path: Option<PathBuf>,
        reason: String,
    },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode registry: {0}")]
    Json(#[from] serde_json::Error),

    /// The operator cancelled a merge while resolving a conflict.
    #[error("merge aborted by operator")]
    MergeAborted,

    #[error("failed to read conflict resolution: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    #[error("registry output must be a .json file: {0}")]
    InvalidOutputPath(PathBuf),

    #[error("contract '{name}' not found{}", describe_chain(.chain_id))]
    ContractNotFound {
        chain_id: Option<ChainId>,
        name: String,
    },

    #[error("contract '{name}' is registered on several chains {chain_ids:?}; a chain id is required")]
    AmbiguousContract { name: String, chain_ids: Vec<ChainId> },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Chain(#[from] ChainError),
}

impl RegistryError {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRegistry {
            path: None,
            reason: reason.into(),
        }
    }

    /// Attaches the file a malformed registry was read from.
    pub(crate) fn at_path(self, location: impl AsRef<Path>) -> Self {
        match self {
            Self::MalformedRegistry { path: None, reason } => Self::MalformedRegistry {
                path: Some(location.as_ref().to_path_buf()),
                reason,
            },
            other => other,
        }
    }
}

fn describe_origin(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

fn describe_chain(chain_id: &Option<ChainId>) -> String {
    chain_id
        .map(|id| format!(" on chain {id}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_includes_path_once_attached() {
        let err = RegistryError::malformed("expected an object").at_path("artifacts/lynx.json");
        assert_eq!(
            err.to_string(),
            "malformed registry at artifacts/lynx.json: expected an object"
        );
    }

    #[test]
    fn not_found_message_mentions_chain() {
        let err = RegistryError::ContractNotFound {
            chain_id: Some(80002),
            name: "Coordinator".into(),
        };
        assert_eq!(err.to_string(), "contract 'Coordinator' not found on chain 80002");
    }
}
