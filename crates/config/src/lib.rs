//! TACo Deployment Configuration
//!
//! Constants and file-backed settings shared by the registry tooling and the
//! `taco` command-line interface.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// TACo domains with a published contract registry.
pub const SUPPORTED_DOMAINS: &[&str] = &["lynx", "tapir", "mainnet"];

/// Directory holding the per-domain registry files.
pub const DEFAULT_ARTIFACTS_DIR: &str = "deployment/artifacts";

/// Extension of a registry file.
pub const REGISTRY_EXTENSION: &str = "json";

/// Extension used for the side file written when a direct write would
/// overwrite chain ids already present in the target registry.
pub const UNMERGED_EXTENSION: &str = "unmerged.json";

/// Configuration file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "taco.toml";

/// Default log level when neither `RUST_LOG` nor `--log-level` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("unsupported domain '{0}'")]
    UnsupportedDomain(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive (e.g. `info`, `taco=debug`)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Deployment tooling configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Directory holding `<domain>.json` registries
    pub artifacts_dir: PathBuf,
    /// Domains that may be resolved to a registry file
    pub domains: Vec<String>,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from(DEFAULT_ARTIFACTS_DIR),
            domains: SUPPORTED_DOMAINS.iter().map(|d| d.to_string()).collect(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DeployConfig {
    /// Loads configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether `domain` is one of the configured domains.
    pub fn supports_domain(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d == domain)
    }

    /// Path of the registry published for `domain`.
    pub fn registry_filepath(&self, domain: &str) -> Result<PathBuf> {
        if !self.supports_domain(domain) {
            return Err(ConfigError::UnsupportedDomain(domain.to_string()));
        }
        Ok(self
            .artifacts_dir
            .join(domain)
            .with_extension(REGISTRY_EXTENSION))
    }
}
