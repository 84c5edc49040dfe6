//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CopsResult;

use super::loader::{self, ConfigWarning};

pub const DEFAULT_MANIFEST: &str = "copilot.toml";
pub const DEFAULT_LOCKFILE: &str = ".cops.lock";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote host configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// REST API root
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Raw content root
    #[serde(default = "default_raw_base")]
    pub raw_base: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GitHubConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            raw_base: default_raw_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_raw_base() -> String {
    DEFAULT_RAW_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_manifest() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST)
}

fn default_lockfile() -> PathBuf {
    PathBuf::from(DEFAULT_LOCKFILE)
}

/// Main configuration structure
///
/// ```toml
/// manifest = "copilot.toml"
/// lockfile = ".cops.lock"
///
/// [github]
/// api_base = "https://api.github.com"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Manifest path, relative to the project root
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Lock file path, relative to the project root
    #[serde(default = "default_lockfile")]
    pub lockfile: PathBuf,

    #[serde(default)]
    pub github: GitHubConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            lockfile: default_lockfile(),
            github: GitHubConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CopsResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CopsResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (COPS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
