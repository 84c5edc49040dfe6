//! Configuration module for cops
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (COPS_*)
//! 3. Project config (.cops/config.toml)
//! 4. User config (~/.config/cops/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_overrides, ConfigWarning, PROJECT_CONFIG};
pub use types::{
    Config, GitHubConfig, DEFAULT_API_BASE, DEFAULT_LOCKFILE, DEFAULT_MANIFEST, DEFAULT_RAW_BASE,
    DEFAULT_TIMEOUT_SECS,
};
