//! Cops - deterministic sync of Copilot assets from GitHub
//!
//! Projects declare instruction, agent, prompt and skill files in
//! `copilot.toml` as `org/repo/path@ref` references. Cops downloads them into
//! `.github/`, records what it fetched in `.cops.lock`, and reports drift
//! between the manifest, the lock and the files on disk.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{CheckReport, Injector, ProjectFiles, SyncReport};
pub use config::Config;
pub use domain::entities::{Lockfile, LockfileEntry, Manifest};
pub use domain::services::{check_assets, CheckItem, CheckStatus};
pub use domain::value_objects::{AssetRef, AssetType, ContentHash};
pub use error::{CopsError, CopsResult};
