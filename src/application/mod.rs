//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SyncUseCase` - Reconcile every declared asset, collect failures, save the lock
//! - `UseAssetUseCase` - Inject one asset and declare it in the manifest
//! - `UnuseUseCase` - Remove one asset from disk, lock and manifest
//! - `CheckUseCase` - Drift report without touching anything
//!
//! ## Services
//!
//! - `Injector` - Resolve, fetch, write and record a single asset

use std::path::{Path, PathBuf};

pub mod check;
pub mod inject;
pub mod sync;
pub mod unuse;
pub mod use_asset;

#[cfg(test)]
pub(crate) mod test_support;

pub use check::{CheckReport, CheckUseCase};
pub use inject::{Clock, InjectOutcome, Injector};
pub use sync::{SyncFailure, SyncReport, SyncUseCase};
pub use unuse::{remove_asset, UnuseUseCase};
pub use use_asset::UseAssetUseCase;

/// Locations of the two state files a use case reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFiles {
    pub manifest: PathBuf,
    pub lockfile: PathBuf,
}

impl ProjectFiles {
    pub fn new(manifest: impl Into<PathBuf>, lockfile: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            lockfile: lockfile.into(),
        }
    }

    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    pub fn lockfile(&self) -> &Path {
        &self.lockfile
    }
}
