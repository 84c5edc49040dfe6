//! Check Use Case
//!
//! Reports drift between the manifest, the lock and the working tree.
//! Read-only: nothing is fetched, written or saved.

use crate::domain::ports::{FileWriter, LockfileRepository, ManifestRepository};
use crate::domain::services::{check_assets, CheckItem};
use crate::error::CopsResult;

use super::ProjectFiles;

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// One item per declared asset, in manifest order
    pub items: Vec<CheckItem>,
    /// Number of items that are not OK
    pub issues: usize,
}

impl CheckReport {
    pub fn from_items(items: Vec<CheckItem>) -> Self {
        let issues = items.iter().filter(|item| !item.status.is_ok()).count();
        Self { items, issues }
    }

    pub fn is_clean(&self) -> bool {
        self.issues == 0
    }
}

pub struct CheckUseCase<W, LR, MR>
where
    W: FileWriter,
    LR: LockfileRepository,
    MR: ManifestRepository,
{
    fs: W,
    lockfile_repo: LR,
    manifest_repo: MR,
}

impl<W, LR, MR> CheckUseCase<W, LR, MR>
where
    W: FileWriter,
    LR: LockfileRepository,
    MR: ManifestRepository,
{
    pub fn new(fs: W, lockfile_repo: LR, manifest_repo: MR) -> Self {
        Self {
            fs,
            lockfile_repo,
            manifest_repo,
        }
    }

    pub fn execute(&self, files: &ProjectFiles) -> CopsResult<CheckReport> {
        let manifest = self.manifest_repo.load(files.manifest())?;
        let lock = self.lockfile_repo.load(files.lockfile())?;

        let items = check_assets(&manifest.entries(), &lock, |path| self.fs.exists(path));
        Ok(CheckReport::from_items(items))
    }
}
