//! Unuse Use Case
//!
//! Removes a declared asset: target path, lock entry, manifest entry, in
//! that order. Nothing changes if the asset was never declared.

use std::path::PathBuf;

use tracing::info;

use crate::domain::entities::{Lockfile, Manifest};
use crate::domain::ports::{FileWriter, LockfileRepository, ManifestRepository};
use crate::domain::value_objects::AssetType;
use crate::error::{CopsError, CopsResult};

use super::ProjectFiles;

/// Remove one declared asset from disk, lock and manifest.
///
/// Fails before any mutation with `InvalidAssetName` when the name could
/// escape `.github/<type>/`, or `NotDeclared` when the manifest has no such
/// entry. Returns the removed target path.
pub fn remove_asset<W: FileWriter>(
    fs: &W,
    manifest: &mut Manifest,
    lock: &mut Lockfile,
    asset_type: AssetType,
    name: &str,
) -> CopsResult<PathBuf> {
    let target = asset_type.checked_target_path(name)?;
    if !manifest.contains(asset_type, name) {
        return Err(CopsError::NotDeclared {
            asset_type: asset_type.to_string(),
            name: name.to_string(),
        });
    }

    fs.remove(&target).map_err(|e| CopsError::WriteFailed {
        path: target.clone(),
        message: e.to_string(),
    })?;
    lock.remove(asset_type, name);
    manifest.remove(asset_type, name);

    info!(asset = %Lockfile::make_key(asset_type, name), path = %target.display(), "asset removed");
    Ok(target)
}

pub struct UnuseUseCase<W, LR, MR>
where
    W: FileWriter,
    LR: LockfileRepository,
    MR: ManifestRepository,
{
    fs: W,
    lockfile_repo: LR,
    manifest_repo: MR,
}

impl<W, LR, MR> UnuseUseCase<W, LR, MR>
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

    pub fn execute(
        &self,
        files: &ProjectFiles,
        asset_type: AssetType,
        name: &str,
    ) -> CopsResult<PathBuf> {
        let mut manifest = self.manifest_repo.load(files.manifest())?;
        let mut lock = self.lockfile_repo.load(files.lockfile())?;

        let removed = remove_asset(&self.fs, &mut manifest, &mut lock, asset_type, name)?;

        self.manifest_repo.save(&manifest, files.manifest())?;
        self.lockfile_repo.save(&lock, files.lockfile())?;
        Ok(removed)
    }
}
