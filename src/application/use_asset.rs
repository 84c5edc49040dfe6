//! Use Asset Use Case
//!
//! Declare an asset and sync it in one step. The manifest only gains the
//! entry once the injection succeeded.

use crate::domain::ports::{AssetSource, FileWriter, LockfileRepository, ManifestRepository};
use crate::domain::value_objects::{validate_asset_name, AssetRef, AssetType};
use crate::error::CopsResult;

use super::inject::{InjectOutcome, Injector};
use super::ProjectFiles;

pub struct UseAssetUseCase<S, W, LR, MR>
where
    S: AssetSource,
    W: FileWriter,
    LR: LockfileRepository,
    MR: ManifestRepository,
{
    injector: Injector<S, W>,
    lockfile_repo: LR,
    manifest_repo: MR,
}

impl<S, W, LR, MR> UseAssetUseCase<S, W, LR, MR>
where
    S: AssetSource,
    W: FileWriter,
    LR: LockfileRepository,
    MR: ManifestRepository,
{
    pub fn new(injector: Injector<S, W>, lockfile_repo: LR, manifest_repo: MR) -> Self {
        Self {
            injector,
            lockfile_repo,
            manifest_repo,
        }
    }

    pub fn execute(
        &self,
        files: &ProjectFiles,
        asset_type: AssetType,
        name: &str,
        raw_ref: &str,
    ) -> CopsResult<InjectOutcome> {
        // Reject malformed input before reading or writing anything
        validate_asset_name(name)?;
        AssetRef::parse(raw_ref)?;

        let mut manifest = self.manifest_repo.load(files.manifest())?;
        let mut lock = self.lockfile_repo.load(files.lockfile())?;

        let outcome = self.injector.inject(&mut lock, asset_type, name, raw_ref)?;

        manifest.set(asset_type, name, raw_ref);
        self.manifest_repo.save(&manifest, files.manifest())?;
        self.lockfile_repo.save(&lock, files.lockfile())?;

        Ok(outcome)
    }
}
