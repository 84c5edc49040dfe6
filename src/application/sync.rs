//! Sync Use Case
//!
//! Reconciles every declared asset in manifest order. A failing asset does
//! not stop the run; failures are collected and the lock accumulated from the
//! successful assets is saved regardless.

use tracing::info;

use crate::domain::entities::Lockfile;
use crate::domain::ports::{
    AssetSource, FileWriter, LockfileRepository, ManifestRepository, NoopEventSink, SyncEvent,
    SyncEventSink,
};
use crate::domain::value_objects::AssetType;
use crate::error::{CopsError, CopsResult};

use super::inject::{InjectOutcome, Injector};
use super::ProjectFiles;

/// One asset that could not be synced
#[derive(Debug)]
pub struct SyncFailure {
    pub asset_type: AssetType,
    pub name: String,
    pub reference: String,
    pub error: CopsError,
}

impl SyncFailure {
    pub fn key(&self) -> String {
        Lockfile::make_key(self.asset_type, &self.name)
    }
}

/// Result of a sync run
#[derive(Debug, Default)]
pub struct SyncReport {
    pub synced: Vec<InjectOutcome>,
    pub failures: Vec<SyncFailure>,
}

impl SyncReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of declared assets that were attempted
    pub fn total(&self) -> usize {
        self.synced.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

pub struct SyncUseCase<S, W, LR, MR>
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

impl<S, W, LR, MR> SyncUseCase<S, W, LR, MR>
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

    pub fn execute(&self, files: &ProjectFiles) -> CopsResult<SyncReport> {
        self.execute_with_events(files, NoopEventSink)
    }

    /// Run the sync, reporting per-asset progress to `events`.
    ///
    /// Only manifest or lock I/O errors are returned as `Err`; asset failures
    /// end up in the report.
    pub fn execute_with_events<E: SyncEventSink>(
        &self,
        files: &ProjectFiles,
        events: E,
    ) -> CopsResult<SyncReport> {
        let manifest = self.manifest_repo.load(files.manifest())?;
        let entries = manifest.entries();
        if entries.is_empty() {
            info!(manifest = %files.manifest().display(), "no assets declared");
            return Ok(SyncReport::default());
        }

        let mut lock = self.lockfile_repo.load(files.lockfile())?;
        let mut report = SyncReport::default();

        events.on_event(SyncEvent::Started {
            asset_count: entries.len(),
        });

        for (index, entry) in entries.into_iter().enumerate() {
            events.on_event(SyncEvent::AssetStarted {
                index,
                asset_type: entry.asset_type,
                name: entry.name.clone(),
                reference: entry.reference.clone(),
            });

            match self
                .injector
                .inject(&mut lock, entry.asset_type, &entry.name, &entry.reference)
            {
                Ok(outcome) => {
                    events.on_event(SyncEvent::AssetSynced {
                        index,
                        asset_type: outcome.asset_type,
                        name: outcome.name.clone(),
                        target_path: outcome.target_path.clone(),
                        revision: outcome.revision.clone(),
                        files: outcome.files_written,
                    });
                    report.synced.push(outcome);
                }
                Err(error) => {
                    info!(
                        asset = %Lockfile::make_key(entry.asset_type, &entry.name),
                        error = %error,
                        "asset failed to sync"
                    );
                    events.on_event(SyncEvent::AssetFailed {
                        index,
                        asset_type: entry.asset_type,
                        name: entry.name.clone(),
                        error: error.to_string(),
                    });
                    report.failures.push(SyncFailure {
                        asset_type: entry.asset_type,
                        name: entry.name,
                        reference: entry.reference,
                        error,
                    });
                }
            }
        }

        self.lockfile_repo.save(&lock, files.lockfile())?;

        events.on_event(SyncEvent::Completed {
            synced: report.synced.len(),
            failed: report.failures.len(),
        });

        Ok(report)
    }
}
