//! Injector - reconciles one declared asset with the remote host
//!
//! Resolve → fetch → write → record. Each step can fail; failures are
//! returned as values and nothing is retried except the single `.md`
//! file-name fallback for single-file assets.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::entities::{Lockfile, LockfileEntry, UNKNOWN_REVISION};
use crate::domain::ports::{AssetSource, FileWriter, FsError};
use crate::domain::value_objects::{
    is_under_root, normalize_lock_path, relative_to_root, AssetRef, AssetType, ContentHash,
    SafePath,
};
use crate::error::{CopsError, CopsResult};

/// Extension tried when the exact path is not found
const MARKDOWN_EXTENSION: &str = ".md";

/// Source of sync timestamps
pub type Clock = fn() -> DateTime<Utc>;

/// What a successful injection produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectOutcome {
    pub asset_type: AssetType,
    pub name: String,
    /// Project-relative destination (file, or directory for skills)
    pub target_path: PathBuf,
    /// Commit the content was taken from, or `unknown`
    pub revision: String,
    pub checksum: ContentHash,
    /// Number of files written
    pub files_written: usize,
}

/// Content that landed on disk for one asset
struct Written {
    revision: String,
    checksum: ContentHash,
    files: usize,
}

/// Reconciliation engine
///
/// Generic over the remote source and the file writer so tests can run
/// against in-memory fakes.
pub struct Injector<S, W>
where
    S: AssetSource,
    W: FileWriter,
{
    source: S,
    fs: W,
    clock: Clock,
}

impl<S, W> Injector<S, W>
where
    S: AssetSource,
    W: FileWriter,
{
    pub fn new(source: S, fs: W) -> Self {
        Self {
            source,
            fs,
            clock: Utc::now,
        }
    }

    /// Replace the timestamp source (tests use a fixed clock)
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn file_writer(&self) -> &W {
        &self.fs
    }

    /// Download one asset, write it to its target path and replace its lock
    /// entry.
    ///
    /// The lock is only touched on success. An invalid name or reference fails
    /// before any remote call or write.
    pub fn inject(
        &self,
        lock: &mut Lockfile,
        asset_type: AssetType,
        name: &str,
        raw_ref: &str,
    ) -> CopsResult<InjectOutcome> {
        let target_path = asset_type.checked_target_path(name)?;
        let parsed = AssetRef::parse(raw_ref)?;
        let reference = self.resolve_ref(&parsed)?;

        let written = if asset_type.is_directory() {
            self.inject_directory(&reference, &target_path)?
        } else {
            self.inject_file(&reference, &target_path)?
        };

        lock.set(LockfileEntry::new(
            asset_type,
            name,
            raw_ref,
            written.revision.clone(),
            normalize_lock_path(&target_path),
            written.checksum.clone(),
            (self.clock)(),
        ));

        info!(
            asset = %Lockfile::make_key(asset_type, name),
            target = %target_path.display(),
            revision = %written.revision,
            "asset synced"
        );

        Ok(InjectOutcome {
            asset_type,
            name: name.to_string(),
            target_path,
            revision: written.revision,
            checksum: written.checksum,
            files_written: written.files,
        })
    }

    /// Substitute `latest` with the default branch; pass anything else through
    fn resolve_ref(&self, reference: &AssetRef) -> CopsResult<AssetRef> {
        if !reference.is_latest() {
            return Ok(reference.clone());
        }

        debug!(repo = %reference.repo_full_name(), "resolving default branch");
        let resolved =
            self.source
                .resolve_ref(reference)
                .map_err(|e| CopsError::RefResolutionFailed {
                    reference: reference.raw(),
                    message: e.to_string(),
                })?;
        debug!(repo = %reference.repo_full_name(), branch = resolved.git_ref(), "default branch resolved");
        Ok(resolved)
    }

    /// Single-file asset: the revision is resolved before anything is fetched
    /// so a failure there leaves the disk untouched.
    fn inject_file(&self, reference: &AssetRef, target: &Path) -> CopsResult<Written> {
        let revision = self.resolve_revision(reference)?;
        let content = self.download_with_fallback(reference)?;

        if self.fs.exists(target) {
            debug!(path = %target.display(), "removing existing target");
            self.fs.remove(target).map_err(|e| write_failed(target, e))?;
        }
        if let Some(parent) = target.parent() {
            self.fs
                .create_dir_all(parent)
                .map_err(|e| write_failed(parent, e))?;
        }
        self.fs
            .write(target, &content)
            .map_err(|e| write_failed(target, e))?;

        Ok(Written {
            revision,
            checksum: ContentHash::from_bytes(&content),
            files: 1,
        })
    }

    /// Directory asset: every file is fetched and written first, the revision
    /// is resolved last and may fall back to `unknown`.
    ///
    /// A failed file aborts the batch. Files already written stay on disk and
    /// no lock entry is recorded.
    fn inject_directory(&self, reference: &AssetRef, target_dir: &Path) -> CopsResult<Written> {
        let root = reference.path().trim_end_matches('/');

        debug!(reference = %reference, "listing directory");
        let listing =
            self.source
                .list_directory(reference)
                .map_err(|e| CopsError::DirectoryListingFailed {
                    reference: reference.raw(),
                    message: e.to_string(),
                })?;

        let files: Vec<_> = listing
            .into_iter()
            .filter(|entry| entry.is_blob() && is_under_root(&entry.path, root))
            .collect();
        if files.is_empty() {
            return Err(CopsError::DirectoryListingFailed {
                reference: reference.raw(),
                message: format!("no files found under {}", root),
            });
        }

        self.fs
            .create_dir_all(target_dir)
            .map_err(|e| write_failed(target_dir, e))?;

        let mut contents: BTreeMap<String, Vec<u8>> = BTreeMap::new();
        for entry in &files {
            let rel = relative_to_root(&entry.path, root);
            let safe = SafePath::new(&rel).map_err(|e| CopsError::WriteFailed {
                path: target_dir.join(&rel),
                message: e.to_string(),
            })?;

            let file_ref = reference.with_path(&entry.path);
            let content = self.download_exact(&file_ref)?;

            let dest = target_dir.join(safe.as_path());
            if let Some(parent) = dest.parent() {
                self.fs
                    .create_dir_all(parent)
                    .map_err(|e| write_failed(parent, e))?;
            }
            self.fs
                .write(&dest, &content)
                .map_err(|e| write_failed(&dest, e))?;

            contents.insert(rel, content);
        }

        let revision = match self.source.resolve_revision(reference) {
            Ok(revision) => revision,
            Err(e) => {
                warn!(reference = %reference, error = %e, "could not resolve revision, recording '{}'", UNKNOWN_REVISION);
                UNKNOWN_REVISION.to_string()
            }
        };

        Ok(Written {
            revision,
            checksum: ContentHash::aggregate(&contents),
            files: contents.len(),
        })
    }

    fn resolve_revision(&self, reference: &AssetRef) -> CopsResult<String> {
        debug!(reference = %reference, "resolving revision");
        self.source
            .resolve_revision(reference)
            .map_err(|e| CopsError::RevisionResolutionFailed {
                reference: reference.raw(),
                message: e.to_string(),
            })
    }

    /// Try the exact path, then once more with `.md` appended if the host
    /// said "not found" and the path doesn't already end in `.md`.
    fn download_with_fallback(&self, reference: &AssetRef) -> CopsResult<Vec<u8>> {
        let mut candidates = vec![reference.path().to_string()];
        if !reference.path().ends_with(MARKDOWN_EXTENSION) {
            candidates.push(format!("{}{}", reference.path(), MARKDOWN_EXTENSION));
        }

        for (attempt, candidate) in candidates.iter().enumerate() {
            let candidate_ref = reference.with_path(candidate);
            debug!(reference = %candidate_ref, "downloading");
            match self.source.download_file(&candidate_ref) {
                Ok(content) => {
                    if attempt > 0 {
                        warn!(requested = reference.path(), used = %candidate, "exact path not found, used markdown fallback");
                    }
                    return Ok(content);
                }
                Err(e) if e.is_not_found() => continue,
                Err(e) => {
                    return Err(CopsError::ContentFetchFailed {
                        reference: candidate_ref.raw(),
                        message: e.to_string(),
                    })
                }
            }
        }

        Err(CopsError::ContentNotFound {
            reference: reference.raw(),
            tried: candidates,
        })
    }

    /// Fetch a listed file by its exact path
    fn download_exact(&self, reference: &AssetRef) -> CopsResult<Vec<u8>> {
        debug!(reference = %reference, "downloading");
        self.source.download_file(reference).map_err(|e| {
            if e.is_not_found() {
                CopsError::ContentNotFound {
                    reference: reference.raw(),
                    tried: vec![reference.path().to_string()],
                }
            } else {
                CopsError::ContentFetchFailed {
                    reference: reference.raw(),
                    message: e.to_string(),
                }
            }
        })
    }
}

fn write_failed(path: &Path, err: FsError) -> CopsError {
    CopsError::WriteFailed {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
