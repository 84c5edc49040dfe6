//! Drift Domain Service
//!
//! Compares declared state, lock state and filesystem presence. Pure: the
//! only I/O is whatever the supplied existence predicate does.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{DeclaredEntry, Lockfile};
use crate::domain::value_objects::AssetType;

/// Sync status of a single declared asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// File exists and the lock records the declared reference
    Ok,
    /// Not on disk, not in the lock
    NeverSynced,
    /// In the lock but the file was deleted
    FileMissing,
    /// On disk but no lock entry
    NotInLock,
    /// Lock reference differs from the manifest reference
    RefMismatch,
}

impl CheckStatus {
    /// Classify one asset. Rows are checked in order, first match wins.
    pub fn classify(file_exists: bool, locked: bool, refs_match: bool) -> Self {
        match (file_exists, locked) {
            (false, false) => CheckStatus::NeverSynced,
            (false, true) => CheckStatus::FileMissing,
            (true, false) => CheckStatus::NotInLock,
            (true, true) if !refs_match => CheckStatus::RefMismatch,
            (true, true) => CheckStatus::Ok,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CheckStatus::Ok => "ok",
            CheckStatus::NeverSynced => "never synced",
            CheckStatus::FileMissing => "file missing",
            CheckStatus::NotInLock => "not in lock",
            CheckStatus::RefMismatch => "ref mismatch",
        };
        f.write_str(label)
    }
}

/// Outcome of checking one declared entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckItem {
    pub asset_type: AssetType,
    pub name: String,
    pub status: CheckStatus,
    pub target_path: PathBuf,
    /// Reference from the manifest
    pub manifest_ref: String,
    /// Reference recorded in the lock, if any
    pub lock_ref: Option<String>,
    /// When the lock entry was written, if any
    pub synced_at: Option<DateTime<Utc>>,
}

/// Classify every declared entry against the lock and the filesystem.
///
/// Returns exactly one item per entry, in input order. Never mutates the
/// lock.
pub fn check_assets<F>(entries: &[DeclaredEntry], lock: &Lockfile, exists: F) -> Vec<CheckItem>
where
    F: Fn(&Path) -> bool,
{
    entries
        .iter()
        .map(|entry| {
            let target_path = entry.asset_type.target_path(&entry.name);
            let file_exists = exists(&target_path);
            let lock_entry = lock.get(entry.asset_type, &entry.name);
            let refs_match = lock_entry.is_some_and(|e| e.reference() == entry.reference);

            CheckItem {
                asset_type: entry.asset_type,
                name: entry.name.clone(),
                status: CheckStatus::classify(file_exists, lock_entry.is_some(), refs_match),
                target_path,
                manifest_ref: entry.reference.clone(),
                lock_ref: lock_entry.map(|e| e.reference().to_string()),
                synced_at: lock_entry.map(|e| e.synced_at()),
            }
        })
        .collect()
}
