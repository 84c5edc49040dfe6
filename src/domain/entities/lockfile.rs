//! Lockfile entity - records what was fetched for each managed asset
//!
//! The lockfile is the ledger `sync` writes and `check` reads to detect drift.
//! It's a pure data structure - I/O operations are handled by LockfileRepository.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{AssetType, ContentHash};

/// Current lock file format version
pub const LOCKFILE_VERSION: u32 = 1;

/// Revision recorded when a directory asset was written but its commit could
/// not be resolved
pub const UNKNOWN_REVISION: &str = "unknown";

/// Lockfile entry for one synchronized asset
///
/// Entries are replaced wholesale on every successful sync, never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockfileEntry {
    asset_type: AssetType,
    name: String,
    /// Reference string exactly as declared in the manifest
    reference: String,
    /// Commit SHA the ref resolved to at sync time
    resolved_sha: String,
    /// Project-relative path, forward slashes
    target_path: String,
    /// SHA-256 of the effective content
    checksum: ContentHash,
    synced_at: DateTime<Utc>,
}

impl LockfileEntry {
    pub fn new(
        asset_type: AssetType,
        name: impl Into<String>,
        reference: impl Into<String>,
        resolved_sha: impl Into<String>,
        target_path: impl Into<String>,
        checksum: ContentHash,
        synced_at: DateTime<Utc>,
    ) -> Self {
        Self {
            asset_type,
            name: name.into(),
            reference: reference.into(),
            resolved_sha: resolved_sha.into(),
            target_path: target_path.into(),
            checksum,
            synced_at,
        }
    }

    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Original reference string (e.g. `org/repo/path@v1.2`)
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn resolved_sha(&self) -> &str {
        &self.resolved_sha
    }

    /// Returns true if the revision could not be resolved at sync time
    pub fn has_unknown_revision(&self) -> bool {
        self.resolved_sha == UNKNOWN_REVISION
    }

    pub fn target_path(&self) -> &str {
        &self.target_path
    }

    pub fn checksum(&self) -> &ContentHash {
        &self.checksum
    }

    pub fn synced_at(&self) -> DateTime<Utc> {
        self.synced_at
    }

    /// Key this entry is stored under
    pub fn key(&self) -> String {
        Lockfile::make_key(self.asset_type, &self.name)
    }
}

/// The lockfile tracks resolved state per asset
///
/// Keys are formatted as `{type}/{name}`. Entries live in a `BTreeMap` so
/// iteration, and therefore serialization, is always in key order.
#[derive(Debug, Clone, PartialEq)]
pub struct Lockfile {
    /// Format version
    version: u32,
    /// Map of keys to entries
    entries: BTreeMap<String, LockfileEntry>,
}

impl Default for Lockfile {
    fn default() -> Self {
        Self::new()
    }
}

impl Lockfile {
    /// Create a new empty lockfile
    pub fn new() -> Self {
        Self {
            version: LOCKFILE_VERSION,
            entries: BTreeMap::new(),
        }
    }

    /// Get the version
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Check if the lockfile is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Generate a lockfile key from type and name
    pub fn make_key(asset_type: AssetType, name: &str) -> String {
        format!("{}/{}", asset_type, name)
    }

    /// Parse a lockfile key into type and name
    pub fn parse_key(key: &str) -> Option<(AssetType, &str)> {
        let (asset_type, name) = key.split_once('/')?;
        if name.is_empty() {
            return None;
        }
        Some((asset_type.parse().ok()?, name))
    }

    /// Get an entry by type and name
    pub fn get(&self, asset_type: AssetType, name: &str) -> Option<&LockfileEntry> {
        self.entries.get(&Self::make_key(asset_type, name))
    }

    /// Insert or fully replace the entry for the entry's type and name
    pub fn set(&mut self, entry: LockfileEntry) -> Option<LockfileEntry> {
        self.entries.insert(entry.key(), entry)
    }

    /// Check if an entry exists
    pub fn contains(&self, asset_type: AssetType, name: &str) -> bool {
        self.entries.contains_key(&Self::make_key(asset_type, name))
    }

    /// Remove an entry
    pub fn remove(&mut self, asset_type: AssetType, name: &str) -> Option<LockfileEntry> {
        self.entries.remove(&Self::make_key(asset_type, name))
    }

    /// Get all keys, sorted
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Get all entries, sorted by key
    pub fn entries(&self) -> impl Iterator<Item = (&str, &LockfileEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests;
