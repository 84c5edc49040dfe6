//! JSON Lockfile Repository
//!
//! Implements the LockfileRepository port using pretty-printed JSON.
//! Equal lock state always produces byte-identical files.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Lockfile, LockfileEntry, LOCKFILE_VERSION};
use crate::domain::ports::{FileWriter, LockfileError, LockfileRepository, LockfileResult};
use crate::domain::value_objects::{AssetType, ContentHash};
use crate::infrastructure::fs::LocalFs;

/// JSON-based lockfile repository
///
/// Stores the lock as `.cops.lock` next to the manifest.
pub struct JsonLockfileRepository {
    fs: LocalFs,
}

impl JsonLockfileRepository {
    pub fn new(fs: LocalFs) -> Self {
        Self { fs }
    }
}

impl Default for JsonLockfileRepository {
    fn default() -> Self {
        Self::new(LocalFs::default())
    }
}

/// JSON representation of one entry; field order is the on-disk order
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonLockEntry {
    #[serde(rename = "type")]
    asset_type: AssetType,
    name: String,
    #[serde(rename = "ref")]
    reference: String,
    resolved_sha: String,
    target_path: String,
    checksum: String,
    synced_at: String,
}

/// JSON representation of the lockfile
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonLockfile {
    version: u32,
    #[serde(default)]
    entries: BTreeMap<String, JsonLockEntry>,
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|ts| ts.with_timezone(&Utc))
}

/// Render a lock to its exact on-disk form
pub fn render_lockfile(lockfile: &Lockfile) -> Result<String, serde_json::Error> {
    let entries = lockfile
        .entries()
        .map(|(key, entry)| {
            (
                key.to_string(),
                JsonLockEntry {
                    asset_type: entry.asset_type(),
                    name: entry.name().to_string(),
                    reference: entry.reference().to_string(),
                    resolved_sha: entry.resolved_sha().to_string(),
                    target_path: entry.target_path().to_string(),
                    checksum: entry.checksum().to_string(),
                    synced_at: format_timestamp(entry.synced_at()),
                },
            )
        })
        .collect();

    let json = JsonLockfile {
        version: lockfile.version(),
        entries,
    };
    let mut content = serde_json::to_string_pretty(&json)?;
    content.push('\n');
    Ok(content)
}

impl LockfileRepository for JsonLockfileRepository {
    fn load(&self, path: &Path) -> LockfileResult<Lockfile> {
        let content = match self.fs.read_optional(path) {
            Ok(Some(content)) => content,
            Ok(None) => return Ok(Lockfile::new()),
            Err(e) => {
                return Err(LockfileError::Io {
                    action: "reading",
                    path: path.to_path_buf(),
                    source: e.into_io(),
                })
            }
        };

        let invalid = |message: String| LockfileError::InvalidFormat {
            path: path.to_path_buf(),
            message,
        };

        let json: JsonLockfile =
            serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;
        if json.version != LOCKFILE_VERSION {
            return Err(LockfileError::VersionMismatch {
                path: path.to_path_buf(),
                found: json.version,
                expected: LOCKFILE_VERSION,
            });
        }

        let mut lockfile = Lockfile::new();
        for (key, entry) in json.entries {
            let expected = Lockfile::make_key(entry.asset_type, &entry.name);
            if key != expected {
                return Err(invalid(format!(
                    "entry {key}: key does not match its type and name ({expected})"
                )));
            }
            let synced_at = parse_timestamp(&entry.synced_at)
                .map_err(|e| invalid(format!("entry {key}: bad synced_at: {e}")))?;
            lockfile.set(LockfileEntry::new(
                entry.asset_type,
                entry.name,
                entry.reference,
                entry.resolved_sha,
                entry.target_path,
                ContentHash::new(entry.checksum),
                synced_at,
            ));
        }

        Ok(lockfile)
    }

    fn save(&self, lockfile: &Lockfile, path: &Path) -> LockfileResult<()> {
        let content = render_lockfile(lockfile).map_err(|e| LockfileError::InvalidFormat {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        self.fs
            .write(path, content.as_bytes())
            .map_err(|e| LockfileError::Io {
                action: "writing",
                path: path.to_path_buf(),
                source: e.into_io(),
            })
    }
}
