//! AssetSource port - the remote host assets are fetched from
//!
//! The engine only relies on these four operations, so tests substitute a
//! deterministic in-memory source for the GitHub client.

use serde::Deserialize;
use thiserror::Error;

use crate::domain::value_objects::AssetRef;

/// Kind of an entry in a recursive tree listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeEntryKind {
    /// A file
    Blob,
    /// A directory
    Tree,
    /// Anything else the host reports (e.g. submodule commits)
    #[serde(other)]
    Other,
}

/// One item of a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeEntry {
    /// Repository-relative path, `/`-separated
    pub path: String,
    #[serde(rename = "type")]
    pub kind: TreeEntryKind,
    /// Content hash the host reports for this entry
    pub sha: String,
}

impl TreeEntry {
    pub fn blob(path: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: TreeEntryKind::Blob,
            sha: sha.into(),
        }
    }

    pub fn tree(path: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: TreeEntryKind::Tree,
            sha: sha.into(),
        }
    }

    pub fn is_blob(&self) -> bool {
        self.kind == TreeEntryKind::Blob
    }
}

/// Remote source errors
///
/// `NotFound` is kept distinct so the engine can decide whether a retry
/// with another file name makes sense.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{url}: HTTP 404")]
    NotFound { url: String },

    #[error("{url}: HTTP {status} - {body}")]
    Http {
        url: String,
        status: u16,
        body: String,
    },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl SourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound { .. })
    }
}

/// Abstract remote content host
pub trait AssetSource {
    /// Replace a `latest` ref with the repository's default branch. Any other
    /// ref is returned unchanged.
    fn resolve_ref(&self, reference: &AssetRef) -> Result<AssetRef, SourceError>;

    /// Raw bytes of the file at `reference.path()`
    fn download_file(&self, reference: &AssetRef) -> Result<Vec<u8>, SourceError>;

    /// Recursive listing of the repository tree at the reference's ref.
    ///
    /// May include `tree` entries and entries outside the requested path;
    /// callers filter.
    fn list_directory(&self, reference: &AssetRef) -> Result<Vec<TreeEntry>, SourceError>;

    /// Commit identifier the reference's ref points at
    fn resolve_revision(&self, reference: &AssetRef) -> Result<String, SourceError>;
}

impl<T: AssetSource + ?Sized> AssetSource for &T {
    fn resolve_ref(&self, reference: &AssetRef) -> Result<AssetRef, SourceError> {
        (**self).resolve_ref(reference)
    }

    fn download_file(&self, reference: &AssetRef) -> Result<Vec<u8>, SourceError> {
        (**self).download_file(reference)
    }

    fn list_directory(&self, reference: &AssetRef) -> Result<Vec<TreeEntry>, SourceError> {
        (**self).list_directory(reference)
    }

    fn resolve_revision(&self, reference: &AssetRef) -> Result<String, SourceError> {
        (**self).resolve_revision(reference)
    }
}
