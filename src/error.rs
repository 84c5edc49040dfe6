//! Error types for cops
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{LockfileError, ManifestError};

/// Result type alias for cops operations
pub type CopsResult<T> = Result<T, CopsError>;

/// Main error type for cops operations
///
/// Every variant carries the identifiers needed to explain the failure
/// (reference string, path, or type/name).
#[derive(Error, Debug)]
pub enum CopsError {
    /// Reference string does not match `org/repo/path@ref`
    #[error("invalid reference {raw:?}: {reason}")]
    InvalidReference { raw: String, reason: &'static str },

    /// Asset type outside the closed set
    #[error("invalid asset type '{value}' (expected one of: instructions, agents, prompts, skills)")]
    InvalidAssetType { value: String },

    /// Asset name would not stay a single path segment under `.github/<type>/`
    #[error("invalid asset name {name:?}: {reason}")]
    InvalidAssetName { name: String, reason: &'static str },

    /// `latest` could not be turned into a branch name
    #[error("resolving ref for {reference}: {message}")]
    RefResolutionFailed { reference: String, message: String },

    /// Ref could not be turned into a commit identifier
    #[error("resolving commit SHA for {reference}: {message}")]
    RevisionResolutionFailed { reference: String, message: String },

    /// Every candidate path answered "not found"
    #[error("content not found for {reference} (tried: {})", tried.join(", "))]
    ContentNotFound {
        reference: String,
        tried: Vec<String>,
    },

    /// Host answered with something other than success or "not found"
    #[error("fetching {reference}: {message}")]
    ContentFetchFailed { reference: String, message: String },

    /// Local write, mkdir or remove failed
    #[error("writing {}: {message}", path.display())]
    WriteFailed { path: PathBuf, message: String },

    /// Directory listing failed or returned no files
    #[error("listing {reference}: {message}")]
    DirectoryListingFailed { reference: String, message: String },

    /// Removal requested for an entry the manifest does not declare
    #[error("{asset_type}/{name} not found in manifest")]
    NotDeclared { asset_type: String, name: String },

    /// Config file exists but cannot be parsed
    #[error("invalid config {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    /// Lock file could not be loaded or saved
    #[error(transparent)]
    Lockfile(#[from] LockfileError),

    /// Manifest could not be loaded or saved
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}
