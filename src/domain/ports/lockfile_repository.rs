//! LockfileRepository port - abstraction for lockfile persistence
//!
//! This trait allows the domain layer to load/save lockfiles
//! without knowing about JSON serialization details.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::Lockfile;

/// Result type for lockfile operations
pub type LockfileResult<T> = Result<T, LockfileError>;

/// Lockfile operation errors
#[derive(Debug, Error)]
pub enum LockfileError {
    /// Invalid lockfile content
    #[error("parsing lock file {}: {message}", path.display())]
    InvalidFormat { path: PathBuf, message: String },

    /// Written by an incompatible version of cops
    #[error("lock file {} has format version {found}, expected {expected}; delete it and run 'cops sync'", path.display())]
    VersionMismatch {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    /// I/O error
    #[error("{action} lock file {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Abstract repository for lockfile persistence
pub trait LockfileRepository {
    /// Load lockfile from path. A missing file yields an empty lockfile.
    fn load(&self, path: &Path) -> LockfileResult<Lockfile>;

    /// Save lockfile to path. Output must be byte-identical for equal input.
    fn save(&self, lockfile: &Lockfile, path: &Path) -> LockfileResult<()>;
}

impl<T: LockfileRepository + ?Sized> LockfileRepository for &T {
    fn load(&self, path: &Path) -> LockfileResult<Lockfile> {
        (**self).load(path)
    }

    fn save(&self, lockfile: &Lockfile, path: &Path) -> LockfileResult<()> {
        (**self).save(lockfile, path)
    }
}
