//! ManifestRepository port - abstraction for manifest persistence

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::Manifest;

pub type ManifestResult<T> = Result<T, ManifestError>;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("parsing manifest {}: {message}", path.display())]
    InvalidFormat { path: PathBuf, message: String },

    #[error("{action} manifest {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Abstract repository for the declared-state manifest
pub trait ManifestRepository {
    /// Load manifest from path. A missing file yields an empty manifest.
    fn load(&self, path: &Path) -> ManifestResult<Manifest>;

    fn save(&self, manifest: &Manifest, path: &Path) -> ManifestResult<()>;
}

impl<T: ManifestRepository + ?Sized> ManifestRepository for &T {
    fn load(&self, path: &Path) -> ManifestResult<Manifest> {
        (**self).load(path)
    }

    fn save(&self, manifest: &Manifest, path: &Path) -> ManifestResult<()> {
        (**self).save(manifest, path)
    }
}
