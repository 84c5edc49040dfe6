//! Local File System Implementation
//!
//! Implements the FileWriter port for local disk operations. Relative paths
//! are resolved against the project root.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ports::{FileWriter, FsError, FsResult};

/// Local file system rooted at a project directory
///
/// Provides atomic writes and recursive, idempotent removal.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a project-relative path
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Read a file as UTF-8; `None` if it does not exist
    pub fn read_optional(&self, path: &Path) -> FsResult<Option<String>> {
        let full = self.resolve(path);
        match std::fs::read_to_string(&full) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FsError::io(&full, e)),
        }
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new(".")
    }
}

impl FileWriter for LocalFs {
    /// Write via a temp file in the same directory, then rename into place
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let full = self.resolve(path);
        let parent = match full.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent).map_err(|e| FsError::io(&parent, e))?;

        let mut tmp = NamedTempFile::new_in(&parent).map_err(|e| FsError::io(&parent, e))?;
        tmp.write_all(content).map_err(|e| FsError::io(&full, e))?;
        tmp.as_file().sync_all().map_err(|e| FsError::io(&full, e))?;
        tmp.persist(&full).map_err(|e| FsError::io(&full, e.error))?;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        let full = self.resolve(path);
        std::fs::create_dir_all(&full).map_err(|e| FsError::io(&full, e))
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        let full = self.resolve(path);
        let meta = match std::fs::symlink_metadata(&full) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(FsError::io(&full, e)),
        };
        let result = if meta.is_dir() {
            std::fs::remove_dir_all(&full)
        } else {
            std::fs::remove_file(&full)
        };
        match result {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FsError::io(&full, e)),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }
}
