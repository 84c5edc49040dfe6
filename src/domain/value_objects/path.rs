//! Path helpers for remote tree entries and lock storage
//!
//! Remote paths are always `/`-separated, regardless of platform. These are
//! pure string functions; nothing here touches the filesystem.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Error when a remote-relative path is unsafe to write locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path is absolute when relative is required
    AbsoluteNotAllowed,
    /// Path is empty
    Empty,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ContainsTraversal => {
                write!(f, "path contains traversal components (..)")
            }
            PathError::AbsoluteNotAllowed => write!(f, "absolute paths are not allowed"),
            PathError::Empty => write!(f, "path is empty"),
        }
    }
}

impl std::error::Error for PathError {}

/// A relative path that stays inside whatever directory it is joined to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafePath(PathBuf);

impl SafePath {
    /// Validate a `/`-separated relative path
    pub fn new(path: &str) -> Result<Self, PathError> {
        if path.is_empty() {
            return Err(PathError::Empty);
        }
        if path.starts_with('/') || Path::new(path).is_absolute() {
            return Err(PathError::AbsoluteNotAllowed);
        }

        let mut buf = PathBuf::new();
        for segment in path.split('/') {
            match Path::new(segment).components().next() {
                None | Some(Component::CurDir) => continue,
                Some(Component::ParentDir) => return Err(PathError::ContainsTraversal),
                Some(Component::Normal(_)) => buf.push(segment),
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {
                    return Err(PathError::AbsoluteNotAllowed)
                }
            }
        }

        if buf.as_os_str().is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self(buf))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for SafePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Returns true if `entry` is `root` itself or lies below it
pub fn is_under_root(entry: &str, root: &str) -> bool {
    entry == root
        || entry
            .strip_prefix(root)
            .is_some_and(|rest| rest.len() > 1 && rest.starts_with('/'))
}

/// Path of a tree entry relative to the requested directory.
///
/// Entries that do not start with `root + "/"` fall back to their base name,
/// so a listing that returns the root file itself still lands somewhere.
pub fn relative_to_root(entry: &str, root: &str) -> String {
    let prefix = format!("{}/", root.trim_end_matches('/'));
    match entry.strip_prefix(&prefix) {
        Some(rel) if !rel.is_empty() => rel.to_string(),
        _ => base_name(entry).to_string(),
    }
}

fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Normalize a path for lockfile storage (always use forward slashes).
pub fn normalize_lock_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
