//! Asset reference value object
//!
//! The canonical textual form is `org/repo/path@ref`, where `path` may itself
//! contain `/`. Parsing and [`AssetRef::raw`] are exact inverses.

use std::fmt;
use std::str::FromStr;

use crate::error::{CopsError, CopsResult};

/// Ref alias resolved to the repository's default branch
pub const LATEST: &str = "latest";

/// A parsed `org/repo/path@ref` reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetRef {
    org: String,
    repo: String,
    path: String,
    git_ref: String,
}

impl AssetRef {
    /// Build a reference from parts. Callers must pass non-empty parts.
    pub fn new(
        org: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
        git_ref: impl Into<String>,
    ) -> Self {
        Self {
            org: org.into(),
            repo: repo.into(),
            path: path.into(),
            git_ref: git_ref.into(),
        }
    }

    /// Parse a raw reference string.
    ///
    /// Requires exactly one `@`, at least three `/`-separated segments before
    /// it, and non-empty org, repo, path and ref.
    pub fn parse(raw: &str) -> CopsResult<Self> {
        let invalid = |reason| CopsError::InvalidReference {
            raw: raw.to_string(),
            reason,
        };

        let (location, git_ref) = raw
            .split_once('@')
            .ok_or_else(|| invalid("must contain @<ref> (e.g. org/repo/path@v1.0)"))?;
        if git_ref.contains('@') {
            return Err(invalid("must contain exactly one '@'"));
        }
        if git_ref.is_empty() {
            return Err(invalid("ref after '@' is empty"));
        }

        let mut segments = location.splitn(3, '/');
        let org = segments.next().unwrap_or_default();
        let repo = segments.next().unwrap_or_default();
        let path = segments.next().unwrap_or_default();
        if org.is_empty() || repo.is_empty() || path.is_empty() {
            return Err(invalid("must be org/repo/path@ref"));
        }

        Ok(Self::new(org, repo, path, git_ref))
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Path inside the repository
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Branch, tag, commit, or `latest`
    pub fn git_ref(&self) -> &str {
        &self.git_ref
    }

    /// Returns true if the ref is the `latest` alias
    pub fn is_latest(&self) -> bool {
        self.git_ref == LATEST
    }

    /// `org/repo`
    pub fn repo_full_name(&self) -> String {
        format!("{}/{}", self.org, self.repo)
    }

    /// Canonical `org/repo/path@ref` string
    pub fn raw(&self) -> String {
        self.to_string()
    }

    /// Same reference pinned to a different ref
    pub fn with_ref(&self, git_ref: impl Into<String>) -> Self {
        Self {
            git_ref: git_ref.into(),
            ..self.clone()
        }
    }

    /// Same org/repo/ref pointing at a different path
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..self.clone()
        }
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}@{}", self.org, self.repo, self.path, self.git_ref)
    }
}

impl FromStr for AssetRef {
    type Err = CopsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
