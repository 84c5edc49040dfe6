//! Content Hash Value Object
//!
//! Lowercase hex SHA-256 of the effective content of an asset. Used as the
//! lock file checksum.

use std::fmt;

use sha2::{Digest, Sha256};

/// Content hash value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Wrap an already computed hex digest
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// SHA-256 of exactly `content`
    pub fn from_bytes(content: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(content)))
    }

    /// Aggregate digest for a directory asset.
    ///
    /// Files are ordered by relative path before their bytes are
    /// concatenated, so the result does not depend on iteration order.
    pub fn aggregate<'a, I, P, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (&'a P, &'a C)>,
        P: AsRef<str> + ?Sized + 'a,
        C: AsRef<[u8]> + ?Sized + 'a,
    {
        let mut sorted: Vec<(&str, &[u8])> = files
            .into_iter()
            .map(|(path, content)| (path.as_ref(), content.as_ref()))
            .collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let mut hasher = Sha256::new();
        for (_, content) in sorted {
            hasher.update(content);
        }
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this hash matches a raw hex string
    pub fn matches_str(&self, s: &str) -> bool {
        self.0.eq_ignore_ascii_case(s)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ContentHash> for String {
    fn from(hash: ContentHash) -> Self {
        hash.0
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
