//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod lockfile;
mod manifest;

pub use lockfile::{render_lockfile, JsonLockfileRepository};
pub use manifest::{render_manifest, TomlManifestRepository};
