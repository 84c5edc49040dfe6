//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Lockfile` - Records what was fetched for each asset
//! - `Manifest` - Declared assets and their references

mod lockfile;
mod manifest;

pub use lockfile::{Lockfile, LockfileEntry, LOCKFILE_VERSION, UNKNOWN_REVISION};
pub use manifest::{DeclaredEntry, Manifest};
