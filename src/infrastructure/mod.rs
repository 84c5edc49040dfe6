//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system rooted at the project directory
//! - `github/` - Remote asset source over the GitHub API
//! - `repositories/` - Manifest (TOML) and lock (JSON) persistence
//! - `events/` - Sync event sinks

pub mod events;
pub mod fs;
pub mod github;
pub mod repositories;

// Re-export for convenience
pub use events::{short_revision, ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use github::{github_token, GitHubSource};
pub use repositories::{JsonLockfileRepository, TomlManifestRepository};
