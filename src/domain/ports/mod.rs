//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_source;
pub mod file_system;
pub mod lockfile_repository;
pub mod manifest_repository;
pub mod sync_events;

pub use asset_source::{AssetSource, SourceError, TreeEntry, TreeEntryKind};
pub use file_system::{FileWriter, FsError, FsResult};
pub use lockfile_repository::{LockfileError, LockfileRepository, LockfileResult};
pub use manifest_repository::{ManifestError, ManifestRepository, ManifestResult};
pub use sync_events::{NoopEventSink, SyncEvent, SyncEventSink};
