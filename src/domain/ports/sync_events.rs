//! Sync Event Port
//!
//! Observable progress for sync runs. Enables console progress and JSON
//! event streams without the use case knowing about either.

use std::path::PathBuf;

use crate::domain::value_objects::AssetType;

/// Event emitted during a sync run
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// Sync started
    Started { asset_count: usize },

    /// One declared asset is about to be injected
    AssetStarted {
        index: usize,
        asset_type: AssetType,
        name: String,
        reference: String,
    },

    /// Asset written and recorded in the lock
    AssetSynced {
        index: usize,
        asset_type: AssetType,
        name: String,
        target_path: PathBuf,
        revision: String,
        files: usize,
    },

    /// Asset failed; the run continues
    AssetFailed {
        index: usize,
        asset_type: AssetType,
        name: String,
        error: String,
    },

    /// Sync finished and the lock was saved
    Completed { synced: usize, failed: usize },
}

/// Trait for receiving sync events
pub trait SyncEventSink {
    fn on_event(&self, event: SyncEvent);
}

impl<T: SyncEventSink + ?Sized> SyncEventSink for &T {
    fn on_event(&self, event: SyncEvent) {
        (**self).on_event(event)
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}
}
