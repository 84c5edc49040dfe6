//! JSON Event Sink
//!
//! Outputs sync events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{SyncEvent, SyncEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        let json = match event {
            SyncEvent::Started { asset_count } => {
                serde_json::json!({
                    "event": "start",
                    "command": "sync",
                    "asset_count": asset_count,
                })
            }

            SyncEvent::AssetStarted {
                index,
                asset_type,
                name,
                reference,
            } => {
                serde_json::json!({
                    "event": "item_start",
                    "command": "sync",
                    "index": index,
                    "type": asset_type,
                    "name": name,
                    "ref": reference,
                })
            }

            SyncEvent::AssetSynced {
                index,
                asset_type,
                name,
                target_path,
                revision,
                files,
            } => {
                serde_json::json!({
                    "event": "item_synced",
                    "command": "sync",
                    "index": index,
                    "type": asset_type,
                    "name": name,
                    "path": target_path.display().to_string(),
                    "revision": revision,
                    "files": files,
                })
            }

            SyncEvent::AssetFailed {
                index,
                asset_type,
                name,
                error,
            } => {
                serde_json::json!({
                    "event": "item_error",
                    "command": "sync",
                    "index": index,
                    "type": asset_type,
                    "name": name,
                    "error": error,
                })
            }

            SyncEvent::Completed { synced, failed } => {
                let status = if failed == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "complete",
                    "command": "sync",
                    "status": status,
                    "synced": synced,
                    "errors": failed,
                })
            }
        };

        self.write_event(json);
    }
}
