//! Console Event Sink
//!
//! Human-readable per-asset progress lines for `cops sync`.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::entities::Lockfile;
use crate::domain::ports::{SyncEvent, SyncEventSink};

/// Short form of a commit SHA for display
pub fn short_revision(revision: &str) -> &str {
    revision.get(..7).unwrap_or(revision)
}

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    unicode: bool,
}

impl ConsoleEventSink {
    pub fn stdout(unicode: bool) -> Self {
        Self::with_writer(io::stdout(), unicode)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, unicode: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            unicode,
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }

    fn icons(&self) -> (&'static str, &'static str, &'static str) {
        if self.unicode {
            ("✓", "✗", "→")
        } else {
            ("[OK]", "[FAIL]", "->")
        }
    }
}

impl SyncEventSink for ConsoleEventSink {
    fn on_event(&self, event: SyncEvent) {
        let (check, cross, arrow) = self.icons();
        match event {
            SyncEvent::Started { asset_count } => {
                let noun = if asset_count == 1 { "asset" } else { "assets" };
                self.line(format!("Syncing {} {}", asset_count, noun));
            }
            // Result lines carry everything worth showing
            SyncEvent::AssetStarted { .. } => {}
            SyncEvent::AssetSynced {
                asset_type,
                name,
                target_path,
                revision,
                files,
                ..
            } => {
                let extra = if files > 1 {
                    format!(", {} files", files)
                } else {
                    String::new()
                };
                self.line(format!(
                    "  {} {} {} {} ({}{})",
                    check,
                    Lockfile::make_key(asset_type, &name),
                    arrow,
                    target_path.display(),
                    short_revision(&revision),
                    extra
                ));
            }
            SyncEvent::AssetFailed {
                asset_type,
                name,
                error,
                ..
            } => {
                self.line(format!(
                    "  {} {}: {}",
                    cross,
                    Lockfile::make_key(asset_type, &name),
                    error
                ));
            }
            SyncEvent::Completed { .. } => {}
        }
    }
}
