//! Output Rendering
//!
//! Renders command results as human-readable text or as JSON lines. Renderers
//! return strings; the command decides where they go.

use std::path::Path;

use crate::application::{CheckReport, InjectOutcome, SyncReport};
use crate::domain::entities::Lockfile;
use crate::domain::services::CheckStatus;
use crate::domain::value_objects::AssetType;
use crate::infrastructure::short_revision;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    warn: &'static str,
    arrow: &'static str,
    trash: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            warn: "⚠",
            arrow: "→",
            trash: "🗑",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            warn: "[!]",
            arrow: "->",
            trash: "[DEL]",
        }
    }
}

/// Renders the result of each command
pub trait Renderer {
    fn use_result(&self, outcome: &InjectOutcome) -> String;
    fn unuse_result(&self, asset_type: AssetType, name: &str, removed: &Path) -> String;
    fn sync_summary(&self, report: &SyncReport) -> String;
    fn check_report(&self, report: &CheckReport, strict: bool) -> String;
}

/// Text renderer
pub struct TextRenderer {
    /// Whether to use unicode icons
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { unicode: true }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

impl Renderer for TextRenderer {
    fn use_result(&self, outcome: &InjectOutcome) -> String {
        let icons = self.icons();
        let files = if outcome.files_written > 1 {
            format!(", {}", plural(outcome.files_written, "file"))
        } else {
            String::new()
        };
        format!(
            "{} {} {} {} ({}{})\n",
            icons.check,
            Lockfile::make_key(outcome.asset_type, &outcome.name),
            icons.arrow,
            outcome.target_path.display(),
            short_revision(&outcome.revision),
            files
        )
    }

    fn unuse_result(&self, asset_type: AssetType, name: &str, removed: &Path) -> String {
        format!(
            "{} Removed {} ({})\n",
            self.icons().trash,
            Lockfile::make_key(asset_type, name),
            removed.display()
        )
    }

    fn sync_summary(&self, report: &SyncReport) -> String {
        let icons = self.icons();
        if report.is_empty() {
            return "No assets declared. Add one with `cops <type> use <name> <ref>`.\n"
                .to_string();
        }

        if report.is_success() {
            return format!("\n{} Synced {}\n", icons.check, plural(report.synced.len(), "asset"));
        }

        let mut out = format!(
            "\n{} Synced {} of {}, {} failed:\n",
            icons.cross,
            report.synced.len(),
            plural(report.total(), "asset"),
            report.failures.len()
        );
        for failure in &report.failures {
            out.push_str(&format!(
                "  {} {}: {}\n",
                icons.cross,
                failure.key(),
                failure.error
            ));
        }
        out
    }

    fn check_report(&self, report: &CheckReport, strict: bool) -> String {
        let icons = self.icons();
        if report.items.is_empty() {
            return "No assets declared.\n".to_string();
        }

        let mut out = format!("Checking {}\n", plural(report.items.len(), "asset"));
        for item in &report.items {
            let key = Lockfile::make_key(item.asset_type, &item.name);
            match item.status {
                CheckStatus::Ok => {
                    out.push_str(&format!(
                        "  {} {} {} {}\n",
                        icons.check,
                        key,
                        icons.arrow,
                        item.target_path.display()
                    ));
                }
                CheckStatus::RefMismatch => {
                    out.push_str(&format!(
                        "  {} {}: {} (lock: {}, manifest: {})\n",
                        if strict { icons.cross } else { icons.warn },
                        key,
                        item.status,
                        item.lock_ref.as_deref().unwrap_or("-"),
                        item.manifest_ref
                    ));
                }
                status => {
                    out.push_str(&format!(
                        "  {} {}: {}\n",
                        if strict { icons.cross } else { icons.warn },
                        key,
                        status
                    ));
                }
            }
        }

        out.push('\n');
        if report.is_clean() {
            out.push_str(&format!("{} All assets in sync\n", icons.check));
        } else {
            out.push_str(&format!(
                "{} {} out of sync. Run `cops sync` to fix.\n",
                if strict { icons.cross } else { icons.warn },
                plural(report.issues, "asset")
            ));
        }
        out
    }
}

/// JSON renderer: one object per line
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn use_result(&self, outcome: &InjectOutcome) -> String {
        let json = serde_json::json!({
            "event": "complete",
            "command": "use",
            "type": outcome.asset_type,
            "name": outcome.name,
            "path": outcome.target_path.display().to_string(),
            "revision": outcome.revision,
            "checksum": outcome.checksum.as_str(),
            "files": outcome.files_written,
        });
        format!("{}\n", json)
    }

    fn unuse_result(&self, asset_type: AssetType, name: &str, removed: &Path) -> String {
        let json = serde_json::json!({
            "event": "complete",
            "command": "unuse",
            "type": asset_type,
            "name": name,
            "path": removed.display().to_string(),
        });
        format!("{}\n", json)
    }

    /// Progress is streamed by the event sink; only an empty run needs a line
    fn sync_summary(&self, report: &SyncReport) -> String {
        if !report.is_empty() {
            return String::new();
        }
        let json = serde_json::json!({
            "event": "complete",
            "command": "sync",
            "status": "success",
            "synced": 0,
            "errors": 0,
        });
        format!("{}\n", json)
    }

    fn check_report(&self, report: &CheckReport, strict: bool) -> String {
        let mut out = String::new();
        for item in &report.items {
            let json = serde_json::json!({
                "event": "check",
                "command": "check",
                "type": item.asset_type,
                "name": item.name,
                "status": item.status,
                "path": item.target_path.display().to_string(),
                "manifest_ref": item.manifest_ref,
                "lock_ref": item.lock_ref,
                "synced_at": item.synced_at.map(|t| t.to_rfc3339()),
            });
            out.push_str(&format!("{}\n", json));
        }

        let status = if report.is_clean() {
            "success"
        } else if strict {
            "failure"
        } else {
            "warning"
        };
        let json = serde_json::json!({
            "event": "complete",
            "command": "check",
            "status": status,
            "strict": strict,
            "total": report.items.len(),
            "issues": report.issues,
        });
        out.push_str(&format!("{}\n", json));
        out
    }
}

/// Unicode icons unless the terminal is `dumb`
pub fn supports_unicode() -> bool {
    supports_unicode_with(|key| std::env::var(key).ok())
}

fn supports_unicode_with(get_env: impl Fn(&str) -> Option<String>) -> bool {
    let term = get_env("TERM").unwrap_or_default();
    !term.eq_ignore_ascii_case("dumb")
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, unicode: bool) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
