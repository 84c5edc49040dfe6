use std::path::{Path, PathBuf};

use cops::config::{DEFAULT_LOCKFILE, DEFAULT_MANIFEST};

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `.cops.lock` (anchors to existing sync state)
/// - `copilot.toml` (declared assets)
/// - `.git/` or `.git` file (git repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(DEFAULT_LOCKFILE).is_file() {
            return dir.to_path_buf();
        }
        if dir.join(DEFAULT_MANIFEST).is_file() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}
