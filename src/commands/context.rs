//! Per-invocation state shared by every command

use std::path::Path;

use anyhow::{bail, Context as _, Result};
use tracing::debug;

use cops::config::Config;
use cops::presentation::output::{create_renderer, supports_unicode, OutputFormat, Renderer};
use cops::presentation::Project;

use super::project_root::discover_project_root;

pub struct Context {
    pub project: Project,
    pub json: bool,
    pub unicode: bool,
}

impl Context {
    /// Locate the project from `-C <dir>` or the current directory and load
    /// its configuration.
    pub fn new(directory: Option<&Path>, json: bool) -> Result<Self> {
        let start = match directory {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().context("reading current directory")?,
        };
        if !start.is_dir() {
            bail!("directory not found: {}", start.display());
        }

        let root = discover_project_root(&start);
        let config = Config::load_or_default(Some(&root));
        debug!(
            root = %root.display(),
            manifest = %config.manifest.display(),
            lockfile = %config.lockfile.display(),
            "project located"
        );

        Ok(Self {
            project: Project::new(root, config),
            json,
            unicode: supports_unicode(),
        })
    }

    pub fn renderer(&self) -> Box<dyn Renderer> {
        create_renderer(OutputFormat::from_json_flag(self.json), self.unicode)
    }

    /// Print rendered output as-is; renderers supply their own newlines
    pub fn emit(&self, text: &str) {
        print!("{}", text);
    }
}
