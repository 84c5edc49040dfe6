//! TOML Manifest Repository
//!
//! Reads and writes `copilot.toml`:
//!
//! ```toml
//! [agents]
//! helper = "org/repo/agents/helper.md@v1.0"
//!
//! [skills]
//! review = "org/repo/skills/review@main"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::entities::Manifest;
use crate::domain::ports::{FileWriter, ManifestError, ManifestRepository, ManifestResult};
use crate::domain::value_objects::AssetType;
use crate::infrastructure::fs::LocalFs;

pub struct TomlManifestRepository {
    fs: LocalFs,
}

impl TomlManifestRepository {
    pub fn new(fs: LocalFs) -> Self {
        Self { fs }
    }
}

impl Default for TomlManifestRepository {
    fn default() -> Self {
        Self::new(LocalFs::default())
    }
}

/// On-disk layout; one optional table per asset type
#[derive(Debug, Default, Serialize, Deserialize)]
struct TomlManifest {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    instructions: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    agents: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    prompts: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    skills: BTreeMap<String, String>,
}

impl TomlManifest {
    fn section_mut(&mut self, asset_type: AssetType) -> &mut BTreeMap<String, String> {
        match asset_type {
            AssetType::Instructions => &mut self.instructions,
            AssetType::Agents => &mut self.agents,
            AssetType::Prompts => &mut self.prompts,
            AssetType::Skills => &mut self.skills,
        }
    }

    fn into_manifest(self) -> Manifest {
        let mut manifest = Manifest::new();
        let sections = [
            (AssetType::Instructions, self.instructions),
            (AssetType::Agents, self.agents),
            (AssetType::Prompts, self.prompts),
            (AssetType::Skills, self.skills),
        ];
        for (asset_type, section) in sections {
            for (name, reference) in section {
                manifest.set(asset_type, name, reference);
            }
        }
        manifest
    }

    fn from_manifest(manifest: &Manifest) -> Self {
        let mut toml = TomlManifest::default();
        for entry in manifest.entries() {
            toml.section_mut(entry.asset_type)
                .insert(entry.name, entry.reference);
        }
        toml
    }
}

/// Render a manifest to TOML text
pub fn render_manifest(manifest: &Manifest) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&TomlManifest::from_manifest(manifest))
}

impl ManifestRepository for TomlManifestRepository {
    fn load(&self, path: &Path) -> ManifestResult<Manifest> {
        let content = match self.fs.read_optional(path) {
            Ok(Some(content)) => content,
            Ok(None) => return Ok(Manifest::new()),
            Err(e) => {
                return Err(ManifestError::Io {
                    action: "reading",
                    path: path.to_path_buf(),
                    source: e.into_io(),
                })
            }
        };

        let mut unknown = Vec::new();
        let deserializer = toml::Deserializer::new(&content);
        let parsed: TomlManifest = serde_ignored::deserialize(deserializer, |p| {
            unknown.push(p.to_string());
        })
        .map_err(|e| ManifestError::InvalidFormat {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        for key in unknown {
            warn!(manifest = %path.display(), key = %key, "ignoring unknown manifest key");
        }

        Ok(parsed.into_manifest())
    }

    fn save(&self, manifest: &Manifest, path: &Path) -> ManifestResult<()> {
        let content = render_manifest(manifest).map_err(|e| ManifestError::InvalidFormat {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        self.fs
            .write(path, content.as_bytes())
            .map_err(|e| ManifestError::Io {
                action: "writing",
                path: path.to_path_buf(),
                source: e.into_io(),
            })
    }
}
