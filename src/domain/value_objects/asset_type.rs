//! Asset type value object - the four kinds of Copilot content cops manages

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CopsError, CopsResult};

/// Root directory all assets are written under
pub const TARGET_ROOT: &str = ".github";

/// Kind of a managed asset
///
/// Closed set: any other string fails to parse rather than being coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Instructions,
    Agents,
    Prompts,
    /// Skills are whole directories rather than single files
    Skills,
}

impl AssetType {
    /// All asset types, in manifest section order
    pub const ALL: [AssetType; 4] = [
        AssetType::Instructions,
        AssetType::Agents,
        AssetType::Prompts,
        AssetType::Skills,
    ];

    /// Section / directory name (`instructions`, `agents`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Instructions => "instructions",
            AssetType::Agents => "agents",
            AssetType::Prompts => "prompts",
            AssetType::Skills => "skills",
        }
    }

    /// Returns true if `value` names one of the four asset types
    pub fn is_valid(value: &str) -> bool {
        value.parse::<AssetType>().is_ok()
    }

    /// File suffix appended to the asset name. Empty for skills.
    pub fn file_extension(&self) -> &'static str {
        match self {
            AssetType::Instructions => ".instructions.md",
            AssetType::Agents => ".agent.md",
            AssetType::Prompts => ".prompt.md",
            AssetType::Skills => "",
        }
    }

    /// Two-level destination root, e.g. `.github/agents`
    pub fn target_dir(&self) -> PathBuf {
        PathBuf::from(TARGET_ROOT).join(self.as_str())
    }

    /// Project-relative destination for a named asset.
    ///
    /// Skills yield a directory path; everything else a file path with the
    /// type's suffix.
    pub fn target_path(&self, name: &str) -> PathBuf {
        if self.is_directory() {
            self.target_dir().join(name)
        } else {
            self.target_dir()
                .join(format!("{}{}", name, self.file_extension()))
        }
    }

    /// Like [`target_path`](Self::target_path), but rejects names that would
    /// escape the type's directory.
    pub fn checked_target_path(&self, name: &str) -> CopsResult<PathBuf> {
        validate_asset_name(name)?;
        Ok(self.target_path(name))
    }

    /// Returns true if assets of this type are directories
    pub fn is_directory(&self) -> bool {
        matches!(self, AssetType::Skills)
    }
}

/// Asset names become a single file or directory name under `.github/<type>/`
pub fn validate_asset_name(name: &str) -> CopsResult<()> {
    let reason = if name.is_empty() {
        "must not be empty"
    } else if name == "." || name == ".." {
        "must not be '.' or '..'"
    } else if name.contains(['/', '\\']) {
        "must not contain path separators"
    } else {
        return Ok(());
    };
    Err(CopsError::InvalidAssetName {
        name: name.to_string(),
        reason,
    })
}

impl FromStr for AssetType {
    type Err = CopsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "instructions" => Ok(AssetType::Instructions),
            "agents" => Ok(AssetType::Agents),
            "prompts" => Ok(AssetType::Prompts),
            "skills" => Ok(AssetType::Skills),
            other => Err(CopsError::InvalidAssetType {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
