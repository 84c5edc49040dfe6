//! Manifest entity - the declared state
//!
//! Maps asset type → name → raw reference string. The engine only ever
//! consumes it flattened into [`DeclaredEntry`] rows.

use std::collections::BTreeMap;

use crate::domain::value_objects::AssetType;

/// A flattened manifest row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredEntry {
    pub asset_type: AssetType,
    pub name: String,
    /// Raw `org/repo/path@ref` string, unparsed
    pub reference: String,
}

impl DeclaredEntry {
    pub fn new(
        asset_type: AssetType,
        name: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            asset_type,
            name: name.into(),
            reference: reference.into(),
        }
    }
}

/// Declared assets, one section per asset type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    sections: BTreeMap<AssetType, BTreeMap<String, String>>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries of one section, sorted by name
    pub fn section(&self, asset_type: AssetType) -> impl Iterator<Item = (&str, &str)> {
        self.sections
            .get(&asset_type)
            .into_iter()
            .flat_map(|s| s.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub fn get(&self, asset_type: AssetType, name: &str) -> Option<&str> {
        self.sections
            .get(&asset_type)
            .and_then(|s| s.get(name))
            .map(|s| s.as_str())
    }

    pub fn contains(&self, asset_type: AssetType, name: &str) -> bool {
        self.get(asset_type, name).is_some()
    }

    /// Add or update an entry. Last write wins.
    pub fn set(
        &mut self,
        asset_type: AssetType,
        name: impl Into<String>,
        reference: impl Into<String>,
    ) -> Option<String> {
        self.sections
            .entry(asset_type)
            .or_default()
            .insert(name.into(), reference.into())
    }

    /// Remove an entry, returning its reference if it was declared
    pub fn remove(&mut self, asset_type: AssetType, name: &str) -> Option<String> {
        let section = self.sections.get_mut(&asset_type)?;
        let removed = section.remove(name);
        if section.is_empty() {
            self.sections.remove(&asset_type);
        }
        removed
    }

    /// Every (type, name, ref) triple, in type order then name order
    pub fn entries(&self) -> Vec<DeclaredEntry> {
        self.sections
            .iter()
            .flat_map(|(asset_type, section)| {
                section
                    .iter()
                    .map(move |(name, reference)| DeclaredEntry::new(*asset_type, name, reference))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sections.values().map(|s| s.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_manifest_is_empty() {
        let manifest = Manifest::new();
        assert!(manifest.is_empty());
        assert!(manifest.entries().is_empty());
    }

    #[test]
    fn set_and_get() {
        let mut manifest = Manifest::new();
        assert!(manifest
            .set(AssetType::Agents, "helper", "org/repo/a@v1")
            .is_none());

        assert_eq!(manifest.get(AssetType::Agents, "helper"), Some("org/repo/a@v1"));
        assert!(manifest.contains(AssetType::Agents, "helper"));
        assert!(!manifest.contains(AssetType::Prompts, "helper"));
    }

    #[test]
    fn set_last_write_wins() {
        let mut manifest = Manifest::new();
        manifest.set(AssetType::Agents, "helper", "org/repo/a@v1");
        let previous = manifest.set(AssetType::Agents, "helper", "org/repo/a@v2");

        assert_eq!(previous.as_deref(), Some("org/repo/a@v1"));
        assert_eq!(manifest.get(AssetType::Agents, "helper"), Some("org/repo/a@v2"));
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn remove_reports_presence() {
        let mut manifest = Manifest::new();
        manifest.set(AssetType::Skills, "s", "org/repo/skills/s@v1");

        assert_eq!(
            manifest.remove(AssetType::Skills, "s").as_deref(),
            Some("org/repo/skills/s@v1")
        );
        assert!(manifest.remove(AssetType::Skills, "s").is_none());
        assert!(manifest.remove(AssetType::Agents, "never").is_none());
        assert!(manifest.is_empty());
    }

    #[test]
    fn entries_are_flattened_in_type_then_name_order() {
        let mut manifest = Manifest::new();
        manifest.set(AssetType::Skills, "s", "org/repo/skills/s@v1");
        manifest.set(AssetType::Agents, "b", "org/repo/b@v1");
        manifest.set(AssetType::Instructions, "i", "org/repo/i@v1");
        manifest.set(AssetType::Agents, "a", "org/repo/a@v1");

        let rows: Vec<_> = manifest
            .entries()
            .into_iter()
            .map(|e| format!("{}/{}", e.asset_type, e.name))
            .collect();
        assert_eq!(rows, vec!["instructions/i", "agents/a", "agents/b", "skills/s"]);
    }

    #[test]
    fn section_lists_names() {
        let mut manifest = Manifest::new();
        manifest.set(AssetType::Prompts, "review", "org/repo/p@v1");

        let section: Vec<_> = manifest.section(AssetType::Prompts).collect();
        assert_eq!(section, vec![("review", "org/repo/p@v1")]);
        assert_eq!(manifest.section(AssetType::Agents).count(), 0);
    }
}
