//! Offline asset source for integration tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use cops::domain::ports::{AssetSource, SourceError, TreeEntry};
use cops::domain::value_objects::AssetRef;

use super::fixtures::FAKE_SHA;

/// Serves files from memory; every path not registered answers 404
#[derive(Default)]
pub struct FakeSource {
    files: BTreeMap<String, Vec<u8>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.as_bytes().to_vec());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl AssetSource for FakeSource {
    fn resolve_ref(&self, reference: &AssetRef) -> Result<AssetRef, SourceError> {
        self.calls
            .borrow_mut()
            .push(format!("resolve_ref:{}", reference.repo_full_name()));
        if reference.is_latest() {
            Ok(reference.with_ref("main"))
        } else {
            Ok(reference.clone())
        }
    }

    fn download_file(&self, reference: &AssetRef) -> Result<Vec<u8>, SourceError> {
        self.calls.borrow_mut().push(format!(
            "download:{}@{}",
            reference.path(),
            reference.git_ref()
        ));
        self.files
            .get(reference.path())
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                url: reference.raw(),
            })
    }

    fn list_directory(&self, reference: &AssetRef) -> Result<Vec<TreeEntry>, SourceError> {
        self.calls
            .borrow_mut()
            .push(format!("list:{}@{}", reference.path(), reference.git_ref()));
        Ok(self
            .files
            .keys()
            .map(|path| TreeEntry::blob(path.clone(), "blobsha"))
            .collect())
    }

    fn resolve_revision(&self, reference: &AssetRef) -> Result<String, SourceError> {
        self.calls
            .borrow_mut()
            .push(format!("revision:{}", reference.git_ref()));
        Ok(FAKE_SHA.to_string())
    }
}
