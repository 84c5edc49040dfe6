//! In-memory port implementations shared by the use case tests

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::domain::entities::{Lockfile, Manifest};
use crate::domain::ports::{
    AssetSource, FileWriter, FsError, FsResult, LockfileRepository, LockfileResult,
    ManifestRepository, ManifestResult, SourceError, TreeEntry,
};
use crate::domain::value_objects::AssetRef;

pub const FAKE_SHA: &str = "0123456789abcdef0123456789abcdef01234567";

/// Remote source backed by a map of path -> content
///
/// Org, repo and ref are ignored for lookups; every call is recorded.
pub struct FakeSource {
    default_branch: String,
    files: HashMap<String, Vec<u8>>,
    failing: HashMap<String, u16>,
    tree: Vec<TreeEntry>,
    revision: Option<String>,
    resolve_ref_fails: bool,
    listing_fails: bool,
    pub calls: RefCell<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            default_branch: "main".to_string(),
            files: HashMap::new(),
            failing: HashMap::new(),
            tree: Vec::new(),
            revision: Some(FAKE_SHA.to_string()),
            resolve_ref_fails: false,
            listing_fails: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.as_bytes().to_vec());
        self
    }

    /// Add a blob to both the tree listing and the file map
    pub fn with_tree_file(mut self, path: &str, content: &str) -> Self {
        self.tree.push(TreeEntry::blob(path, "blobsha"));
        self.with_file(path, content)
    }

    pub fn with_tree_entry(mut self, entry: TreeEntry) -> Self {
        self.tree.push(entry);
        self
    }

    /// Downloads of `path` fail with the given HTTP status
    pub fn with_failing(mut self, path: &str, status: u16) -> Self {
        self.failing.insert(path.to_string(), status);
        self
    }

    pub fn without_revision(mut self) -> Self {
        self.revision = None;
        self
    }

    pub fn with_default_branch(mut self, branch: &str) -> Self {
        self.default_branch = branch.to_string();
        self
    }

    pub fn failing_ref_resolution(mut self) -> Self {
        self.resolve_ref_fails = true;
        self
    }

    /// Directory listings fail with a transport error
    pub fn failing_listing(mut self) -> Self {
        self.listing_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl AssetSource for FakeSource {
    fn resolve_ref(&self, reference: &AssetRef) -> Result<AssetRef, SourceError> {
        self.record(format!("resolve_ref:{}", reference.repo_full_name()));
        if self.resolve_ref_fails {
            return Err(SourceError::Transport("connection refused".to_string()));
        }
        if reference.is_latest() {
            Ok(reference.with_ref(self.default_branch.clone()))
        } else {
            Ok(reference.clone())
        }
    }

    fn download_file(&self, reference: &AssetRef) -> Result<Vec<u8>, SourceError> {
        self.record(format!("download:{}@{}", reference.path(), reference.git_ref()));
        let url = format!("fake://{}", reference.path());
        if let Some(status) = self.failing.get(reference.path()) {
            return Err(SourceError::Http {
                url,
                status: *status,
                body: "boom".to_string(),
            });
        }
        self.files
            .get(reference.path())
            .cloned()
            .ok_or(SourceError::NotFound { url })
    }

    fn list_directory(&self, reference: &AssetRef) -> Result<Vec<TreeEntry>, SourceError> {
        self.record(format!("list:{}@{}", reference.path(), reference.git_ref()));
        if self.listing_fails {
            return Err(SourceError::Transport("connection reset".to_string()));
        }
        Ok(self.tree.clone())
    }

    fn resolve_revision(&self, reference: &AssetRef) -> Result<String, SourceError> {
        self.record(format!("revision:{}", reference.git_ref()));
        self.revision.clone().ok_or_else(|| SourceError::Http {
            url: "fake://commits".to_string(),
            status: 422,
            body: "no commit".to_string(),
        })
    }
}

/// File writer that keeps everything in memory
#[derive(Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: RefCell<Vec<PathBuf>>,
    read_only: Option<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes to anything under `path` fail with permission denied
    pub fn read_only_under(path: impl Into<PathBuf>) -> Self {
        Self {
            read_only: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn seed(&self, path: impl Into<PathBuf>, content: &str) {
        self.files
            .borrow_mut()
            .insert(path.into(), content.as_bytes().to_vec());
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .borrow()
            .get(path.as_ref())
            .map(|c| String::from_utf8_lossy(c).into_owned())
    }

    pub fn bytes(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl FileWriter for MemoryFs {
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        if let Some(ro) = &self.read_only {
            if path.starts_with(ro) {
                return Err(FsError::PermissionDenied(path.to_path_buf()));
            }
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.dirs.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        self.files.borrow_mut().retain(|p, _| !p.starts_with(path));
        self.dirs.borrow_mut().retain(|p| !p.starts_with(path));
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().keys().any(|p| p.starts_with(path))
            || self.dirs.borrow().iter().any(|p| p.starts_with(path))
    }
}

#[derive(Default)]
pub struct MemoryLockfileRepository {
    pub lockfile: RefCell<Lockfile>,
    pub saves: RefCell<usize>,
}

impl MemoryLockfileRepository {
    pub fn with(lockfile: Lockfile) -> Self {
        Self {
            lockfile: RefCell::new(lockfile),
            saves: RefCell::new(0),
        }
    }

    pub fn current(&self) -> Lockfile {
        self.lockfile.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl LockfileRepository for MemoryLockfileRepository {
    fn load(&self, _path: &Path) -> LockfileResult<Lockfile> {
        Ok(self.lockfile.borrow().clone())
    }

    fn save(&self, lockfile: &Lockfile, _path: &Path) -> LockfileResult<()> {
        *self.lockfile.borrow_mut() = lockfile.clone();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryManifestRepository {
    pub manifest: RefCell<Manifest>,
    pub saves: RefCell<usize>,
}

impl MemoryManifestRepository {
    pub fn with(manifest: Manifest) -> Self {
        Self {
            manifest: RefCell::new(manifest),
            saves: RefCell::new(0),
        }
    }

    pub fn current(&self) -> Manifest {
        self.manifest.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl ManifestRepository for MemoryManifestRepository {
    fn load(&self, _path: &Path) -> ManifestResult<Manifest> {
        Ok(self.manifest.borrow().clone())
    }

    fn save(&self, manifest: &Manifest, _path: &Path) -> ManifestResult<()> {
        *self.manifest.borrow_mut() = manifest.clone();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
