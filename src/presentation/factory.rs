//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};

use crate::application::{
    CheckUseCase, Injector, ProjectFiles, SyncUseCase, UnuseUseCase, UseAssetUseCase,
};
use crate::config::Config;
use crate::domain::ports::SourceError;
use crate::infrastructure::{
    github_token, GitHubSource, JsonLockfileRepository, LocalFs, TomlManifestRepository,
};

/// Type alias for the concrete SyncUseCase with all dependencies
pub type ConcreteSyncUseCase =
    SyncUseCase<GitHubSource, LocalFs, JsonLockfileRepository, TomlManifestRepository>;

/// Type alias for the concrete UseAssetUseCase with all dependencies
pub type ConcreteUseAssetUseCase =
    UseAssetUseCase<GitHubSource, LocalFs, JsonLockfileRepository, TomlManifestRepository>;

pub type ConcreteUnuseUseCase = UnuseUseCase<LocalFs, JsonLockfileRepository, TomlManifestRepository>;

pub type ConcreteCheckUseCase = CheckUseCase<LocalFs, JsonLockfileRepository, TomlManifestRepository>;

/// Everything a command needs to know about the project it runs in
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Manifest and lock locations; relative paths stay relative to the root
    pub fn files(&self) -> ProjectFiles {
        ProjectFiles::new(self.config.manifest.clone(), self.config.lockfile.clone())
    }

    fn fs(&self) -> LocalFs {
        LocalFs::new(self.root.clone())
    }

    fn injector(&self) -> Result<Injector<GitHubSource, LocalFs>, SourceError> {
        let source = GitHubSource::new(&self.config.github, github_token())?;
        Ok(Injector::new(source, self.fs()))
    }
}

/// Create a sync use case talking to GitHub
pub fn create_sync_use_case(project: &Project) -> Result<ConcreteSyncUseCase, SourceError> {
    Ok(SyncUseCase::new(
        project.injector()?,
        JsonLockfileRepository::new(project.fs()),
        TomlManifestRepository::new(project.fs()),
    ))
}

pub fn create_use_asset_use_case(
    project: &Project,
) -> Result<ConcreteUseAssetUseCase, SourceError> {
    Ok(UseAssetUseCase::new(
        project.injector()?,
        JsonLockfileRepository::new(project.fs()),
        TomlManifestRepository::new(project.fs()),
    ))
}

/// Create an unuse use case (no network access needed)
pub fn create_unuse_use_case(project: &Project) -> ConcreteUnuseUseCase {
    UnuseUseCase::new(
        project.fs(),
        JsonLockfileRepository::new(project.fs()),
        TomlManifestRepository::new(project.fs()),
    )
}

/// Create a check use case (no network access needed)
pub fn create_check_use_case(project: &Project) -> ConcreteCheckUseCase {
    CheckUseCase::new(
        project.fs(),
        JsonLockfileRepository::new(project.fs()),
        TomlManifestRepository::new(project.fs()),
    )
}
