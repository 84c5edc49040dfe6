//! GitHub Asset Source
//!
//! Implements the AssetSource port over the GitHub REST API and the raw
//! content host, using a blocking reqwest client.

use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::config::GitHubConfig;
use crate::domain::ports::{AssetSource, SourceError, TreeEntry};
use crate::domain::value_objects::AssetRef;

const USER_AGENT: &str = concat!("cops/", env!("CARGO_PKG_VERSION"));
const ACCEPT_JSON: &str = "application/vnd.github.v3+json";
/// Makes the commits endpoint answer with the bare SHA
const ACCEPT_SHA: &str = "application/vnd.github.v3.sha";

#[derive(Debug, Deserialize)]
struct RepoInfo {
    #[serde(default)]
    default_branch: String,
}

#[derive(Debug, Deserialize)]
struct TreeResponse {
    #[serde(default)]
    tree: Vec<TreeEntry>,
}

pub struct GitHubSource {
    client: Client,
    api_base: String,
    raw_base: String,
    token: Option<String>,
}

impl GitHubSource {
    pub fn new(config: &GitHubConfig, token: Option<String>) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()
            .map_err(|e| SourceError::Transport(format!("building http client: {e}")))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            raw_base: config.raw_base.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn repo_url(&self, reference: &AssetRef) -> String {
        format!(
            "{}/repos/{}/{}",
            self.api_base,
            reference.org(),
            reference.repo()
        )
    }

    pub fn raw_file_url(&self, reference: &AssetRef) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_base,
            reference.org(),
            reference.repo(),
            reference.git_ref(),
            reference.path()
        )
    }

    pub fn tree_url(&self, reference: &AssetRef) -> String {
        format!(
            "{}/git/trees/{}?recursive=1",
            self.repo_url(reference),
            reference.git_ref()
        )
    }

    pub fn commit_url(&self, reference: &AssetRef) -> String {
        format!(
            "{}/commits/{}",
            self.repo_url(reference),
            reference.git_ref()
        )
    }

    /// GET with auth; 404 becomes `NotFound`, other failures keep the body
    fn get(&self, url: &str, accept: &str) -> Result<Response, SourceError> {
        debug!(url = %url, "GET");
        let mut request = self.client.get(url).header(ACCEPT, accept);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| SourceError::Transport(format!("{url}: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SourceError::Http {
                url: url.to_string(),
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }
        Ok(response)
    }
}

impl AssetSource for GitHubSource {
    fn resolve_ref(&self, reference: &AssetRef) -> Result<AssetRef, SourceError> {
        if !reference.is_latest() {
            return Ok(reference.clone());
        }

        let url = self.repo_url(reference);
        let info: RepoInfo = self
            .get(&url, ACCEPT_JSON)?
            .json()
            .map_err(|e| SourceError::Decode(format!("{url}: {e}")))?;

        if info.default_branch.is_empty() {
            return Err(SourceError::Decode(format!(
                "could not determine default branch for {}",
                reference.repo_full_name()
            )));
        }
        Ok(reference.with_ref(info.default_branch))
    }

    fn download_file(&self, reference: &AssetRef) -> Result<Vec<u8>, SourceError> {
        let url = self.raw_file_url(reference);
        let bytes = self
            .get(&url, "*/*")?
            .bytes()
            .map_err(|e| SourceError::Transport(format!("reading {url}: {e}")))?;
        Ok(bytes.to_vec())
    }

    /// Whole recursive tree at the ref; the caller filters to its directory
    fn list_directory(&self, reference: &AssetRef) -> Result<Vec<TreeEntry>, SourceError> {
        let url = self.tree_url(reference);
        let tree: TreeResponse = self
            .get(&url, ACCEPT_JSON)?
            .json()
            .map_err(|e| SourceError::Decode(format!("{url}: {e}")))?;
        Ok(tree.tree)
    }

    fn resolve_revision(&self, reference: &AssetRef) -> Result<String, SourceError> {
        let url = self.commit_url(reference);
        let sha = self
            .get(&url, ACCEPT_SHA)?
            .text()
            .map_err(|e| SourceError::Transport(format!("reading {url}: {e}")))?;

        let sha = sha.trim();
        if sha.is_empty() {
            return Err(SourceError::Decode(format!("{url}: empty commit SHA")));
        }
        Ok(sha.to_string())
    }
}
