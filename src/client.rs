use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::GitHubConfig;
use crate::error::{RepoQaError, Result};
use crate::types::{Credential, RelatedFile, RepositoryMetadata};

/// Read access to the repository-hosting API.
///
/// Every call carries the credential explicitly so no token is held between
/// requests.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn repository(
        &self,
        credential: &Credential,
        owner: &str,
        repo: &str,
    ) -> Result<RepositoryMetadata>;

    /// Bytes of code per language.
    async fn languages(
        &self,
        credential: &Credential,
        owner: &str,
        repo: &str,
    ) -> Result<BTreeMap<String, u64>>;

    async fn topics(&self, credential: &Credential, owner: &str, repo: &str)
        -> Result<Vec<String>>;

    async fn search_code(
        &self,
        credential: &Credential,
        query: &str,
        per_page: u8,
    ) -> Result<Vec<RelatedFile>>;
}

#[async_trait]
impl<T: RepositorySource + ?Sized> RepositorySource for Arc<T> {
    async fn repository(
        &self,
        credential: &Credential,
        owner: &str,
        repo: &str,
    ) -> Result<RepositoryMetadata> {
        (**self).repository(credential, owner, repo).await
    }

    async fn languages(
        &self,
        credential: &Credential,
        owner: &str,
        repo: &str,
    ) -> Result<BTreeMap<String, u64>> {
        (**self).languages(credential, owner, repo).await
    }

    async fn topics(
        &self,
        credential: &Credential,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<String>> {
        (**self).topics(credential, owner, repo).await
    }

    async fn search_code(
        &self,
        credential: &Credential,
        query: &str,
        per_page: u8,
    ) -> Result<Vec<RelatedFile>> {
        (**self).search_code(credential, query, per_page).await
    }
}

#[derive(Debug, Deserialize)]
struct TopicNames {
    #[serde(default)]
    names: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CodeSearchParams<'a> {
    q: &'a str,
    per_page: u8,
}

#[derive(Debug, Deserialize)]
struct CodeSearchResponse {
    #[serde(default)]
    items: Vec<CodeSearchItem>,
}

#[derive(Debug, Deserialize)]
struct CodeSearchItem {
    name: String,
    path: String,
    html_url: String,
}

/// GitHub's own message and status for API errors, `Display` for the rest.
fn describe_error(error: &octocrab::Error) -> String {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            format!("{} ({})", source.message, source.status_code)
        }
        other => other.to_string(),
    }
}

/// [`RepositorySource`] backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    config: GitHubConfig,
}

impl GitHubClient {
    pub fn new() -> Self {
        Self::with_config(GitHubConfig::default())
    }

    pub fn with_config(config: GitHubConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    fn octocrab(&self, credential: &Credential) -> Result<Octocrab> {
        let mut builder = Octocrab::builder().personal_token(credential.expose().to_string());

        if !self.config.uses_default_api() {
            builder = builder
                .base_uri(self.config.api_base_url.as_str())
                .map_err(|e| RepoQaError::ConfigError(format!("Invalid base URI: {}", e)))?;
        }

        let timeout = self.config.timeout();
        builder = builder
            .set_connect_timeout(Some(timeout))
            .set_read_timeout(Some(timeout));

        Ok(builder.build()?)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn repository(
        &self,
        credential: &Credential,
        owner: &str,
        repo: &str,
    ) -> Result<RepositoryMetadata> {
        debug!("Fetching repository metadata for {}/{}", owner, repo);

        let route = format!("/repos/{}/{}", owner, repo);
        self.octocrab(credential)?
            .get(&route, None::<&()>)
            .await
            .map_err(|e| {
                RepoQaError::Upstream(format!(
                    "Failed to fetch repository {}/{}: {}",
                    owner,
                    repo,
                    describe_error(&e)
                ))
            })
    }

    async fn languages(
        &self,
        credential: &Credential,
        owner: &str,
        repo: &str,
    ) -> Result<BTreeMap<String, u64>> {
        debug!("Fetching languages for {}/{}", owner, repo);

        let route = format!("/repos/{}/{}/languages", owner, repo);
        self.octocrab(credential)?
            .get(&route, None::<&()>)
            .await
            .map_err(|e| {
                RepoQaError::Upstream(format!(
                    "Failed to fetch languages for {}/{}: {}",
                    owner,
                    repo,
                    describe_error(&e)
                ))
            })
    }

    async fn topics(
        &self,
        credential: &Credential,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<String>> {
        debug!("Fetching topics for {}/{}", owner, repo);

        let route = format!("/repos/{}/{}/topics", owner, repo);
        let topics: TopicNames = self
            .octocrab(credential)?
            .get(&route, None::<&()>)
            .await
            .map_err(|e| {
                RepoQaError::Upstream(format!(
                    "Failed to fetch topics for {}/{}: {}",
                    owner,
                    repo,
                    describe_error(&e)
                ))
            })?;

        Ok(topics.names)
    }

    async fn search_code(
        &self,
        credential: &Credential,
        query: &str,
        per_page: u8,
    ) -> Result<Vec<RelatedFile>> {
        debug!("Searching code: {}", query);

        let params = CodeSearchParams { q: query, per_page };
        let response: CodeSearchResponse = self
            .octocrab(credential)?
            .get("/search/code", Some(&params))
            .await
            .map_err(|e| {
                RepoQaError::Upstream(format!("Failed to search code: {}", describe_error(&e)))
            })?;

        Ok(response
            .items
            .into_iter()
            .map(|item| RelatedFile {
                name: item.name,
                path: item.path,
                url: item.html_url,
            })
            .collect())
    }
}
