#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use repo_qa::{Credential, RelatedFile, RepoQaError, RepositoryMetadata, RepositorySource, Result};

pub fn setup_test_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub fn sample_metadata() -> RepositoryMetadata {
    serde_json::from_str(REPO_JSON).expect("valid repository fixture")
}

pub const REPO_JSON: &str = r#"{
    "id": 1,
    "full_name": "acme/tool",
    "description": "A test tool",
    "homepage": null,
    "language": "Go",
    "size": 512,
    "stargazers_count": 42,
    "forks_count": 7,
    "open_issues_count": 25,
    "created_at": "2020-01-15T10:00:00Z",
    "updated_at": "2024-03-01T12:30:00Z",
    "has_pages": false,
    "private": false
}"#;

/// In-memory source that counts every call it receives.
#[derive(Default)]
pub struct CountingSource {
    pub metadata: Option<RepositoryMetadata>,
    pub languages: BTreeMap<String, u64>,
    pub topics: Vec<String>,
    pub hits: Vec<RelatedFile>,
    pub fail_search: bool,
    pub calls: AtomicUsize,
    pub searches: AtomicUsize,
}

impl CountingSource {
    pub fn with_repository() -> Self {
        Self {
            metadata: Some(sample_metadata()),
            languages: BTreeMap::from([("Go".to_string(), 1200), ("Shell".to_string(), 80)]),
            ..Default::default()
        }
    }

    pub fn total_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositorySource for CountingSource {
    async fn repository(
        &self,
        _credential: &Credential,
        owner: &str,
        repo: &str,
    ) -> Result<RepositoryMetadata> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.metadata.clone().ok_or_else(|| {
            RepoQaError::Upstream(format!(
                "Failed to fetch repository {}/{}: Not Found",
                owner, repo
            ))
        })
    }

    async fn languages(
        &self,
        _credential: &Credential,
        _owner: &str,
        _repo: &str,
    ) -> Result<BTreeMap<String, u64>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.languages.clone())
    }

    async fn topics(
        &self,
        _credential: &Credential,
        _owner: &str,
        _repo: &str,
    ) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.topics.clone())
    }

    async fn search_code(
        &self,
        _credential: &Credential,
        _query: &str,
        _per_page: u8,
    ) -> Result<Vec<RelatedFile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.searches.fetch_add(1, Ordering::SeqCst);
        if self.fail_search {
            return Err(RepoQaError::Upstream(
                "Failed to search code: Validation Failed".to_string(),
            ));
        }
        Ok(self.hits.clone())
    }
}
