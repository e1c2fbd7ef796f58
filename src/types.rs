use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{RepoQaError, Result};

/// Inbound question about one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub owner: String,
    pub repo: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl QueryRequest {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        question: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            question: question.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn from_slug(slug: &str, question: impl Into<String>) -> Result<Self> {
        let parts: Vec<&str> = slug.trim().trim_end_matches('/').split('/').collect();
        if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
            return Err(RepoQaError::InvalidRepository(format!(
                "Expected 'owner/name', got: {}",
                slug
            )));
        }
        Ok(Self::new(parts[0], parts[1], question))
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Context counts only when it carries text.
    pub fn has_context(&self) -> bool {
        self.context.as_deref().map_or(false, |c| !c.is_empty())
    }
}

/// GitHub access token. Never serialized and redacted in `Debug`.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn from_env(var_name: &str) -> Option<Self> {
        std::env::var(var_name).ok().map(Self)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Fields of `GET /repos/{owner}/{repo}` that answers consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub has_pages: bool,
}

/// Metadata, language breakdown and topics of one repository, merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryInfo {
    pub full_name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub topics: Vec<String>,
    /// Primary language as reported by GitHub.
    pub language: Option<String>,
    /// Bytes of code per language.
    pub languages: BTreeMap<String, u64>,
    /// Size in KB.
    pub size: u64,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub has_pages: bool,
}

impl RepositoryInfo {
    pub fn merge(
        metadata: RepositoryMetadata,
        languages: BTreeMap<String, u64>,
        topics: Vec<String>,
    ) -> Self {
        Self {
            full_name: metadata.full_name,
            description: non_blank(metadata.description),
            homepage: non_blank(metadata.homepage),
            topics,
            language: non_blank(metadata.language),
            languages,
            size: metadata.size,
            stargazers_count: metadata.stargazers_count,
            forks_count: metadata.forks_count,
            open_issues_count: metadata.open_issues_count,
            created_at: metadata.created_at,
            updated_at: metadata.updated_at,
            has_pages: metadata.has_pages,
        }
    }
}

// GitHub returns "" for cleared descriptions and homepages.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// One code search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedFile {
    pub name: String,
    pub path: String,
    pub url: String,
}

/// Result handed back to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub text: String,
    pub related_files: Vec<RelatedFile>,
    pub suggestions: Vec<String>,
}

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn to_markdown(&self) -> String {
        crate::render::render_markdown(self)
    }
}
