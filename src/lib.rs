pub mod answer;
pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod render;
pub mod suggestions;
pub mod types;

use log::{info, warn};

pub use answer::{
    build_search_query, generate_general, generate_statistics, generate_technical, RepoSnapshot,
    NO_CODE_FOUND,
};
pub use classifier::{classify, QuestionType};
pub use client::{GitHubClient, RepositorySource};
pub use config::{AnswerConfig, AssistantConfig, GitHubConfig};
pub use error::{RepoQaError, Result};
pub use fetcher::fetch_repository_info;
pub use render::render_markdown;
pub use suggestions::generate_suggestions;
pub use types::{Answer, Credential, QueryRequest, RelatedFile, RepositoryInfo, RepositoryMetadata};

/// Answers questions about GitHub repositories.
pub struct RepoAssistant<S = GitHubClient> {
    source: S,
    config: AnswerConfig,
}

impl RepoAssistant<GitHubClient> {
    pub fn new() -> Self {
        Self::with_config(AssistantConfig::default())
    }

    pub fn with_config(config: AssistantConfig) -> Self {
        Self {
            source: GitHubClient::with_config(config.github),
            config: config.answers,
        }
    }
}

impl Default for RepoAssistant<GitHubClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RepositorySource> RepoAssistant<S> {
    pub fn with_source(source: S, config: AnswerConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &AnswerConfig {
        &self.config
    }

    /// Answers one question.
    ///
    /// A missing or blank credential fails with [`RepoQaError::MissingCredential`]
    /// before any request is made. Every later failure is returned as
    /// [`RepoQaError::Operation`] carrying the original message.
    pub async fn answer_question(
        &self,
        request: &QueryRequest,
        credential: Option<&Credential>,
    ) -> Result<Answer> {
        let credential = credential
            .filter(|c| !c.is_empty())
            .ok_or(RepoQaError::MissingCredential)?;

        self.answer_with(request, credential).await.map_err(|e| {
            warn!("Failed to answer question about {}: {}", request.full_name(), e);
            e.into_operation()
        })
    }

    async fn answer_with(&self, request: &QueryRequest, credential: &Credential) -> Result<Answer> {
        if request.owner.trim().is_empty() || request.repo.trim().is_empty() {
            return Err(RepoQaError::InvalidRepository(format!(
                "Owner and repository name are required, got: '{}'",
                request.full_name()
            )));
        }

        let info =
            fetch_repository_info(&self.source, credential, &request.owner, &request.repo).await?;

        let question_type = classify(&request.question);
        info!("Answering {} question about {}", question_type, info.full_name);

        let mut answer = match question_type {
            QuestionType::General => Answer::new(generate_general(&info, &request.question)),
            QuestionType::Technical => {
                let (text, related_files) = generate_technical(
                    &self.source,
                    credential,
                    &info,
                    &request.question,
                    self.config.search_page_size,
                )
                .await?;
                Answer {
                    text,
                    related_files,
                    suggestions: Vec::new(),
                }
            }
            QuestionType::Statistics => Answer::new(generate_statistics(
                &info,
                &request.question,
                &self.config.date_format,
            )),
        };

        if request.has_context() {
            answer.suggestions = generate_suggestions(
                &info,
                &request.question,
                request.context.as_deref().unwrap_or_default(),
                self.config.open_issue_threshold,
            );
        }

        Ok(answer)
    }
}

pub struct RepoAssistantBuilder {
    config: AssistantConfig,
}

impl RepoAssistantBuilder {
    pub fn new() -> Self {
        Self {
            config: AssistantConfig::default(),
        }
    }

    pub fn config(mut self, config: AssistantConfig) -> Self {
        self.config = config;
        self
    }

    pub fn token_env_var(mut self, var_name: impl Into<String>) -> Self {
        self.config.github.token_env_var = var_name.into();
        self
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.github.api_base_url = url.into();
        self
    }

    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.github.timeout_seconds = seconds;
        self
    }

    pub fn search_page_size(mut self, size: u8) -> Self {
        self.config.answers.search_page_size = size.max(1);
        self
    }

    pub fn open_issue_threshold(mut self, threshold: u32) -> Self {
        self.config.answers.open_issue_threshold = threshold;
        self
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.config.answers.date_format = format.into();
        self
    }

    pub fn build(self) -> RepoAssistant<GitHubClient> {
        RepoAssistant::with_config(self.config)
    }
}

impl Default for RepoAssistantBuilder {
    fn default() -> Self {
        Self::new()
    }
}
