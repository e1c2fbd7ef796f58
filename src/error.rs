use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoQaError {
    #[error("GitHub token is required but was not provided")]
    MissingCredential,

    #[error("GitHub API error: {0}")]
    Upstream(String),

    #[error("Failed to answer question: {0}")]
    Operation(String),

    #[error("Invalid repository format: {0}")]
    InvalidRepository(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Octocrab error: {0}")]
    OctocrabError(#[from] octocrab::Error),
}

impl RepoQaError {
    /// Wraps a failure raised while answering into [`RepoQaError::Operation`].
    pub fn into_operation(self) -> Self {
        match self {
            RepoQaError::MissingCredential | RepoQaError::Operation(_) => self,
            other => RepoQaError::Operation(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RepoQaError>;
