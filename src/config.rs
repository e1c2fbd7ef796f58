use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub github: GitHubConfig,
    pub answers: AnswerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Environment variable host programs read the token from.
    pub token_env_var: String,
    pub api_base_url: String,
    pub timeout_seconds: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token_env_var: "GITHUB_TOKEN".to_string(),
            api_base_url: "https://api.github.com".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl GitHubConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn uses_default_api(&self) -> bool {
        self.api_base_url.is_empty()
            || self.api_base_url.trim_end_matches('/') == "https://api.github.com"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerConfig {
    /// Maximum number of code search hits listed in a technical answer.
    pub search_page_size: u8,
    /// Open issue count above which a suggestion is emitted.
    pub open_issue_threshold: u32,
    /// chrono format string for creation / update dates.
    pub date_format: String,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            search_page_size: 5,
            open_issue_threshold: 20,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}
