use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::client::RepositorySource;
use crate::error::Result;
use crate::types::{Credential, RelatedFile, RepositoryInfo};

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

pub const NO_CODE_FOUND: &str =
    "I couldn't find any code related to your question in this repository.";

/// Answers overview questions from the description, language, homepage and topics.
pub fn generate_general(info: &RepositoryInfo, question: &str) -> String {
    if !question.to_lowercase().contains("about") {
        return match &info.description {
            Some(description) => {
                format!("Here's what I know about this repository: {}", description)
            }
            None => "This repository does not have a description yet.".to_string(),
        };
    }

    let mut text = format!(
        "This repository is {}, written primarily in {}.",
        info.description.as_deref().unwrap_or("a project"),
        info.language.as_deref().unwrap_or("an unknown language")
    );

    if let Some(homepage) = &info.homepage {
        text.push_str(&format!(" You can find more information at {}.", homepage));
    }

    if !info.topics.is_empty() {
        text.push_str(&format!(
            " It's tagged with the following topics: {}.",
            info.topics.join(", ")
        ));
    }

    text
}

fn punctuation() -> &'static Regex {
    static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
    PUNCTUATION.get_or_init(|| Regex::new(r"[^\w\s]").expect("valid punctuation regex"))
}

/// Turns a question into a code search query scoped to one repository.
pub fn build_search_query(question: &str, full_name: &str) -> String {
    let cleaned = punctuation().replace_all(question, "");
    format!("{} repo:{}", cleaned.trim(), full_name)
}

/// Answers implementation questions by searching the repository's code.
///
/// `per_page` is at least 1; GitHub treats 0 as its own default page size.
pub async fn generate_technical<S>(
    source: &S,
    credential: &Credential,
    info: &RepositoryInfo,
    question: &str,
    per_page: u8,
) -> Result<(String, Vec<RelatedFile>)>
where
    S: RepositorySource + ?Sized,
{
    let query = build_search_query(question, &info.full_name);
    let files = source
        .search_code(credential, &query, per_page.max(1))
        .await?;
    debug!("Code search for {} returned {} hits", info.full_name, files.len());

    if files.is_empty() {
        return Ok((NO_CODE_FOUND.to_string(), files));
    }

    let listing = files
        .iter()
        .map(|file| format!("- {} ({})", file.path, file.url))
        .collect::<Vec<_>>()
        .join("\n");

    Ok((
        format!(
            "I found these files that might be relevant to your question:\n\n{}",
            listing
        ),
        files,
    ))
}

/// Headline numbers of a repository with calendar dates already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSnapshot {
    pub size: u64,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub language_count: usize,
    pub created: String,
    pub last_updated: String,
}

impl RepoSnapshot {
    pub fn from_info(info: &RepositoryInfo, date_format: &str) -> Self {
        Self {
            size: info.size,
            stars: info.stargazers_count,
            forks: info.forks_count,
            open_issues: info.open_issues_count,
            language_count: info.languages.len(),
            created: format_date(&info.created_at, date_format),
            last_updated: format_date(&info.updated_at, date_format),
        }
    }
}

/// Formats a date, falling back to ISO dates when the format string is invalid.
pub fn format_date(date: &DateTime<Utc>, date_format: &str) -> String {
    let valid = !StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error));
    if valid {
        date.format(date_format).to_string()
    } else {
        warn!("Invalid date format {:?}, using {}", date_format, DEFAULT_DATE_FORMAT);
        date.format(DEFAULT_DATE_FORMAT).to_string()
    }
}

/// Answers numeric questions; the first matching topic wins.
pub fn generate_statistics(info: &RepositoryInfo, question: &str, date_format: &str) -> String {
    let question = question.to_lowercase();
    let stats = RepoSnapshot::from_info(info, date_format);

    if question.contains("language") {
        format!(
            "This repository uses {} different programming languages.",
            stats.language_count
        )
    } else if question.contains("popular") || question.contains("stars") {
        format!(
            "This repository has {} stars and {} forks.",
            stats.stars, stats.forks
        )
    } else if question.contains("issue") {
        format!("This repository has {} open issues.", stats.open_issues)
    } else {
        format!(
            "Repository Statistics:\n\
             - Size: {} KB\n\
             - Stars: {}\n\
             - Forks: {}\n\
             - Open Issues: {}\n\
             - Languages: {}\n\
             - Created: {}\n\
             - Last Updated: {}",
            stats.size,
            stats.stars,
            stats.forks,
            stats.open_issues,
            stats.language_count,
            stats.created,
            stats.last_updated
        )
    }
}
