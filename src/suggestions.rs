use crate::types::RepositoryInfo;

pub const ADD_DESCRIPTION: &str =
    "Add a description to help others understand the purpose of this repository.";
pub const ADD_HOMEPAGE: &str =
    "Consider setting up a homepage or GitHub Pages site for documentation.";
pub const ADD_TOPICS: &str = "Add topics to make the repository easier to discover.";
pub const TRIAGE_ISSUES: &str =
    "Consider triaging the open issues to keep the project healthy.";

/// Improvement hints for missing metadata, in a fixed order.
///
/// The question and context are accepted for symmetry with the answer
/// generators; only the repository data drives the result.
pub fn generate_suggestions(
    info: &RepositoryInfo,
    _question: &str,
    _context: &str,
    open_issue_threshold: u32,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if info.description.is_none() {
        suggestions.push(ADD_DESCRIPTION.to_string());
    }

    if info.homepage.is_none() && !info.has_pages {
        suggestions.push(ADD_HOMEPAGE.to_string());
    }

    if info.topics.is_empty() {
        suggestions.push(ADD_TOPICS.to_string());
    }

    if info.open_issues_count > u64::from(open_issue_threshold) {
        suggestions.push(TRIAGE_ISSUES.to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn complete_info() -> RepositoryInfo {
        RepositoryInfo {
            full_name: "acme/tool".to_string(),
            description: Some("A tool".to_string()),
            homepage: Some("https://acme.dev".to_string()),
            topics: vec!["cli".to_string()],
            language: Some("Rust".to_string()),
            languages: BTreeMap::new(),
            size: 10,
            stargazers_count: 0,
            forks_count: 0,
            open_issues_count: 20,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            has_pages: false,
        }
    }

    #[test]
    fn test_complete_repository_has_no_suggestions() {
        assert!(generate_suggestions(&complete_info(), "q", "ctx", 20).is_empty());
    }

    #[test]
    fn test_all_suggestions_in_order() {
        let mut info = complete_info();
        info.description = None;
        info.homepage = None;
        info.topics.clear();
        info.open_issues_count = 21;

        assert_eq!(
            generate_suggestions(&info, "q", "ctx", 20),
            vec![ADD_DESCRIPTION, ADD_HOMEPAGE, ADD_TOPICS, TRIAGE_ISSUES]
        );
    }

    #[test]
    fn test_pages_satisfy_homepage() {
        let mut info = complete_info();
        info.homepage = None;
        info.has_pages = true;
        assert!(generate_suggestions(&info, "q", "ctx", 20).is_empty());

        info.has_pages = false;
        assert_eq!(generate_suggestions(&info, "q", "ctx", 20), vec![ADD_HOMEPAGE]);
    }

    #[test]
    fn test_issue_threshold_is_exclusive() {
        let mut info = complete_info();
        info.open_issues_count = 20;
        assert!(generate_suggestions(&info, "q", "ctx", 20).is_empty());

        info.open_issues_count = 21;
        assert_eq!(generate_suggestions(&info, "q", "ctx", 20), vec![TRIAGE_ISSUES]);
    }
}
