use serde::{Deserialize, Serialize};
use std::fmt;

const TECHNICAL_KEYWORDS: &[&str] = &["how", "implement", "code", "function", "class", "method"];
const STATISTICS_KEYWORDS: &[&str] = &["many", "count", "size", "number", "statistics"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    #[default]
    General,
    Technical,
    Statistics,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionType::General => "general",
            QuestionType::Technical => "technical",
            QuestionType::Statistics => "statistics",
        };
        f.write_str(name)
    }
}

/// Picks the answer generator for a question by keyword substrings.
///
/// Technical keywords win over statistics keywords; anything else is general.
pub fn classify(question: &str) -> QuestionType {
    let question = question.to_lowercase();

    if TECHNICAL_KEYWORDS.iter().any(|k| question.contains(k)) {
        QuestionType::Technical
    } else if STATISTICS_KEYWORDS.iter().any(|k| question.contains(k)) {
        QuestionType::Statistics
    } else {
        QuestionType::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technical_questions() {
        assert_eq!(classify("How does routing work?"), QuestionType::Technical);
        assert_eq!(classify("Where is the parser implemented"), QuestionType::Technical);
        assert_eq!(classify("Show me the main FUNCTION"), QuestionType::Technical);
        assert_eq!(classify("which class handles auth"), QuestionType::Technical);
    }

    #[test]
    fn test_technical_wins_over_statistics() {
        assert_eq!(classify("How many stars?"), QuestionType::Technical);
        assert_eq!(classify("count the methods"), QuestionType::Technical);
    }

    #[test]
    fn test_statistics_questions() {
        assert_eq!(classify("What is the repo size?"), QuestionType::Statistics);
        assert_eq!(classify("Number of forks"), QuestionType::Statistics);
        assert_eq!(classify("Repository statistics please"), QuestionType::Statistics);
    }

    #[test]
    fn test_everything_else_is_general() {
        assert_eq!(classify("What is this repository about?"), QuestionType::General);
        assert_eq!(classify(""), QuestionType::General);
        assert_eq!(classify("Who maintains it?"), QuestionType::General);
    }

    #[test]
    fn test_matches_substrings() {
        // "show" contains "how"
        assert_eq!(classify("show the readme"), QuestionType::Technical);
    }

    #[test]
    fn test_display() {
        assert_eq!(QuestionType::Statistics.to_string(), "statistics");
        assert_eq!(QuestionType::default(), QuestionType::General);
    }
}
