use crate::types::Answer;

/// Renders an answer as the markdown shown to the user.
///
/// "Related Files" and "Suggestions" appear only when they have entries.
pub fn render_markdown(answer: &Answer) -> String {
    let mut out = String::from("## Repository Answer\n\n");
    out.push_str(answer.text.trim_end());
    out.push('\n');

    if !answer.related_files.is_empty() {
        out.push_str("\n### Related Files\n\n");
        for file in &answer.related_files {
            out.push_str(&format!("- [{}]({})\n", file.path, file.url));
        }
    }

    if !answer.suggestions.is_empty() {
        out.push_str("\n### Suggestions\n\n");
        for suggestion in &answer.suggestions {
            out.push_str(&format!("- {}\n", suggestion));
        }
    }

    out
}
