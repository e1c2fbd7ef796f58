use repo_qa::{classify, Answer, QueryRequest, RelatedFile};

fn main() -> anyhow::Result<()> {
    let request: QueryRequest = serde_json::from_str(
        r#"{"owner": "tokio-rs", "repo": "axum", "question": "How is routing implemented?", "context": "onboarding"}"#,
    )?;

    println!("Question type: {}", classify(&request.question));

    let answer = Answer {
        text: "I found these files that might be relevant to your question:\n\n- axum/src/routing/mod.rs".to_string(),
        related_files: vec![RelatedFile {
            name: "mod.rs".to_string(),
            path: "axum/src/routing/mod.rs".to_string(),
            url: "https://github.com/tokio-rs/axum/blob/main/axum/src/routing/mod.rs".to_string(),
        }],
        suggestions: vec!["Add topics to make the repository easier to discover.".to_string()],
    };

    println!("\n=== JSON ===");
    println!("{}", serde_json::to_string_pretty(&answer)?);

    println!("\n=== Markdown ===");
    println!("{}", answer.to_markdown());

    Ok(())
}
