use repo_qa::{Credential, QueryRequest, RepoAssistantBuilder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let slug = args.next().unwrap_or_else(|| "tokio-rs/axum".to_string());
    let question = args
        .next()
        .unwrap_or_else(|| "What is this repository about?".to_string());
    let context = args.next();

    let mut request = QueryRequest::from_slug(&slug, question)?;
    if let Some(context) = context {
        request = request.with_context(context);
    }

    let assistant = RepoAssistantBuilder::new().build();
    let token_var = &assistant.source().config().token_env_var;
    let credential = Credential::from_env(token_var);

    println!("Asking about {}: {}\n", request.full_name(), request.question);

    let answer = assistant
        .answer_question(&request, credential.as_ref())
        .await?;

    println!("{}", answer.to_markdown());

    Ok(())
}
