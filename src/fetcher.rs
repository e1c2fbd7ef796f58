use log::{debug, info};

use crate::client::RepositorySource;
use crate::error::Result;
use crate::types::{Credential, RepositoryInfo};

/// Fetches metadata, languages and topics concurrently and merges them.
///
/// The first failing call aborts the whole fetch.
pub async fn fetch_repository_info<S>(
    source: &S,
    credential: &Credential,
    owner: &str,
    repo: &str,
) -> Result<RepositoryInfo>
where
    S: RepositorySource + ?Sized,
{
    info!("Fetching repository data for {}/{}", owner, repo);

    let (metadata, languages, topics) = tokio::try_join!(
        source.repository(credential, owner, repo),
        source.languages(credential, owner, repo),
        source.topics(credential, owner, repo),
    )?;

    debug!(
        "{}: {} languages, {} topics",
        metadata.full_name,
        languages.len(),
        topics.len()
    );

    Ok(RepositoryInfo::merge(metadata, languages, topics))
}
