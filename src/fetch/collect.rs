//! Concurrent download of independent lists.

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, warn};

use super::FetchLines;
use crate::error_handling::{CollectError, FetchError};

/// Downloads every URL concurrently and merges their lines.
///
/// One task is spawned per URL and all of them are joined before the outcome
/// is decided, so no fetch is left running when this returns. If any fetch
/// failed the whole batch fails and the lines of the successful ones are
/// dropped; the reported error is the first failure in `urls` order.
///
/// On success the lines are concatenated in `urls` order. Duplicates are kept.
///
/// # Errors
///
/// - `CollectError::Worker` if a fetch task panicked
/// - `CollectError::Fetch` if one or more downloads failed
pub async fn collect_all<F>(fetcher: &Arc<F>, urls: &[String]) -> Result<Vec<String>, CollectError>
where
    F: FetchLines + 'static,
{
    let handles: Vec<_> = urls
        .iter()
        .cloned()
        .map(|url| {
            let fetcher = Arc::clone(fetcher);
            tokio::spawn(async move { fetcher.fetch_lines(&url).await })
        })
        .collect();

    let outcomes = join_all(handles).await;

    let mut batches = Vec::with_capacity(urls.len());
    let mut failures: Vec<FetchError> = Vec::new();
    for (url, outcome) in urls.iter().zip(outcomes) {
        match outcome {
            Ok(Ok(lines)) => batches.push(lines),
            Ok(Err(e)) => {
                warn!("Failed to fetch {url}: {e}");
                failures.push(e);
            }
            Err(source) => {
                return Err(CollectError::Worker {
                    url: url.clone(),
                    source,
                })
            }
        }
    }

    let failed = failures.len();
    if let Some(source) = failures.into_iter().next() {
        return Err(CollectError::Fetch {
            failed,
            total: urls.len(),
            source,
        });
    }

    let lines: Vec<String> = batches.into_iter().flatten().collect();
    debug!("Collected {} lines from {} lists", lines.len(), urls.len());
    Ok(lines)
}
