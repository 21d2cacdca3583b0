//! Concurrent multi-comic fetching
//!
//! Every id in a batch gets its own task and its own single-use channel.
//! Tasks finish in any order; results are collected channel by channel in
//! request order, so the output always lines up with the input.

use crate::client::XkcdClient;
use crate::comic::Comic;
use crate::error::{ComicError, Result};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::AbortHandle;

/// Separator between ids in a batch path, e.g. `614.1.2`
pub const ID_SEPARATOR: char = '.';

/// Aborts the wrapped tasks when dropped
#[derive(Default)]
struct AbortOnDrop(Vec<AbortHandle>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}

/// Parse a `.`-separated list of ids.
///
/// Fails on the first token that is not a non-negative integer.
pub fn parse_ids(input: &str) -> Result<Vec<u64>> {
    input
        .split(ID_SEPARATOR)
        .map(|token| {
            token.parse::<u64>().map_err(|source| ComicError::MalformedId {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Fetch all ids concurrently, returning one result per id in input order.
///
/// Dropping the returned future aborts any fetches still in flight.
pub async fn fetch_all(client: &Arc<XkcdClient>, ids: &[u64]) -> Vec<Result<Comic>> {
    let mut tasks = AbortOnDrop::default();
    let mut receivers = Vec::with_capacity(ids.len());

    for &id in ids {
        let (tx, rx) = oneshot::channel();
        let client = Arc::clone(client);

        let handle = tokio::spawn(async move {
            // Receiver is gone only if the batch was abandoned
            let _ = tx.send(client.fetch(id).await);
        });

        tasks.0.push(handle.abort_handle());
        receivers.push((id, rx));
    }

    let mut results = Vec::with_capacity(receivers.len());
    for (id, rx) in receivers {
        let result = rx.await.unwrap_or_else(|_| {
            log::warn!("Fetch task for comic {} ended without a result", id);
            Err(ComicError::TaskFailed { id })
        });
        results.push(result);
    }

    results
}

/// Parse a batch path and fetch every comic in it.
///
/// A malformed id rejects the whole batch before any fetch starts.
pub async fn fetch_batch(client: &Arc<XkcdClient>, input: &str) -> Result<Vec<Result<Comic>>> {
    let ids = parse_ids(input)?;
    log::debug!("Fetching batch of {} comic(s): {:?}", ids.len(), ids);
    Ok(fetch_all(client, &ids).await)
}
