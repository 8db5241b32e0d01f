//! Count and page fetchers: direct request first, query builder second.

use payloads::{Page, PageRequest};
use serde::de::DeserializeOwned;

use crate::{
    FetchError, QueryConfig, RestBackend,
    time::{sleep, timeout},
};

/// Total row count for `config.table`, best-effort.
///
/// `None` means both strategies failed; callers keep whatever total they
/// already knew.
pub(crate) async fn fetch_count<B: RestBackend>(
    backend: &B,
    config: &QueryConfig,
) -> Option<u64> {
    let table = config.table.as_str();
    match timeout(config.timeout, backend.count_direct(table)).await {
        Some(Ok(count)) => return Some(count),
        Some(Err(e)) => {
            tracing::warn!(table, "Direct count failed, falling back: {e}")
        }
        None => tracing::warn!(
            table,
            "Direct count timed out after {}ms, falling back",
            config.timeout.as_millis()
        ),
    }

    match timeout(config.timeout, backend.count_via_builder(table)).await {
        Some(Ok(count)) => Some(count),
        Some(Err(e)) => {
            tracing::warn!(table, "Count unavailable: {e}");
            None
        }
        None => {
            tracing::warn!(table, "Count unavailable: fallback timed out");
            None
        }
    }
}

/// One page of rows in the configured order.
///
/// The direct request races against `config.timeout`. On failure the query
/// builder is retried up to `config.retry.max_attempts` times with linear
/// backoff, each attempt bound by the same timeout.
pub(crate) async fn fetch_page<T, B>(
    backend: &B,
    config: &QueryConfig,
    request: &PageRequest,
) -> Result<Page<T>, FetchError>
where
    T: DeserializeOwned,
    B: RestBackend,
{
    let table = config.table.as_str();
    let page = request.page;

    match attempt(config, backend.page_direct::<T>(request)).await {
        Ok(rows) => {
            return Ok(Page {
                rows,
                total_count: None,
            });
        }
        Err(e) => {
            tracing::warn!(table, page, "Direct page fetch failed: {e}")
        }
    }

    let policy = config.retry;
    let mut attempts = 1;
    loop {
        match attempt(config, backend.page_via_builder::<T>(request)).await {
            Ok(page) => return Ok(page),
            Err(e) if attempts < policy.max_attempts => {
                tracing::warn!(
                    table,
                    page,
                    "Fallback attempt {}/{} failed: {e}",
                    attempts,
                    policy.max_attempts
                );
                sleep(policy.delay_after(attempts)).await;
                attempts += 1;
            }
            Err(e) => {
                return Err(FetchError::Exhausted {
                    attempts,
                    last: Box::new(e),
                });
            }
        }
    }
}

async fn attempt<T>(
    config: &QueryConfig,
    request: impl Future<Output = Result<T, payloads::ClientError>>,
) -> Result<T, FetchError> {
    match timeout(config.timeout, request).await {
        Some(result) => Ok(result?),
        None => Err(FetchError::Timeout(config.timeout)),
    }
}
