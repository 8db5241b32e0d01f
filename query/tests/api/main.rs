mod client;
mod fallback;
mod pagination;
mod revalidation;

use payloads::{APIClient, Resource};
use query::{PaginatedQuery, QueryConfig, RetryPolicy, TimeSource};
use std::time::Duration;

/// Short timings so failure paths finish quickly against a live server.
fn test_config<R: Resource>() -> QueryConfig {
    QueryConfig::for_resource::<R>()
        .timeout(Duration::from_millis(300))
        .retry(RetryPolicy::new(2, Duration::from_millis(20)))
        .debounce(Duration::from_millis(50))
}

fn query_for<R: Resource>(client: &APIClient) -> PaginatedQuery<R, APIClient> {
    PaginatedQuery::new(test_config::<R>(), client.clone(), TimeSource::new())
}
