use payloads::{Order, PageRequest, Resource};
use std::time::Duration;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Retries of the fallback path, with linear backoff between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total fallback attempts, at least 1.
    pub max_attempts: u32,
    /// Delay before attempt `n + 1` is `backoff * n`.
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff * attempt
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(2, Duration::from_millis(500))
    }
}

/// Everything a paginated query needs to know about one resource.
///
/// ```rust
/// use query::QueryConfig;
/// use std::time::Duration;
///
/// let config = QueryConfig::for_resource::<payloads::Candidate>()
///     .page_size(50)
///     .timeout(Duration::from_secs(5));
/// assert_eq!(config.table, "candidates");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    pub table: String,
    pub select: String,
    pub order: Order,
    pub page_size: u32,
    /// Race limit for the direct request
    pub timeout: Duration,
    pub retry: RetryPolicy,
    /// Non-forced repeats of a fetch within this window are dropped
    pub cooldown: Duration,
    /// Quiet period before a revalidation trigger refetches
    pub debounce: Duration,
}

impl QueryConfig {
    pub fn new(table: impl Into<String>, order: Order) -> Self {
        Self {
            table: table.into(),
            select: "*".to_string(),
            order,
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(8),
            retry: RetryPolicy::default(),
            cooldown: Duration::from_secs(2),
            debounce: Duration::from_millis(400),
        }
    }

    pub fn for_resource<R: Resource>() -> Self {
        Self::new(R::TABLE, R::default_order()).select(R::SELECT)
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.to_string();
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn page_request(&self, page: u32) -> PageRequest {
        PageRequest {
            table: self.table.clone(),
            select: self.select.clone(),
            order: self.order.clone(),
            page: page.max(1),
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::Direction;

    #[test]
    fn resource_config_uses_resource_defaults() {
        let config = QueryConfig::for_resource::<payloads::Sale>();
        assert_eq!(config.table, "sales");
        assert_eq!(config.order.column, "closed_at");
        assert_eq!(config.order.direction, Direction::Desc);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);

        let request = config.page_request(0);
        assert_eq!(request.page, 1);
        assert_eq!(request.select, payloads::Sale::SELECT);
    }

    #[test]
    fn backoff_is_linear_and_attempts_are_clamped() {
        let policy = RetryPolicy::new(0, Duration::from_millis(300));
        assert_eq!(policy.max_attempts, 1);
        assert_eq!(policy.delay_after(1), Duration::from_millis(300));
        assert_eq!(policy.delay_after(3), Duration::from_millis(900));
    }
}
