use futures::future::Abortable;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    QueryConfig, QueryState, RestBackend,
    fetcher::{fetch_count, fetch_page},
    guard::LifecycleGuard,
    revalidate::Revalidation,
    time::{TimeSource, millis_between},
};

/// What happened to one fetch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Rows were folded into the state.
    Applied,
    /// Every attempt failed; the message is now in `error`.
    Failed(String),
    /// Superseded by a newer fetch or cut off by unmount. State untouched.
    Cancelled,
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Unmounted,
    /// Same page succeeded less than the cool-down window ago.
    CoolDown,
    /// `load_more` while a fetch is running.
    Busy,
    /// `load_more` after a short page.
    NoMorePages,
}

type Listener<T> = Rc<dyn Fn(&QueryState<T>)>;

/// A paginated, cancelable view over one resource.
///
/// Owns its state exclusively. At most one fetch is in flight. Every state
/// change is pushed to the registered listeners.
pub struct PaginatedQuery<T, B> {
    config: QueryConfig,
    backend: B,
    time: TimeSource,
    state: RefCell<QueryState<T>>,
    guard: LifecycleGuard,
    pub(crate) revalidation: Revalidation,
    listeners: RefCell<Vec<Listener<T>>>,
}

impl<T, B> PaginatedQuery<T, B>
where
    T: Clone + DeserializeOwned + 'static,
    B: RestBackend,
{
    pub fn new(config: QueryConfig, backend: B, time: TimeSource) -> Self {
        let state = QueryState::new(config.page_size);
        Self {
            config,
            backend,
            time,
            state: RefCell::new(state),
            guard: LifecycleGuard::new(),
            revalidation: Revalidation::default(),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn snapshot(&self) -> QueryState<T> {
        self.state.borrow().clone()
    }

    pub fn data(&self) -> Vec<T> {
        self.state.borrow().items.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.guard.is_mounted()
    }

    /// Register a callback run after every state change.
    pub fn subscribe(&self, listener: impl Fn(&QueryState<T>) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Initial load on mount: page 1, not forced.
    pub async fn start(&self) -> FetchOutcome {
        self.fetch(1, false).await
    }

    /// Replace everything with a fresh page 1.
    pub async fn refresh(&self) -> FetchOutcome {
        self.fetch(1, true).await
    }

    /// Fetch the next page and append it.
    pub async fn load_more(&self) -> FetchOutcome {
        let (busy, has_more, page) = {
            let state = self.state.borrow();
            (
                state.loading || self.guard.has_in_flight(),
                state.has_more,
                state.page,
            )
        };
        if busy {
            return FetchOutcome::Skipped(SkipReason::Busy);
        }
        if !has_more {
            return FetchOutcome::Skipped(SkipReason::NoMorePages);
        }
        self.fetch(page + 1, false).await
    }

    /// Abort the in-flight fetch and drop every later result.
    pub fn unmount(&self) {
        tracing::debug!(table = %self.config.table, "Query unmounted");
        self.guard.unmount();
    }

    /// Total row count, also stored in the state when known.
    ///
    /// Returns 0 when neither strategy produced a count; the stored total
    /// is left alone in that case. A page fetch started meanwhile owns the
    /// stored total, so a late count is only returned.
    pub async fn fetch_total_count(&self) -> u64 {
        if !self.guard.is_mounted() {
            return 0;
        }
        let generation = self.guard.generation();
        match fetch_count(&self.backend, &self.config).await {
            Some(count) => {
                if self.guard.is_current(generation) {
                    self.update(|state| state.total_count = count);
                }
                count
            }
            None => 0,
        }
    }

    /// Fetch `page`. Forced fetches always go to page 1 and skip the
    /// cool-down.
    #[tracing::instrument(skip(self), fields(table = %self.config.table))]
    pub async fn fetch(&self, page: u32, force: bool) -> FetchOutcome {
        if !self.guard.is_mounted() {
            return FetchOutcome::Skipped(SkipReason::Unmounted);
        }
        let page = if force { 1 } else { page.max(1) };
        if !force && self.in_cooldown(page) {
            tracing::debug!(page, "Skipping fetch inside cool-down window");
            return FetchOutcome::Skipped(SkipReason::CoolDown);
        }

        let ticket = self.guard.begin();
        self.update(|state| {
            state.loading = true;
            state.error = None;
        });

        let request = self.config.page_request(page);
        let work = async {
            let total = if page == 1 {
                fetch_count(&self.backend, &self.config).await
            } else {
                None
            };
            let result =
                fetch_page::<T, B>(&self.backend, &self.config, &request).await;
            (total, result)
        };

        let Ok((total, result)) =
            Abortable::new(work, ticket.registration).await
        else {
            tracing::debug!(page, "Fetch cancelled");
            return FetchOutcome::Cancelled;
        };
        if !self.guard.is_current(ticket.generation) {
            tracing::debug!(page, "Discarding stale fetch result");
            return FetchOutcome::Cancelled;
        }
        self.guard.finish(ticket.generation);

        match result {
            Ok(fetched) => {
                let rows = fetched.rows.len();
                let now = self.time.now();
                self.update(|state| {
                    if let Some(total) = fetched.total_count.or(total) {
                        state.total_count = total;
                    }
                    state.apply_page(page, fetched.rows, now);
                });
                tracing::debug!(page, rows, "Fetched page");
                FetchOutcome::Applied
            }
            Err(e) if e.is_cancelled() => FetchOutcome::Cancelled,
            Err(e) => {
                let message = e.to_string();
                tracing::error!(page, "Fetch failed: {message}");
                self.update(|state| state.apply_failure(message.clone()));
                FetchOutcome::Failed(message)
            }
        }
    }

    fn in_cooldown(&self, page: u32) -> bool {
        let state = self.state.borrow();
        let Some(at) = state.last_successful_fetch_at else {
            return false;
        };
        let window = i64::try_from(self.config.cooldown.as_millis())
            .unwrap_or(i64::MAX);
        page <= state.page && millis_between(at, self.time.now()) < window
    }

    fn update(&self, f: impl FnOnce(&mut QueryState<T>)) {
        f(&mut self.state.borrow_mut());
        let listeners = self.listeners.borrow().clone();
        let state = self.state.borrow();
        for listener in listeners {
            listener(&state);
        }
    }
}

