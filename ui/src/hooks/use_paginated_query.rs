use payloads::{APIClient, Resource};
use query::{PaginatedQuery, QueryConfig, QueryState, TimeSource};
use yew::prelude::*;

use crate::components::ErrorBox;
use crate::get_api_client;
use crate::hooks::use_revalidation;

pub type ResourceQuery<R> = PaginatedQuery<R, APIClient>;

/// Paginated list hook return type
pub struct PaginatedHookReturn<T> {
    pub data: Vec<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub has_more: bool,
    pub total_count: u64,
    /// Last page loaded, 0 until the first page arrives.
    pub page: u32,
    pub refresh: Callback<()>,
    pub load_more: Callback<()>,
}

impl<T> PaginatedHookReturn<T> {
    /// No page has arrived yet and nothing has failed.
    pub fn is_initial_loading(&self) -> bool {
        self.page == 0 && self.error.is_none()
    }

    /// Render based on list state with contextual loading/error messages.
    ///
    /// Until the first page arrives this shows a loading message, or the
    /// error with a retry button if that first load failed. Afterwards
    /// `render_fn` receives the loaded rows, whether a fetch is running and
    /// the error of the last failed fetch (rows from earlier fetches are
    /// still passed in).
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&[T], bool, Option<&String>) -> Html,
    {
        if self.is_initial_loading() {
            return html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Loading {}...", context)}
                    </p>
                </div>
            };
        }
        match (&self.error, self.page) {
            (Some(error), 0) => html! {
                <ErrorBox
                    message={format!("Error loading {}: {}", context, error)}
                    on_retry={self.refresh.clone()}
                />
            },
            _ => render_fn(&self.data, self.is_loading, self.error.as_ref()),
        }
    }
}

/// Paginated, cancelable list of `R` with revalidation.
///
/// Loads the first page on mount and cancels whatever is in flight on
/// unmount. Tab visibility, connectivity and route entry refetch page 1.
#[hook]
pub fn use_paginated_query<R>() -> PaginatedHookReturn<R>
where
    R: Resource,
{
    let query = use_memo((), |_| {
        ResourceQuery::<R>::new(
            QueryConfig::for_resource::<R>(),
            get_api_client(),
            TimeSource::new(),
        )
    });
    let state = use_state(|| query.snapshot());

    // Mirror engine state into the component, load on mount
    {
        let query = query.clone();
        let setter = state.setter();
        use_effect_with((), move |_| {
            query.subscribe(move |snapshot: &QueryState<R>| {
                setter.set(snapshot.clone())
            });
            {
                let query = query.clone();
                yew::platform::spawn_local(async move {
                    let outcome = query.start().await;
                    tracing::debug!(table = R::TABLE, ?outcome, "Initial load");
                });
            }
            move || query.unmount()
        });
    }

    use_revalidation(query.clone());

    let refresh = {
        let query = query.clone();
        Callback::from(move |_| {
            let query = query.clone();
            yew::platform::spawn_local(async move {
                query.refresh().await;
            });
        })
    };

    let load_more = {
        let query = query.clone();
        Callback::from(move |_| {
            let query = query.clone();
            yew::platform::spawn_local(async move {
                let outcome = query.load_more().await;
                tracing::debug!(table = R::TABLE, ?outcome, "Load more");
            });
        })
    };

    PaginatedHookReturn {
        data: state.items.clone(),
        is_loading: state.loading,
        error: state.error.clone(),
        has_more: state.has_more,
        total_count: state.total_count,
        page: state.page,
        refresh,
        load_more,
    }
}
