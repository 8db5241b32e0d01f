//! Keep a query fresh without polling.
//!
//! Browser and router events are translated into [`Trigger`]s. Each accepted
//! trigger waits out the debounce window; if no newer trigger arrived in the
//! meantime it forces a full refetch through [`PaginatedQuery::refresh`],
//! the same entry point as a Refresh button.

use serde::de::DeserializeOwned;
use std::cell::Cell;

use crate::{FetchOutcome, PaginatedQuery, RestBackend, time::sleep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The document's visibility state changed.
    Visibility { visible: bool },
    /// The browser regained network connectivity.
    Online,
    /// The router navigated into the page owning the query.
    RouteEntered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revalidated {
    /// The trigger does not call for a refetch.
    Ignored,
    /// A newer trigger arrived during the debounce window.
    Superseded,
    Refetched(FetchOutcome),
}

pub(crate) struct Revalidation {
    sequence: Cell<u64>,
    hidden: Cell<bool>,
    route_seen: Cell<bool>,
}

impl Default for Revalidation {
    fn default() -> Self {
        Self {
            sequence: Cell::new(0),
            hidden: Cell::new(false),
            route_seen: Cell::new(false),
        }
    }
}

impl Revalidation {
    /// Whether `trigger` should lead to a refetch, updating the transition
    /// bookkeeping.
    fn accepts(&self, trigger: Trigger) -> bool {
        match trigger {
            Trigger::Visibility { visible: false } => {
                self.hidden.set(true);
                false
            }
            Trigger::Visibility { visible: true } => self.hidden.replace(false),
            Trigger::Online => true,
            // first entry is the mount itself, which already fetches
            Trigger::RouteEntered => self.route_seen.replace(true),
        }
    }
}

impl<T, B> PaginatedQuery<T, B>
where
    T: Clone + DeserializeOwned + 'static,
    B: RestBackend,
{
    /// Record the document's current visibility without fetching.
    ///
    /// Call once when listeners are attached, so a query mounted in a
    /// background tab refetches on its first hidden-to-visible change.
    pub fn observe_visibility(&self, visible: bool) {
        self.revalidation.hidden.set(!visible);
    }

    pub async fn revalidate(&self, trigger: Trigger) -> Revalidated {
        if !self.is_mounted() || !self.revalidation.accepts(trigger) {
            return Revalidated::Ignored;
        }

        let sequence = self.revalidation.sequence.get() + 1;
        self.revalidation.sequence.set(sequence);
        sleep(self.config().debounce).await;

        if self.revalidation.sequence.get() != sequence {
            return Revalidated::Superseded;
        }
        if !self.is_mounted() {
            return Revalidated::Ignored;
        }
        tracing::debug!(?trigger, "Revalidating");
        Revalidated::Refetched(self.refresh().await)
    }
}
