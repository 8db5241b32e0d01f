use jiff::Timestamp;
#[cfg(any(feature = "mock-time", test))]
use std::{cell::Cell, rc::Rc};
use std::{future::Future, pin::pin, time::Duration};

use futures::future::{Either, select};

/// Wall clock used for the cool-down window.
///
/// With `mock-time` the clock can be pinned and advanced by hand.
#[derive(Clone, Default)]
pub struct TimeSource {
    #[cfg(any(feature = "mock-time", test))]
    time: Option<Rc<Cell<Timestamp>>>,
}

impl TimeSource {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(any(feature = "mock-time", test))]
    pub fn mocked(initial_time: Timestamp) -> Self {
        Self {
            time: Some(Rc::new(Cell::new(initial_time))),
        }
    }

    pub fn now(&self) -> Timestamp {
        self.mocked_now().unwrap_or_else(Timestamp::now)
    }

    #[cfg(any(feature = "mock-time", test))]
    fn mocked_now(&self) -> Option<Timestamp> {
        self.time.as_ref().map(|time| time.get())
    }

    #[cfg(not(any(feature = "mock-time", test)))]
    fn mocked_now(&self) -> Option<Timestamp> {
        None
    }

    #[cfg(any(feature = "mock-time", test))]
    pub fn advance(&self, duration: jiff::Span) {
        if let Some(time) = &self.time {
            time.set(time.get() + duration);
        }
    }

    #[cfg(any(feature = "mock-time", test))]
    pub fn set(&self, time: Timestamp) {
        if let Some(current) = &self.time {
            current.set(time);
        }
    }
}

/// Milliseconds from `earlier` to `later`, negative if the clock went back.
pub(crate) fn millis_between(earlier: Timestamp, later: Timestamp) -> i64 {
    later.as_millisecond() - earlier.as_millisecond()
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await
}

/// Race `future` against a timer. `None` means the timer won.
pub async fn timeout<F: Future>(
    duration: Duration,
    future: F,
) -> Option<F::Output> {
    let future = pin!(future);
    let timer = pin!(sleep(duration));
    match select(future, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}
