//! Paginated, cancelable fetching of backend resources.
//!
//! ## Design Decisions
//!
//! ### Single flight
//! - **One request per query**: starting a fetch aborts the previous one
//!   through its `AbortHandle` and bumps a generation counter. Results are
//!   applied only while their generation is current and the query is still
//!   mounted, so superseded or orphaned responses never touch state.
//! - **Cancellation is neutral**: an aborted fetch reports
//!   [`FetchOutcome::Cancelled`] and leaves `error` alone.
//!
//! ### Two paths to the same rows
//! - **Direct first**: each page and count is first requested with a
//!   hand-built query string, raced against [`QueryConfig::timeout`].
//! - **Query builder second**: on failure or timeout the same window is
//!   requested through the builder form, retried with linear backoff per
//!   [`RetryPolicy`]. Its `Content-Range` total refreshes `total_count`.
//!
//! ### Failure policy
//! - **Rows are kept**: a terminal failure of any page sets `error` but
//!   never clears loaded rows; on the very first load that means the list
//!   stays empty.
//! - **Counts are best-effort**: a failed count is logged and the previous
//!   total kept.
//!
//! ### Scheduling
//! - Everything runs on one thread. State lives in `RefCell`s and borrows
//!   are never held across an await.

pub mod backend;
pub mod config;
pub mod error;
mod fetcher;
mod guard;
pub mod paginated;
pub mod revalidate;
pub mod state;
pub mod time;

pub use backend::RestBackend;
pub use config::{DEFAULT_PAGE_SIZE, QueryConfig, RetryPolicy};
pub use error::FetchError;
pub use paginated::{FetchOutcome, PaginatedQuery, SkipReason};
pub use revalidate::{Revalidated, Trigger};
pub use state::QueryState;
pub use time::TimeSource;
