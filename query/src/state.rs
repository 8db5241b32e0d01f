use jiff::Timestamp;

/// Snapshot of one paginated query, as a view renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    /// Rows in server order, grown by appending later pages.
    pub items: Vec<T>,
    /// Highest page fetched so far, 1-based. `0` until the first page lands.
    pub page: u32,
    pub page_size: u32,
    /// Server-reported total, independent of how many rows are loaded.
    pub total_count: u64,
    /// True iff the last page came back full. A total that is an exact
    /// multiple of the page size costs one extra, empty fetch.
    pub has_more: bool,
    pub loading: bool,
    /// Message of the last terminal page-fetch failure.
    pub error: Option<String>,
    pub last_successful_fetch_at: Option<Timestamp>,
}

impl<T> QueryState<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            page_size,
            total_count: 0,
            has_more: false,
            loading: false,
            error: None,
            last_successful_fetch_at: None,
        }
    }

    /// Returns true if this is the initial load (nothing fetched yet,
    /// currently loading, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.loading && self.page == 0 && self.error.is_none()
    }

    /// Fold a fetched page into the state. Page 1 replaces, later pages
    /// append.
    pub(crate) fn apply_page(
        &mut self,
        page: u32,
        rows: Vec<T>,
        at: Timestamp,
    ) {
        self.has_more = rows.len() == self.page_size as usize;
        if page <= 1 {
            self.items = rows;
        } else {
            self.items.extend(rows);
        }
        self.page = page.max(1);
        self.loading = false;
        self.error = None;
        self.last_successful_fetch_at = Some(at);
    }

    /// Record a terminal failure. Loaded rows are kept.
    pub(crate) fn apply_failure(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> Timestamp {
        "2025-01-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn short_page_ends_pagination() {
        let mut state = QueryState::new(3);
        state.apply_page(1, vec![1, 2, 3], at());
        assert!(state.has_more);

        state.apply_page(2, vec![4], at());
        assert_eq!(state.items, vec![1, 2, 3, 4]);
        assert_eq!(state.page, 2);
        assert!(!state.has_more);

        state.apply_page(3, vec![], at());
        assert!(!state.has_more);
    }

    #[test]
    fn first_page_replaces_and_failure_preserves_rows() {
        let mut state = QueryState::new(2);
        state.apply_page(1, vec![1, 2], at());
        state.apply_page(2, vec![3, 4], at());
        state.apply_page(1, vec![9, 8], at());
        assert_eq!(state.items, vec![9, 8]);
        assert_eq!(state.page, 1);

        state.loading = true;
        state.apply_failure("boom".into());
        assert_eq!(state.items, vec![9, 8]);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.loading);
    }
}
