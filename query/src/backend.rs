use payloads::{APIClient, ClientError, Page, PageRequest};
use serde::de::DeserializeOwned;

/// The two equivalent access paths to the hosted REST interface.
///
/// Both must address the same table, select list, order and window, and
/// decode into the same row type.
#[allow(async_fn_in_trait)]
pub trait RestBackend {
    async fn count_direct(&self, table: &str) -> Result<u64, ClientError>;

    async fn count_via_builder(&self, table: &str) -> Result<u64, ClientError>;

    async fn page_direct<T: DeserializeOwned>(
        &self,
        request: &PageRequest,
    ) -> Result<Vec<T>, ClientError>;

    async fn page_via_builder<T: DeserializeOwned>(
        &self,
        request: &PageRequest,
    ) -> Result<Page<T>, ClientError>;
}

impl RestBackend for APIClient {
    async fn count_direct(&self, table: &str) -> Result<u64, ClientError> {
        APIClient::count_direct(self, table).await
    }

    async fn count_via_builder(&self, table: &str) -> Result<u64, ClientError> {
        self.from(table).select("*").count().await
    }

    async fn page_direct<T: DeserializeOwned>(
        &self,
        request: &PageRequest,
    ) -> Result<Vec<T>, ClientError> {
        APIClient::page_direct(self, request).await
    }

    async fn page_via_builder<T: DeserializeOwned>(
        &self,
        request: &PageRequest,
    ) -> Result<Page<T>, ClientError> {
        let (from, to) = request.range();
        self.from(&request.table)
            .select(&request.select)
            .order(&request.order.column, request.order.direction.is_ascending())
            .range(from, to)
            .count_exact()
            .execute()
            .await
    }
}
