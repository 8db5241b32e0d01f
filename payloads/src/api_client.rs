use crate::{
    BackendConfig, PageRequest, query_builder::QueryBuilder, responses,
};
use reqwest::StatusCode;

pub(crate) const API_KEY_HEADER: &str = "apikey";
pub(crate) const PREFER_HEADER: &str = "Prefer";
pub(crate) const COUNT_EXACT: &str = "count=exact";

/// A client for the hosted backend's REST query interface.
///
/// Reads are available in two equivalent forms: the direct methods on this
/// type, which build the query string by hand, and the [`QueryBuilder`]
/// returned by [`APIClient::from`], which mirrors the vendor SDK's call chain
/// and reports totals through `Content-Range`.
#[derive(Debug, Clone)]
pub struct APIClient {
    pub config: BackendConfig,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            inner_client: reqwest::Client::new(),
        }
    }

    pub(crate) fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.base_url)
    }

    /// Attach the api key and bearer token.
    pub(crate) fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        use secrecy::ExposeSecret;

        request
            .header(API_KEY_HEADER, self.config.api_key.expose_secret())
            .bearer_auth(self.config.bearer())
    }
}

/// Direct reads
impl APIClient {
    /// Exact row count of `table`, asking only for the count.
    pub async fn count_direct(&self, table: &str) -> Result<u64, ClientError> {
        let request = self
            .inner_client
            .get(self.table_url(table))
            .query(&[("select", "count")])
            .header(PREFER_HEADER, COUNT_EXACT);
        let response = self.authorize(request).send().await?;
        let rows: Vec<responses::CountRow> = ok_body(response).await?;
        Ok(rows.first().map_or(0, |row| row.count))
    }

    /// One page of rows with explicit select, order, offset and limit.
    pub async fn page_direct<T: serde::de::DeserializeOwned>(
        &self,
        page: &PageRequest,
    ) -> Result<Vec<T>, ClientError> {
        let request = self
            .inner_client
            .get(self.table_url(&page.table))
            .query(&page.direct_query());
        let response = self.authorize(request).send().await?;
        ok_body(response).await
    }

    /// Start a query-builder chain on `table`.
    pub fn from(&self, table: &str) -> QueryBuilder<'_> {
        QueryBuilder::new(self, table)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid Content-Range header: {0}")]
    InvalidContentRange(String),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response)
}
