//! Query-builder form of the REST interface.
//!
//! Mirrors the `.select().order().range()` chain of the vendor SDK. The
//! pagination window travels in the `Range` header and the total comes back
//! in `Content-Range`, which is what distinguishes this path from the direct
//! reads on [`APIClient`].

use crate::{
    APIClient, ClientError, ContentRange, Direction, Order, Page,
    api_client::{COUNT_EXACT, PREFER_HEADER, ok_empty},
};
use reqwest::header::CONTENT_RANGE;
use serde::de::DeserializeOwned;

pub struct QueryBuilder<'a> {
    client: &'a APIClient,
    table: String,
    select: String,
    order: Option<Order>,
    range: Option<(u64, u64)>,
    count_exact: bool,
    head: bool,
}

impl<'a> QueryBuilder<'a> {
    pub(crate) fn new(client: &'a APIClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            select: "*".to_string(),
            order: None,
            range: None,
            count_exact: false,
            head: false,
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.to_string();
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some(Order {
            column: column.to_string(),
            direction: if ascending {
                Direction::Asc
            } else {
                Direction::Desc
            },
        });
        self
    }

    /// Inclusive row range, `from..=to`.
    pub fn range(mut self, from: u64, to: u64) -> Self {
        self.range = Some((from, to));
        self
    }

    /// Ask the server for an exact total alongside the rows.
    pub fn count_exact(mut self) -> Self {
        self.count_exact = true;
        self
    }

    /// Fetch no rows, only headers.
    pub fn head(mut self) -> Self {
        self.head = true;
        self
    }

    fn build(&self) -> reqwest::RequestBuilder {
        let url = self.client.table_url(&self.table);
        let inner = &self.client.inner_client;
        let mut request = if self.head {
            inner.head(url)
        } else {
            inner.get(url)
        };

        let mut query = vec![("select", self.select.clone())];
        if let Some(order) = &self.order {
            query.push(("order", order.to_param()));
        }
        request = request.query(&query);

        if let Some((from, to)) = self.range {
            request = request
                .header("Range-Unit", "items")
                .header("Range", format!("{from}-{to}"));
        }
        if self.count_exact {
            request = request.header(PREFER_HEADER, COUNT_EXACT);
        }
        self.client.authorize(request)
    }

    /// Run the query, returning the rows and the reported total.
    #[tracing::instrument(skip(self), fields(table = %self.table))]
    pub async fn execute<T: DeserializeOwned>(
        self,
    ) -> Result<Page<T>, ClientError> {
        let response = ok_empty(self.build().send().await?).await?;
        let total_count = total_from_headers(&response)?;
        if self.head {
            return Ok(Page {
                rows: Vec::new(),
                total_count,
            });
        }
        let bytes = response.bytes().await?;
        Ok(Page {
            rows: serde_json::from_slice(&bytes)?,
            total_count,
        })
    }

    /// Exact count only, via a `HEAD` request.
    pub async fn count(self) -> Result<u64, ClientError> {
        let page = self.count_exact().head().execute::<()>().await?;
        page.total_count.ok_or_else(|| {
            ClientError::InvalidContentRange("missing total".to_string())
        })
    }
}

fn total_from_headers(
    response: &reqwest::Response,
) -> Result<Option<u64>, ClientError> {
    let Some(value) = response.headers().get(CONTENT_RANGE) else {
        return Ok(None);
    };
    let value = value
        .to_str()
        .map_err(|e| ClientError::InvalidContentRange(e.to_string()))?;
    ContentRange::parse(value)
        .map(|range| range.total)
        .ok_or_else(|| ClientError::InvalidContentRange(value.to_string()))
}
