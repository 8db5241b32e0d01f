//! In-process stand-in for the hosted REST backend.
//!
//! ## Design Decisions
//!
//! ### Two request classes
//! - **Direct**: `GET` without a `Range` header. The window comes from the
//!   `offset`/`limit` query parameters and `select=count` returns
//!   `[{"count": N}]`.
//! - **Builder**: `HEAD`, or `GET` with a `Range: from-to` header. Totals
//!   are reported only through `Content-Range`.
//! - Faults and request counters are tracked per class so tests can break
//!   one path deterministically and observe the other.
//!
//! ### Ordering
//! - Rows are sorted with a stable sort, nulls last ascending and first
//!   descending. Strings that parse as timestamps compare as instants.

use actix_web::dev::Server;
use actix_web::http::header::{self, HeaderMap};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use jiff::Timestamp;
use payloads::{ContentRange, Order, Resource, responses::CountRow};
use serde_json::{Map, Value, json};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultPlan {
    /// Answer direct requests with 500.
    pub fail_direct: bool,
    /// Answer builder requests with 500.
    pub fail_builder: bool,
    /// Hold direct responses back, to trip client timeouts.
    pub direct_delay: Option<Duration>,
    pub builder_delay: Option<Duration>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestCounts {
    pub direct_pages: u32,
    pub direct_counts: u32,
    pub builder_pages: u32,
    pub builder_counts: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestKind {
    DirectPage,
    DirectCount,
    BuilderPage,
    BuilderCount,
}

impl RequestKind {
    fn is_direct(self) -> bool {
        matches!(self, RequestKind::DirectPage | RequestKind::DirectCount)
    }
}

#[derive(Default)]
struct BackendState {
    tables: HashMap<String, Vec<Value>>,
    faults: FaultPlan,
    counts: RequestCounts,
}

/// Shared handle to the mock's tables, faults and counters.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<BackendState>>,
}

impl MockBackend {
    fn lock(&self) -> MutexGuard<'_, BackendState> {
        // a panicking test thread must not take every other test down
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Create `R::TABLE` if needed and append `rows`.
    pub fn insert_rows<R: Resource>(&self, rows: &[R]) -> anyhow::Result<()> {
        let values = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.lock()
            .tables
            .entry(R::TABLE.to_string())
            .or_default()
            .extend(values);
        Ok(())
    }

    /// Make sure `table` exists, even with no rows.
    pub fn create_table(&self, table: &str) {
        self.lock().tables.entry(table.to_string()).or_default();
    }

    pub fn clear_table(&self, table: &str) {
        if let Some(rows) = self.lock().tables.get_mut(table) {
            rows.clear();
        }
    }

    pub fn row_count(&self, table: &str) -> usize {
        self.lock().tables.get(table).map_or(0, Vec::len)
    }

    pub fn set_faults(&self, faults: FaultPlan) {
        self.lock().faults = faults;
    }

    pub fn counts(&self) -> RequestCounts {
        self.lock().counts
    }

    pub fn reset_counts(&self) {
        self.lock().counts = RequestCounts::default();
    }

    fn record(&self, kind: RequestKind) -> FaultPlan {
        let mut state = self.lock();
        let counts = &mut state.counts;
        match kind {
            RequestKind::DirectPage => counts.direct_pages += 1,
            RequestKind::DirectCount => counts.direct_counts += 1,
            RequestKind::BuilderPage => counts.builder_pages += 1,
            RequestKind::BuilderCount => counts.builder_counts += 1,
        }
        state.faults
    }

    fn rows(&self, table: &str) -> Option<Vec<Value>> {
        self.lock().tables.get(table).cloned()
    }
}

pub struct MockConfig {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// Required value of the `apikey` header
    pub api_key: String,
}

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut MockConfig,
    backend: MockBackend,
) -> std::io::Result<Server> {
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let backend = web::Data::new(backend);
    let api_key = web::Data::new(ApiKey(config.api_key.clone()));

    let server = HttpServer::new(move || {
        App::new()
            .service(
                web::resource("/rest/v1/{table}")
                    .route(web::get().to(read_table))
                    .route(web::head().to(read_table)),
            )
            .app_data(backend.clone())
            .app_data(api_key.clone())
    })
    .workers(1)
    .listen(listener)?
    .run();
    Ok(server)
}

struct ApiKey(String);

#[tracing::instrument(
    skip(req, query, backend, api_key),
    fields(kind = tracing::field::Empty)
)]
async fn read_table(
    req: HttpRequest,
    table: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    backend: web::Data<MockBackend>,
    api_key: web::Data<ApiKey>,
) -> HttpResponse {
    let headers = req.headers();
    if header_str(headers, "apikey") != Some(api_key.0.as_str()) {
        return HttpResponse::Unauthorized()
            .json(json!({ "message": "No API key found in request" }));
    }

    let kind = classify(&req, &query);
    tracing::Span::current().record("kind", tracing::field::debug(kind));
    let faults = backend.record(kind);
    let (fail, delay) = if kind.is_direct() {
        (faults.fail_direct, faults.direct_delay)
    } else {
        (faults.fail_builder, faults.builder_delay)
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    if fail {
        return HttpResponse::InternalServerError()
            .json(json!({ "message": "injected failure" }));
    }

    let Some(mut rows) = backend.rows(&table) else {
        return HttpResponse::NotFound().json(json!({
            "message": format!("relation \"public.{table}\" does not exist")
        }));
    };
    let total = rows.len() as u64;
    let count_exact = header_str(headers, "Prefer")
        .is_some_and(|prefer| prefer.contains("count=exact"));

    match kind {
        RequestKind::DirectCount => {
            HttpResponse::Ok().json(vec![CountRow { count: total }])
        }
        RequestKind::BuilderCount => HttpResponse::Ok()
            .insert_header((
                header::CONTENT_RANGE,
                ContentRange::format(0, 0, count_exact.then_some(total)),
            ))
            .finish(),
        RequestKind::DirectPage | RequestKind::BuilderPage => {
            if let Some(order) = query.get("order").and_then(|o| Order::parse(o))
            {
                sort_rows(&mut rows, &order);
            }
            let (offset, limit) = match kind {
                RequestKind::BuilderPage => {
                    match header_str(headers, "Range").and_then(parse_range) {
                        Some(window) => window,
                        None => {
                            return HttpResponse::RangeNotSatisfiable()
                                .json(json!({ "message": "invalid range" }));
                        }
                    }
                }
                _ => (
                    query_number(&query, "offset").unwrap_or(0),
                    query_number(&query, "limit").unwrap_or(total),
                ),
            };
            let select = query.get("select").map_or("*", String::as_str);
            let page: Vec<Value> = rows
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .map(|row| project(row, select))
                .collect();

            let mut response = HttpResponse::Ok();
            if kind == RequestKind::BuilderPage || count_exact {
                response.insert_header((
                    header::CONTENT_RANGE,
                    ContentRange::format(
                        offset,
                        page.len(),
                        count_exact.then_some(total),
                    ),
                ));
            }
            response.json(page)
        }
    }
}

fn classify(
    req: &HttpRequest,
    query: &HashMap<String, String>,
) -> RequestKind {
    if req.method() == actix_web::http::Method::HEAD {
        RequestKind::BuilderCount
    } else if req.headers().contains_key("Range") {
        RequestKind::BuilderPage
    } else if query.get("select").is_some_and(|s| s == "count") {
        RequestKind::DirectCount
    } else {
        RequestKind::DirectPage
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn query_number(query: &HashMap<String, String>, key: &str) -> Option<u64> {
    query.get(key).and_then(|value| value.parse().ok())
}

/// `from-to` inclusive into `(offset, limit)`.
fn parse_range(range: &str) -> Option<(u64, u64)> {
    let (from, to) = range.split_once('-')?;
    let (from, to): (u64, u64) = (from.parse().ok()?, to.parse().ok()?);
    (to >= from).then(|| (from, to - from + 1))
}

fn project(row: Value, select: &str) -> Value {
    if select.trim() == "*" {
        return row;
    }
    let Value::Object(mut fields) = row else {
        return row;
    };
    let projected: Map<String, Value> = select
        .split(',')
        .map(str::trim)
        .filter_map(|column| {
            fields.remove(column).map(|value| (column.to_string(), value))
        })
        .collect();
    Value::Object(projected)
}

fn sort_rows(rows: &mut [Value], order: &Order) {
    let column = order.column.as_str();
    rows.sort_by(|a, b| {
        let ordering = compare(
            a.get(column).unwrap_or(&Value::Null),
            b.get(column).unwrap_or(&Value::Null),
        );
        if order.direction.is_ascending() {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(a), Value::String(b)) => {
            match (a.parse::<Timestamp>(), b.parse::<Timestamp>()) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                _ => a.cmp(b),
            }
        }
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::Direction;

    #[test]
    fn sorts_timestamps_as_instants_and_nulls_last() {
        let mut rows = vec![
            json!({ "at": "2025-01-01T00:00:00.5Z" }),
            json!({ "at": null }),
            json!({ "at": "2025-01-01T00:00:00Z" }),
        ];
        let order = Order {
            column: "at".into(),
            direction: Direction::Asc,
        };
        sort_rows(&mut rows, &order);
        assert_eq!(rows[0]["at"], "2025-01-01T00:00:00Z");
        assert_eq!(rows[2]["at"], Value::Null);

        let order = Order {
            direction: Direction::Desc,
            ..order
        };
        sort_rows(&mut rows, &order);
        assert_eq!(rows[0]["at"], Value::Null);
        assert_eq!(rows[1]["at"], "2025-01-01T00:00:00.5Z");
    }

    #[test]
    fn projects_selected_columns() {
        let row = json!({ "id": 1, "name": "Ada", "email": "ada@example.com" });
        assert_eq!(project(row.clone(), "*"), row);
        assert_eq!(
            project(row, "id, email"),
            json!({ "id": 1, "email": "ada@example.com" })
        );
    }

    #[test]
    fn range_header_maps_to_window() {
        assert_eq!(parse_range("20-39"), Some((20, 20)));
        assert_eq!(parse_range("7-7"), Some((7, 1)));
        // reversed bounds are unsatisfiable, not a panic
        assert_eq!(parse_range("5-4"), None);
        assert_eq!(parse_range("x-4"), None);
    }
}
