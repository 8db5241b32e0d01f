pub mod backend;
pub mod mock;
pub mod telemetry;

use jiff::{Span, Timestamp};
use payloads::{
    APIClient, BackendConfig, Candidate, CandidateId, CandidateStatus, Client,
    ClientId, Resource,
};
use reqwest::StatusCode;
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

pub use backend::{FaultPlan, MockBackend, MockConfig, RequestCounts};

pub const TEST_API_KEY: &str = "test-anon-key";

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: APIClient,
    pub backend: MockBackend,
}

impl TestApp {
    pub fn address(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// A client for the same server presenting a different api key.
    pub fn client_with_key(&self, api_key: &str) -> APIClient {
        APIClient::new(BackendConfig::new(self.address(), api_key))
    }
}

/// Functions to populate test data
///
/// Each returns the inserted rows in the resource's default order, which is
/// the order a paginated read should reproduce.
impl TestApp {
    pub fn seed_candidates(&self, count: usize) -> anyhow::Result<Vec<Candidate>> {
        let rows: Vec<Candidate> = (0..count).map(candidate).collect();
        self.backend.insert_rows(&rows)?;
        Ok(rows)
    }

    pub fn seed_clients(&self, count: usize) -> anyhow::Result<Vec<Client>> {
        let mut rows: Vec<Client> = (0..count).map(client).collect();
        self.backend.insert_rows(&rows)?;
        rows.sort_by(|a, b| a.company_name.cmp(&b.company_name));
        Ok(rows)
    }

    /// Register `R`'s table with no rows.
    pub fn create_empty<R: Resource>(&self) {
        self.backend.create_table(R::TABLE);
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    // first caller wins; try_init also installs the log bridge
    let _ = telemetry::get_subscriber("error".into()).try_init();

    let mut config = MockConfig {
        ip: "127.0.0.1".into(),
        port,
        api_key: TEST_API_KEY.into(),
    };
    let backend = MockBackend::default();
    let server = backend::build(&mut config, backend.clone())
        .expect("Failed to bind mock backend");
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: APIClient::new(BackendConfig::new(
            format!("http://127.0.0.1:{}", config.port),
            TEST_API_KEY,
        )),
        backend,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn fixture_epoch() -> Timestamp {
    Timestamp::constant(1_735_689_600, 0) // 2025-01-01T00:00:00Z
}

const FIRST_NAMES: [&str; 8] = [
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Frances", "Ken",
];
const LAST_NAMES: [&str; 6] =
    ["Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth"];

/// The `index`-th candidate. Higher indexes were created earlier, so
/// ascending index is the `created_at.desc` list order.
pub fn candidate(index: usize) -> Candidate {
    let first_name = FIRST_NAMES[index % FIRST_NAMES.len()];
    let last_name = LAST_NAMES[index % LAST_NAMES.len()];
    Candidate {
        id: CandidateId(Uuid::from_u128(0xca00_0000 + index as u128)),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}{index}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone: (index % 3 != 0).then(|| format!("+1-555-{:04}", index)),
        status: match index % 5 {
            0 => CandidateStatus::New,
            1 => CandidateStatus::Screening,
            2 => CandidateStatus::Interviewing,
            3 => CandidateStatus::Placed,
            _ => CandidateStatus::Archived,
        },
        created_at: fixture_epoch() - Span::new().minutes(index as i64),
    }
}

pub fn client(index: usize) -> Client {
    Client {
        id: ClientId(Uuid::from_u128(0xc100_0000 + index as u128)),
        company_name: format!("Company {index:03}"),
        industry: Some(
            ["Fintech", "Logistics", "Healthcare"][index % 3].to_string(),
        ),
        contact_email: Some(format!("talent@company{index:03}.example")),
        created_at: fixture_epoch() - Span::new().hours(index as i64),
    }
}
