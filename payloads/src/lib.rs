//! Row types and wire payloads shared by the query engine, the UI and the
//! mock backend.
//!
//! The relational schema is owned by the hosted backend. These structs only
//! describe the row shape the client reads for each resource.

pub mod api_client;
pub mod config;
pub mod query_builder;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use config::BackendConfig;
pub use requests::{Direction, Order, PageRequest};
pub use responses::{ContentRange, Page};

use derive_more::Display;
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use uuid::Uuid;

/// A named collection of rows exposed by the hosted backend.
///
/// Implementors only carry configuration: the table to read, the columns to
/// select and the default ordering. Everything else about fetching is
/// generic.
pub trait Resource:
    Clone + PartialEq + Serialize + DeserializeOwned + 'static
{
    const TABLE: &'static str;
    const SELECT: &'static str = "*";
    const ORDER_COLUMN: &'static str;
    const ORDER_DIRECTION: Direction;

    /// Stable key for rendering lists.
    fn key(&self) -> String;

    fn default_order() -> Order {
        Order {
            column: Self::ORDER_COLUMN.to_string(),
            direction: Self::ORDER_DIRECTION,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct CandidateId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct ClientId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct JobId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct HrContactId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct SaleId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct ProcessId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct UserId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    New,
    Screening,
    Interviewing,
    Placed,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: CandidateStatus,
    pub created_at: Timestamp,
}

impl Resource for Candidate {
    const TABLE: &'static str = "candidates";
    const SELECT: &'static str =
        "id,first_name,last_name,email,phone,status,created_at";
    const ORDER_COLUMN: &'static str = "created_at";
    const ORDER_DIRECTION: Direction = Direction::Desc;

    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// A company the agency recruits for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub company_name: String,
    pub industry: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: Timestamp,
}

impl Resource for Client {
    const TABLE: &'static str = "clients";
    const SELECT: &'static str =
        "id,company_name,industry,contact_email,created_at";
    const ORDER_COLUMN: &'static str = "company_name";
    const ORDER_DIRECTION: Direction = Direction::Asc;

    fn key(&self) -> String {
        self.id.to_string()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Draft,
    Open,
    OnHold,
    Filled,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub client_id: ClientId,
    pub title: String,
    pub location: Option<String>,
    pub status: JobStatus,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
    pub created_at: Timestamp,
}

impl Resource for Job {
    const TABLE: &'static str = "jobs";
    const SELECT: &'static str = "id,client_id,title,location,status,\
                                  salary_min,salary_max,created_at";
    const ORDER_COLUMN: &'static str = "created_at";
    const ORDER_DIRECTION: Direction = Direction::Desc;

    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// A human-resources contact person at a client company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrContact {
    pub id: HrContactId,
    pub client_id: ClientId,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Resource for HrContact {
    const TABLE: &'static str = "hr_contacts";
    const SELECT: &'static str = "id,client_id,full_name,email,phone";
    const ORDER_COLUMN: &'static str = "full_name";
    const ORDER_DIRECTION: Direction = Direction::Asc;

    fn key(&self) -> String {
        self.id.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub client_id: ClientId,
    pub job_id: Option<JobId>,
    pub amount: Decimal,
    pub closed_at: Timestamp,
}

impl Resource for Sale {
    const TABLE: &'static str = "sales";
    const SELECT: &'static str = "id,client_id,job_id,amount,closed_at";
    const ORDER_COLUMN: &'static str = "closed_at";
    const ORDER_DIRECTION: Direction = Direction::Desc;

    fn key(&self) -> String {
        self.id.to_string()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStage {
    Sourced,
    Submitted,
    Interview,
    Offer,
    Hired,
    Rejected,
}

/// A candidate's progress through the hiring pipeline for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub id: ProcessId,
    pub candidate_id: CandidateId,
    pub job_id: JobId,
    pub stage: ProcessStage,
    pub updated_at: Timestamp,
}

impl Resource for Process {
    const TABLE: &'static str = "processes";
    const SELECT: &'static str = "id,candidate_id,job_id,stage,updated_at";
    const ORDER_COLUMN: &'static str = "updated_at";
    const ORDER_DIRECTION: Direction = Direction::Desc;

    fn key(&self) -> String {
        self.id.to_string()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Recruiter,
    Sales,
}

/// A back-office user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Role,
}

impl Resource for UserAccount {
    const TABLE: &'static str = "users";
    const SELECT: &'static str = "id,email,full_name,role";
    const ORDER_COLUMN: &'static str = "email";
    const ORDER_DIRECTION: Direction = Direction::Asc;

    fn key(&self) -> String {
        self.id.to_string()
    }
}
