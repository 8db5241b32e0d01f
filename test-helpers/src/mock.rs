//! Recruitment data for local development and larger integration tests
//!
//! The dataset is sized so that every list needs more than one page at the
//! default page size, and is linked together the way production data is:
//! - Jobs and HR contacts belong to clients
//! - Processes join candidates to jobs
//! - Sales close out filled jobs

use crate::{MockBackend, candidate, client, fixture_epoch};
use anyhow::Result;
use jiff::Span;
use payloads::{
    Candidate, Client, HrContact, HrContactId, Job, JobId, JobStatus, Process,
    ProcessId, ProcessStage, Role, Sale, SaleId, UserAccount, UserId,
};
use rust_decimal::Decimal;
use uuid::Uuid;

const CANDIDATES: usize = 45;
const CLIENTS: usize = 12;
const JOBS_PER_CLIENT: usize = 3;

pub struct DevDataset {
    pub candidates: Vec<Candidate>,
    pub clients: Vec<Client>,
    pub jobs: Vec<Job>,
    pub hr_contacts: Vec<HrContact>,
    pub processes: Vec<Process>,
    pub sales: Vec<Sale>,
    pub users: Vec<UserAccount>,
}

impl DevDataset {
    /// Populates every table on `backend`.
    pub fn create(backend: &MockBackend) -> Result<Self> {
        tracing::info!("🏢 Creating clients with HR contacts");
        let clients: Vec<Client> = (0..CLIENTS).map(client).collect();
        let hr_contacts: Vec<HrContact> = clients
            .iter()
            .enumerate()
            .flat_map(|(i, c)| {
                [hr_contact(c, i * 2), hr_contact(c, i * 2 + 1)]
            })
            .collect();

        tracing::info!("📋 Opening jobs");
        let jobs: Vec<Job> = clients
            .iter()
            .enumerate()
            .flat_map(|(i, c)| {
                (0..JOBS_PER_CLIENT).map(move |j| job(c, i * JOBS_PER_CLIENT + j))
            })
            .collect();

        tracing::info!("👤 Creating candidates and hiring processes");
        let candidates: Vec<Candidate> = (0..CANDIDATES).map(candidate).collect();
        let processes: Vec<Process> = candidates
            .iter()
            .enumerate()
            .map(|(i, c)| process(c, &jobs[i % jobs.len()], i))
            .collect();

        tracing::info!("💰 Closing sales for filled jobs");
        let sales: Vec<Sale> = jobs
            .iter()
            .filter(|j| j.status == JobStatus::Filled)
            .enumerate()
            .map(|(i, j)| sale(j, i))
            .collect();

        let users = users();

        backend.insert_rows(&clients)?;
        backend.insert_rows(&hr_contacts)?;
        backend.insert_rows(&jobs)?;
        backend.insert_rows(&candidates)?;
        backend.insert_rows(&processes)?;
        backend.insert_rows(&sales)?;
        backend.insert_rows(&users)?;

        tracing::info!("✅ Development dataset created");
        Ok(Self {
            candidates,
            clients,
            jobs,
            hr_contacts,
            processes,
            sales,
            users,
        })
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Available test data:");
        tracing::info!("   👤 {} candidates", self.candidates.len());
        tracing::info!(
            "   🏢 {} clients with {} HR contacts",
            self.clients.len(),
            self.hr_contacts.len()
        );
        tracing::info!(
            "   📋 {} jobs, {} hiring processes",
            self.jobs.len(),
            self.processes.len()
        );
        tracing::info!("   💰 {} sales", self.sales.len());
        for user in &self.users {
            tracing::info!("   🔑 {} ({})", user.email, user.role);
        }
    }
}

fn hr_contact(client: &Client, index: usize) -> HrContact {
    const NAMES: [&str; 6] = [
        "Morgan Reyes",
        "Jordan Okafor",
        "Casey Lindqvist",
        "Riley Tanaka",
        "Avery Moreau",
        "Quinn Novak",
    ];
    let full_name = format!("{} {index}", NAMES[index % NAMES.len()]);
    HrContact {
        id: HrContactId(Uuid::from_u128(0x4c00_0000 + index as u128)),
        client_id: client.id,
        email: Some(format!(
            "{}@{}.example",
            full_name.to_lowercase().replace(' ', "."),
            client.company_name.to_lowercase().replace(' ', "")
        )),
        phone: (index % 2 == 0).then(|| format!("+1-555-{:04}", 7000 + index)),
        full_name,
    }
}

fn job(client: &Client, index: usize) -> Job {
    const TITLES: [&str; 5] = [
        "Backend Engineer",
        "Product Designer",
        "Data Analyst",
        "Engineering Manager",
        "Site Reliability Engineer",
    ];
    let base = Decimal::new(70_000 + (index as i64 % 5) * 10_000, 0);
    Job {
        id: JobId(Uuid::from_u128(0x10b0_0000 + index as u128)),
        client_id: client.id,
        title: TITLES[index % TITLES.len()].to_string(),
        location: (index % 4 != 3).then(|| {
            ["Berlin", "Remote", "Lisbon"][index % 3].to_string()
        }),
        status: match index % 4 {
            0 => JobStatus::Open,
            1 => JobStatus::Filled,
            2 => JobStatus::OnHold,
            _ => JobStatus::Draft,
        },
        salary_min: Some(base),
        salary_max: (index % 2 == 0).then(|| base + Decimal::new(20_000, 0)),
        created_at: fixture_epoch() - Span::new().hours(index as i64 * 5),
    }
}

fn process(candidate: &Candidate, job: &Job, index: usize) -> Process {
    Process {
        id: ProcessId(Uuid::from_u128(0x9c00_0000 + index as u128)),
        candidate_id: candidate.id,
        job_id: job.id,
        stage: match index % 6 {
            0 => ProcessStage::Sourced,
            1 => ProcessStage::Submitted,
            2 => ProcessStage::Interview,
            3 => ProcessStage::Offer,
            4 => ProcessStage::Hired,
            _ => ProcessStage::Rejected,
        },
        updated_at: fixture_epoch() - Span::new().minutes(index as i64 * 7),
    }
}

fn sale(job: &Job, index: usize) -> Sale {
    // 20% placement fee on the lower salary bound
    let fee = job
        .salary_min
        .map_or(Decimal::new(15_000, 0), |s| s * Decimal::new(20, 2));
    Sale {
        id: SaleId(Uuid::from_u128(0x5a00_0000 + index as u128)),
        client_id: job.client_id,
        job_id: Some(job.id),
        amount: fee,
        closed_at: fixture_epoch() - Span::new().hours(index as i64 * 24),
    }
}

fn users() -> Vec<UserAccount> {
    [
        ("admin@agency.example", Some("Sam Admin"), Role::Admin),
        ("recruiter@agency.example", Some("Robin Recruiter"), Role::Recruiter),
        ("sales@agency.example", None, Role::Sales),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (email, full_name, role))| UserAccount {
        id: UserId(Uuid::from_u128(0x5e00_0000 + i as u128)),
        email: email.to_string(),
        full_name: full_name.map(str::to_string),
        role,
    })
    .collect()
}
