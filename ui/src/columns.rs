//! How each resource is laid out as a table.

use jiff::Timestamp;
use jiff::tz::TimeZone;
use payloads::{
    Candidate, Client, HrContact, Job, Process, Resource, Sale, UserAccount,
};

/// A resource that can be listed on its own page.
pub trait ListColumns: Resource {
    /// Plural display name, also used in loading and error messages.
    const TITLE: &'static str;
    const HEADERS: &'static [&'static str];

    /// One display string per entry of [`Self::HEADERS`].
    fn cells(&self) -> Vec<String>;
}

fn timestamp(ts: &Timestamp) -> String {
    ts.to_zoned(TimeZone::system())
        .strftime("%Y-%m-%d %H:%M")
        .to_string()
}

fn optional(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

impl ListColumns for Candidate {
    const TITLE: &'static str = "Candidates";
    const HEADERS: &'static [&'static str] =
        &["Name", "Email", "Phone", "Status", "Created"];

    fn cells(&self) -> Vec<String> {
        vec![
            format!("{} {}", self.first_name, self.last_name),
            self.email.clone(),
            optional(&self.phone),
            self.status.to_string(),
            timestamp(&self.created_at),
        ]
    }
}

impl ListColumns for Client {
    const TITLE: &'static str = "Clients";
    const HEADERS: &'static [&'static str] =
        &["Company", "Industry", "Contact", "Created"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.company_name.clone(),
            optional(&self.industry),
            optional(&self.contact_email),
            timestamp(&self.created_at),
        ]
    }
}

impl ListColumns for Job {
    const TITLE: &'static str = "Jobs";
    const HEADERS: &'static [&'static str] =
        &["Title", "Location", "Status", "Salary", "Created"];

    fn cells(&self) -> Vec<String> {
        let salary = match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) => format!("{min} - {max}"),
            (Some(min), None) => format!("from {min}"),
            (None, Some(max)) => format!("up to {max}"),
            (None, None) => "-".to_string(),
        };
        vec![
            self.title.clone(),
            optional(&self.location),
            self.status.to_string(),
            salary,
            timestamp(&self.created_at),
        ]
    }
}

impl ListColumns for HrContact {
    const TITLE: &'static str = "HR Contacts";
    const HEADERS: &'static [&'static str] = &["Name", "Email", "Phone"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            optional(&self.email),
            optional(&self.phone),
        ]
    }
}

impl ListColumns for Sale {
    const TITLE: &'static str = "Sales";
    const HEADERS: &'static [&'static str] = &["Amount", "Client", "Closed"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.amount.to_string(),
            self.client_id.to_string(),
            timestamp(&self.closed_at),
        ]
    }
}

impl ListColumns for Process {
    const TITLE: &'static str = "Processes";
    const HEADERS: &'static [&'static str] =
        &["Candidate", "Job", "Stage", "Updated"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.candidate_id.to_string(),
            self.job_id.to_string(),
            self.stage.to_string(),
            timestamp(&self.updated_at),
        ]
    }
}

impl ListColumns for UserAccount {
    const TITLE: &'static str = "Users";
    const HEADERS: &'static [&'static str] = &["Email", "Name", "Role"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.email.clone(),
            optional(&self.full_name),
            self.role.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_cells_match_headers<R: ListColumns>(row: &R) {
        assert_eq!(row.cells().len(), R::HEADERS.len(), "{}", R::TITLE);
    }

    #[test]
    fn every_row_fills_its_header() {
        let user = UserAccount {
            id: payloads::UserId(uuid::Uuid::nil()),
            email: "admin@agency.example".into(),
            full_name: None,
            role: payloads::Role::Admin,
        };
        assert_cells_match_headers(&user);
        assert_eq!(user.cells()[1], "-");

        let contact = HrContact {
            id: payloads::HrContactId(uuid::Uuid::nil()),
            client_id: payloads::ClientId(uuid::Uuid::nil()),
            full_name: "Morgan Reyes".into(),
            email: Some("morgan@example.com".into()),
            phone: None,
        };
        assert_cells_match_headers(&contact);
    }
}
