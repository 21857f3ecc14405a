//! Test fixtures and sample data for integration tests.
//!
//! Mirrors what the portal API returns for a job's applicant list.

use hire_portal_core::{Application, ApplicationId, StatusOption};

/// Raw applicant list as served by the API.
pub const APPLICATIONS_JSON: &str = r#"[
    {"id": 11, "user_id": 501, "job_id": 70, "status_id": 1,
     "applicant_name": "Maria Santos", "applicant_email": "maria.santos@example.com",
     "applicant_phone": "0917-123-4567"},
    {"id": 12, "user_id": 502, "job_id": 70, "status_id": 1,
     "applicant_name": "Jose Rizal", "applicant_email": "jose@example.ph",
     "applicant_phone": "+639181112222"},
    {"id": 13, "user_id": 503, "job_id": 70, "status_id": 2,
     "applicant_name": "Andres Bonifacio", "applicant_email": "andres@example.com",
     "applicant_phone": "9190001111"},
    {"id": 14, "user_id": 504, "job_id": 70, "status_id": 1,
     "applicant_name": "Gabriela Silang"}
]"#;

/// Parse [`APPLICATIONS_JSON`].
pub fn sample_applications() -> Vec<Application> {
    serde_json::from_str(APPLICATIONS_JSON).expect("fixture JSON should parse")
}

/// Status options as served by the API.
#[allow(dead_code)]
pub fn sample_statuses() -> Vec<StatusOption> {
    vec![
        StatusOption::new(0, "Pending"),
        StatusOption::new(1, "Shortlisted"),
        StatusOption::new(2, "Interview"),
        StatusOption::new(3, "Offer"),
        StatusOption::new(7, "Removed"),
    ]
}

/// Build ids from numbers.
pub fn ids(values: &[u64]) -> Vec<ApplicationId> {
    values.iter().map(|v| ApplicationId::from(*v)).collect()
}
