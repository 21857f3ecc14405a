//! Application model representing a candidate's application to a job.

use crate::domain::ApplicationId;
use serde::{Deserialize, Deserializer, Serialize};

/// Ids for users and jobs arrive as either JSON numbers or strings.
fn deserialize_opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// A job application row as served by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Application {
    /// Unique identifier for the application
    pub id: ApplicationId,

    /// The applying user
    #[serde(deserialize_with = "deserialize_opaque_id")]
    pub user_id: String,

    /// The job applied to
    #[serde(deserialize_with = "deserialize_opaque_id")]
    pub job_id: String,

    /// Current status
    pub status_id: u32,

    /// Applicant display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_name: Option<String>,

    /// Applicant email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_email: Option<String>,

    /// Applicant phone, in whatever form the applicant typed it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_phone: Option<String>,
}

impl Application {
    /// Create a new application with minimal required fields.
    pub fn new(
        id: ApplicationId,
        user_id: impl Into<String>,
        job_id: impl Into<String>,
        status_id: u32,
    ) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            job_id: job_id.into(),
            status_id,
            applicant_name: None,
            applicant_email: None,
            applicant_phone: None,
        }
    }

    /// Set the applicant's display name.
    pub fn with_applicant_name(mut self, name: impl Into<String>) -> Self {
        self.applicant_name = Some(name.into());
        self
    }

    /// Set the applicant's email.
    pub fn with_applicant_email(mut self, email: impl Into<String>) -> Self {
        self.applicant_email = Some(email.into());
        self
    }

    /// Set the applicant's phone.
    pub fn with_applicant_phone(mut self, phone: impl Into<String>) -> Self {
        self.applicant_phone = Some(phone.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_deserialization() {
        let json = r#"{
            "id": 101,
            "user_id": 5,
            "job_id": "job-9",
            "status_id": 2,
            "applicant_name": "Maria Santos",
            "resume_url": "https://example.com/cv.pdf"
        }"#;

        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.id.as_str(), "101");
        assert_eq!(app.user_id, "5");
        assert_eq!(app.job_id, "job-9");
        assert_eq!(app.status_id, 2);
        assert_eq!(app.applicant_name.as_deref(), Some("Maria Santos"));
        assert_eq!(app.applicant_email, None);
    }

    #[test]
    fn test_application_serialization_skips_missing() {
        let app = Application::new(ApplicationId::from(1), "2", "3", 4);
        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["status_id"], 4);
        assert!(json.get("applicant_name").is_none());
    }

    #[test]
    fn test_application_missing_status_fails() {
        let json = r#"{"id": 1, "user_id": 2, "job_id": 3}"#;
        let result: Result<Application, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
