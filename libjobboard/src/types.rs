//! Core domain types: jobs, users, filters and form payloads

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel filter value meaning "no constraint on this dimension"
pub const ALL: &str = "All";

/// Base listing path for the job search endpoint
pub const JOB_LISTING_PATH: &str = "/api/v1/job/getall";

/// A job posting as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub salary: String,
    pub job_posted_on: DateTime<Utc>,
    #[serde(default)]
    pub hiring_multiple_candidates: HiringMultiple,
    #[serde(default)]
    pub job_type: Option<JobType>,
    #[serde(default)]
    pub job_niche: Option<String>,
    #[serde(default)]
    pub introduction: Option<String>,
    #[serde(default)]
    pub responsibilities: Option<String>,
    #[serde(default)]
    pub qualifications: Option<String>,
    #[serde(default)]
    pub offers: Option<String>,
    #[serde(default)]
    pub personal_website: Option<PersonalWebsite>,
    #[serde(default)]
    pub posted_by: Option<String>,
}

impl Job {
    /// `YYYY-MM-DD` date shown on job cards
    pub fn posted_date(&self) -> String {
        self.job_posted_on.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HiringMultiple {
    Yes,
    #[default]
    No,
}

impl HiringMultiple {
    pub fn is_yes(self) -> bool {
        self == HiringMultiple::Yes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobType::FullTime => write!(f, "Full-time"),
            JobType::PartTime => write!(f, "Part-time"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalWebsite {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Authenticated account as returned by the user endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<serde_json::Value>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub niches: Option<Niches>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Job Seeker")]
    JobSeeker,
    Employer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::JobSeeker => "Job Seeker",
            Role::Employer => "Employer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Niches {
    #[serde(default)]
    pub first_niche: Option<String>,
    #[serde(default)]
    pub second_niche: Option<String>,
    #[serde(default)]
    pub third_niche: Option<String>,
}

/// Job search filters
///
/// Each dimension is independently optional. A value that is blank,
/// whitespace-only or equal to [`ALL`] applies no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub city: Option<String>,
    pub niche: Option<String>,
    pub search_keyword: Option<String>,
}

impl FilterCriteria {
    pub fn new(
        city: impl Into<Option<String>>,
        niche: impl Into<Option<String>>,
        search_keyword: impl Into<Option<String>>,
    ) -> Self {
        Self {
            city: city.into(),
            niche: niche.into(),
            search_keyword: search_keyword.into(),
        }
    }

    /// Query string for the listing endpoint, `None` when nothing is filtered
    ///
    /// Parameters appear in the order `searchKeyword`, `city`, `niche`.
    pub fn to_query(&self) -> Option<String> {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        let mut any = false;

        for (key, value) in [
            ("searchKeyword", active_value(self.search_keyword.as_deref())),
            ("city", active_value(self.city.as_deref())),
            ("niche", active_value(self.niche.as_deref())),
        ] {
            if let Some(value) = value {
                query.append_pair(key, value);
                any = true;
            }
        }

        any.then(|| query.finish())
    }

    /// Listing path with the query appended when any filter is active
    pub fn listing_path(&self) -> String {
        match self.to_query() {
            Some(query) => format!("{}?{}", JOB_LISTING_PATH, query),
            None => JOB_LISTING_PATH.to_string(),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.to_query().is_none()
    }
}

fn active_value(value: Option<&str>) -> Option<&str> {
    let value = value?.trim();
    (!value.is_empty() && value != ALL).then_some(value)
}

/// File uploaded in a multipart form (resume, avatar)
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Read a file from disk, guessing the MIME type from its extension
    pub fn from_path(path: &std::path::Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let content_type = match extension.as_str() {
            "pdf" => "application/pdf",
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "webp" => "image/webp",
            _ => "application/octet-stream",
        }
        .to_string();

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Payload for `POST /api/v1/job/post`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub job_type: JobType,
    pub location: String,
    pub company_name: String,
    pub introduction: Option<String>,
    pub responsibilities: String,
    pub qualifications: String,
    pub offers: Option<String>,
    pub salary: String,
    pub hiring_multiple_candidates: HiringMultiple,
    pub personal_website_title: Option<String>,
    pub personal_website_url: Option<String>,
    pub job_niche: String,
}

/// Login credentials; the password never appears in `Debug` output
#[derive(Debug)]
pub struct Credentials {
    pub role: Role,
    pub email: String,
    pub password: SecretString,
}

/// Payload for `POST /api/v1/user/register` (sent as multipart)
#[derive(Debug)]
pub struct Registration {
    pub role: Role,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: SecretString,
    pub niches: Niches,
    pub cover_letter: Option<String>,
    pub resume: Option<Attachment>,
}

/// Payload for `PUT /api/v1/user/update/profile`; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub cover_letter: Option<String>,
    pub niches: Option<Niches>,
    pub resume: Option<Attachment>,
}

/// Payload for `PUT /api/v1/user/update/password`
#[derive(Debug)]
pub struct PasswordUpdate {
    pub old_password: SecretString,
    pub new_password: SecretString,
    pub confirm_password: SecretString,
}

/// Payload for `POST /api/v1/application/post/:id` (sent as multipart)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub cover_letter: String,
    pub resume: Option<Attachment>,
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Body of `GET /api/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiStatus {
    pub message: String,
    #[serde(default)]
    pub endpoints: std::collections::BTreeMap<String, String>,
}

/// Result of register/login: the account plus the server's greeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_and_blank_values_are_omitted() {
        let filters = FilterCriteria::new(
            Some("All".to_string()),
            Some("DevOps".to_string()),
            Some(String::new()),
        );
        assert_eq!(filters.to_query().as_deref(), Some("niche=DevOps"));
    }

    #[test]
    fn test_whitespace_only_values_are_omitted() {
        let filters = FilterCriteria::new(
            Some("   ".to_string()),
            None,
            Some("\t".to_string()),
        );
        assert_eq!(filters.to_query(), None);
        assert!(filters.is_unfiltered());
        assert_eq!(filters.listing_path(), "/api/v1/job/getall");
    }

    #[test]
    fn test_parameters_keep_fixed_order() {
        let filters = FilterCriteria::new(
            Some("Delhi".to_string()),
            Some("Data Science".to_string()),
            Some("  engineer ".to_string()),
        );
        assert_eq!(
            filters.listing_path(),
            "/api/v1/job/getall?searchKeyword=engineer&city=Delhi&niche=Data+Science"
        );
    }

    #[test]
    fn test_keyword_is_url_encoded() {
        let filters = FilterCriteria::new(None, None, Some("c++ & rust".to_string()));
        assert_eq!(
            filters.to_query().as_deref(),
            Some("searchKeyword=c%2B%2B+%26+rust")
        );
    }

    #[test]
    fn test_every_filter_combination_omits_inactive_values() {
        let values = [None, Some(""), Some("  "), Some("All"), Some("Pune")];
        for city in values {
            for niche in values {
                for keyword in values {
                    let filters = FilterCriteria::new(
                        city.map(str::to_string),
                        niche.map(str::to_string),
                        keyword.map(str::to_string),
                    );
                    let query = filters.to_query().unwrap_or_default();
                    assert!(!query.contains("All"), "sentinel leaked: {query}");
                    assert!(!query.contains("=&") && !query.ends_with('='), "blank value leaked: {query}");
                    let expected = [city, niche, keyword]
                        .iter()
                        .filter(|v| **v == Some("Pune"))
                        .count();
                    assert_eq!(query.matches("Pune").count(), expected);
                }
            }
        }
    }

    #[test]
    fn test_job_deserializes_backend_shape() {
        let job: Job = serde_json::from_value(serde_json::json!({
            "_id": "665f1c2e9b1e",
            "title": "Backend Engineer",
            "jobType": "Full-time",
            "location": "Delhi",
            "companyName": "Acme",
            "salary": "12 LPA",
            "hiringMultipleCandidates": "Yes",
            "jobNiche": "DevOps",
            "jobPostedOn": "2024-06-04T10:15:00.000Z",
            "personalWebsite": { "title": "Acme", "url": "https://acme.dev" }
        }))
        .unwrap();

        assert_eq!(job.id, "665f1c2e9b1e");
        assert!(job.hiring_multiple_candidates.is_yes());
        assert_eq!(job.job_type, Some(JobType::FullTime));
        assert_eq!(job.posted_date(), "2024-06-04");
    }

    #[test]
    fn test_job_defaults_optional_fields() {
        let job: Job = serde_json::from_value(serde_json::json!({
            "_id": "1",
            "title": "Support",
            "location": "Pune",
            "companyName": "Initech",
            "salary": "6 LPA",
            "jobPostedOn": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(job.hiring_multiple_candidates, HiringMultiple::No);
        assert!(job.job_niche.is_none());
    }

    #[test]
    fn test_user_role_wire_names() {
        let user: User = serde_json::from_value(serde_json::json!({
            "_id": "u1",
            "name": "Asha",
            "email": "asha@example.com",
            "role": "Job Seeker",
            "niches": { "firstNiche": "DevOps" }
        }))
        .unwrap();

        assert_eq!(user.role, Some(Role::JobSeeker));
        assert_eq!(user.niches.unwrap().first_niche.as_deref(), Some("DevOps"));
    }

    #[test]
    fn test_new_job_serializes_camel_case() {
        let job = NewJob {
            title: "SRE".to_string(),
            job_type: JobType::PartTime,
            location: "Noida".to_string(),
            company_name: "Globex".to_string(),
            introduction: None,
            responsibilities: "On-call".to_string(),
            qualifications: "Linux".to_string(),
            offers: None,
            salary: "10 LPA".to_string(),
            hiring_multiple_candidates: HiringMultiple::Yes,
            personal_website_title: None,
            personal_website_url: None,
            job_niche: "DevOps".to_string(),
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["jobType"], "Part-time");
        assert_eq!(value["companyName"], "Globex");
        assert_eq!(value["hiringMultipleCandidates"], "Yes");
    }

    #[test]
    fn test_attachment_guesses_mime_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.PDF");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let attachment = Attachment::from_path(&path).unwrap();
        assert_eq!(attachment.file_name, "resume.PDF");
        assert_eq!(attachment.content_type, "application/pdf");
        assert!(format!("{:?}", attachment).contains("len: 8"));
    }
}
