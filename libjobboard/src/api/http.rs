//! HTTP implementation of [`JobBoardApi`]
//!
//! One `reqwest::Client` carries the whole transport configuration: base
//! address, cookie jar for the session cookie, request timeout and default
//! JSON headers. Every exchange goes through [`HttpApi::execute`], which logs
//! the request, the response status and any failure.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::api::JobBoardApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::types::{
    ApiStatus, ApplicationForm, Attachment, AuthResponse, Credentials, FilterCriteria,
    HealthStatus, Job, NewJob, PasswordUpdate, ProfileUpdate, Registration, User,
};

#[derive(Deserialize)]
struct JobsEnvelope {
    #[serde(default)]
    jobs: Vec<Job>,
}

#[derive(Deserialize)]
struct MyJobsEnvelope {
    #[serde(default, rename = "myJobs")]
    my_jobs: Vec<Job>,
}

#[derive(Deserialize)]
struct JobEnvelope {
    job: Job,
}

#[derive(Deserialize)]
struct UserEnvelope {
    #[serde(default)]
    user: Option<User>,
}

#[derive(Deserialize)]
struct MessageEnvelope {
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Shared client for every backend resource group
#[derive(Clone)]
pub struct HttpApi {
    http: Client,
    base_url: String,
}

impl HttpApi {
    /// Build the client from transport settings
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.timeout())
            .cookie_store(true)
            .default_headers(headers)
            .user_agent(concat!("jobboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Unexpected(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.resolved_base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `path` followed by `id` as one percent-encoded segment
    fn id_url(&self, path: &str, id: &str) -> ApiResult<Url> {
        let mut url = Url::parse(&self.url(path))
            .map_err(|e| ApiError::Unexpected(format!("invalid request URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Unexpected(format!("cannot append to {}", self.base_url)))?
            .push(id);
        Ok(url)
    }

    /// Send one request and decode a successful JSON body
    ///
    /// Error responses become [`ApiError::Status`] carrying the server's
    /// `message` when the body has one.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let request = request
            .build()
            .map_err(|e| ApiError::Unexpected(format!("failed to build request: {}", e)))?;
        let method = request.method().clone();
        let url = request.url().clone();

        debug!(%method, %url, "sending request");
        let started = Instant::now();

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(%method, %url, error = %e, timeout = e.is_timeout(), "request failed without a response");
                return Err(ApiError::from(e));
            }
        };

        let status = response.status();
        debug!(
            %method,
            %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "response received"
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty());
            warn!(%method, %url, status = status.as_u16(), message = ?message, "server returned an error");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(%method, %url, error = %e, "malformed response body");
            ApiError::Unexpected(format!("malformed response from {}: {}", url, e))
        })
    }
}

fn text_field(form: Form, name: &'static str, value: Option<&str>) -> Form {
    match value {
        Some(value) => form.text(name, value.to_string()),
        None => form,
    }
}

fn file_field(form: Form, name: &'static str, attachment: Option<&Attachment>) -> ApiResult<Form> {
    let Some(attachment) = attachment else {
        return Ok(form);
    };
    let part = Part::bytes(attachment.bytes.clone())
        .file_name(attachment.file_name.clone())
        .mime_str(&attachment.content_type)
        .map_err(|e| {
            ApiError::Unexpected(format!(
                "invalid content type '{}' for {}: {}",
                attachment.content_type, attachment.file_name, e
            ))
        })?;
    Ok(form.part(name, part))
}

#[async_trait]
impl JobBoardApi for HttpApi {
    async fn health(&self) -> ApiResult<HealthStatus> {
        self.execute(self.http.get(self.url("/health"))).await
    }

    async fn api_status(&self) -> ApiResult<ApiStatus> {
        self.execute(self.http.get(self.url("/api/status"))).await
    }

    async fn list_jobs(&self, filters: &FilterCriteria) -> ApiResult<Vec<Job>> {
        let envelope: JobsEnvelope = self
            .execute(self.http.get(self.url(&filters.listing_path())))
            .await?;
        Ok(envelope.jobs)
    }

    async fn get_job(&self, id: &str) -> ApiResult<Job> {
        let envelope: JobEnvelope = self
            .execute(self.http.get(self.id_url("/api/v1/job/get", id)?))
            .await?;
        Ok(envelope.job)
    }

    async fn post_job(&self, job: &NewJob) -> ApiResult<String> {
        let envelope: MessageEnvelope = self
            .execute(self.http.post(self.url("/api/v1/job/post")).json(job))
            .await?;
        Ok(envelope.message)
    }

    async fn my_jobs(&self) -> ApiResult<Vec<Job>> {
        let envelope: MyJobsEnvelope = self
            .execute(self.http.get(self.url("/api/v1/job/getmyjobs")))
            .await?;
        Ok(envelope.my_jobs)
    }

    async fn delete_job(&self, id: &str) -> ApiResult<String> {
        let envelope: MessageEnvelope = self
            .execute(self.http.delete(self.id_url("/api/v1/job/delete", id)?))
            .await?;
        Ok(envelope.message)
    }

    async fn register(&self, registration: &Registration) -> ApiResult<AuthResponse> {
        let niches = &registration.niches;
        let form = Form::new()
            .text("role", registration.role.as_str())
            .text("name", registration.name.clone())
            .text("email", registration.email.clone())
            .text("phone", registration.phone.clone())
            .text("address", registration.address.clone())
            .text("password", registration.password.expose_secret().to_string());
        let form = text_field(form, "firstNiche", niches.first_niche.as_deref());
        let form = text_field(form, "secondNiche", niches.second_niche.as_deref());
        let form = text_field(form, "thirdNiche", niches.third_niche.as_deref());
        let form = text_field(form, "coverLetter", registration.cover_letter.as_deref());
        let form = file_field(form, "resume", registration.resume.as_ref())?;

        self.execute(self.http.post(self.url("/api/v1/user/register")).multipart(form))
            .await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        let body = serde_json::json!({
            "role": credentials.role.as_str(),
            "email": credentials.email,
            "password": credentials.password.expose_secret(),
        });
        self.execute(self.http.post(self.url("/api/v1/user/login")).json(&body))
            .await
    }

    async fn current_user(&self) -> ApiResult<User> {
        let envelope: UserEnvelope = self
            .execute(self.http.get(self.url("/api/v1/user/getuser")))
            .await?;
        envelope
            .user
            .ok_or_else(|| ApiError::Unexpected("Invalid response format".to_string()))
    }

    async fn logout(&self) -> ApiResult<String> {
        let envelope: MessageEnvelope = self
            .execute(self.http.get(self.url("/api/v1/user/logout")))
            .await?;
        Ok(envelope.message)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<String> {
        let form = Form::new();
        let form = text_field(form, "name", update.name.as_deref());
        let form = text_field(form, "email", update.email.as_deref());
        let form = text_field(form, "phone", update.phone.as_deref());
        let form = text_field(form, "address", update.address.as_deref());
        let form = text_field(form, "coverLetter", update.cover_letter.as_deref());
        let form = match &update.niches {
            Some(niches) => {
                let form = text_field(form, "firstNiche", niches.first_niche.as_deref());
                let form = text_field(form, "secondNiche", niches.second_niche.as_deref());
                text_field(form, "thirdNiche", niches.third_niche.as_deref())
            }
            None => form,
        };
        let form = file_field(form, "resume", update.resume.as_ref())?;

        let envelope: MessageEnvelope = self
            .execute(self.http.put(self.url("/api/v1/user/update/profile")).multipart(form))
            .await?;
        Ok(envelope.message)
    }

    async fn update_password(&self, update: &PasswordUpdate) -> ApiResult<String> {
        let body = serde_json::json!({
            "oldPassword": update.old_password.expose_secret(),
            "newPassword": update.new_password.expose_secret(),
            "confirmPassword": update.confirm_password.expose_secret(),
        });
        let envelope: MessageEnvelope = self
            .execute(self.http.put(self.url("/api/v1/user/update/password")).json(&body))
            .await?;
        Ok(envelope.message)
    }

    async fn submit_application(&self, job_id: &str, form: &ApplicationForm) -> ApiResult<String> {
        let multipart = Form::new()
            .text("name", form.name.clone())
            .text("email", form.email.clone())
            .text("phone", form.phone.clone())
            .text("address", form.address.clone())
            .text("coverLetter", form.cover_letter.clone());
        let multipart = file_field(multipart, "resume", form.resume.as_ref())?;

        let envelope: MessageEnvelope = self
            .execute(
                self.http
                    .post(self.id_url("/api/v1/application/post", job_id)?)
                    .multipart(multipart),
            )
            .await?;
        Ok(envelope.message)
    }
}
