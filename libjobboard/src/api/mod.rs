//! Remote API abstraction and implementations
//!
//! Orchestrators talk to the backend only through [`JobBoardApi`]. The HTTP
//! implementation is [`HttpApi`]; [`mock::MockApi`] scripts responses for
//! tests without a network.
//!
//! # Examples
//!
//! ```no_run
//! use libjobboard::api::{HttpApi, JobBoardApi};
//! use libjobboard::config::ApiConfig;
//! use libjobboard::types::FilterCriteria;
//!
//! # async fn example() -> Result<(), libjobboard::ApiError> {
//! let api = HttpApi::new(&ApiConfig::default())?;
//!
//! let filters = FilterCriteria::new(Some("Delhi".to_string()), None, None);
//! let jobs = api.list_jobs(&filters).await?;
//! println!("{} jobs in Delhi", jobs.len());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::types::{
    ApiStatus, ApplicationForm, AuthResponse, Credentials, FilterCriteria, HealthStatus, Job,
    NewJob, PasswordUpdate, ProfileUpdate, Registration, User,
};

pub mod http;

// Mock API is available for all builds (not just tests) to support integration tests
pub mod mock;

pub use http::HttpApi;

/// Backend capabilities the orchestrators depend on
///
/// Each method is exactly one HTTP exchange. Methods returning `String`
/// yield the server's confirmation `message`.
#[async_trait]
pub trait JobBoardApi: Send + Sync {
    /// `GET /health` liveness probe
    async fn health(&self) -> ApiResult<HealthStatus>;

    /// `GET /api/status`
    async fn api_status(&self) -> ApiResult<ApiStatus>;

    /// `GET /api/v1/job/getall[?searchKeyword=&city=&niche=]`
    ///
    /// A body without a `jobs` field yields an empty list.
    async fn list_jobs(&self, filters: &FilterCriteria) -> ApiResult<Vec<Job>>;

    /// `GET /api/v1/job/get/:id`
    async fn get_job(&self, id: &str) -> ApiResult<Job>;

    /// `POST /api/v1/job/post`
    async fn post_job(&self, job: &NewJob) -> ApiResult<String>;

    /// `GET /api/v1/job/getmyjobs`
    async fn my_jobs(&self) -> ApiResult<Vec<Job>>;

    /// `DELETE /api/v1/job/delete/:id`
    async fn delete_job(&self, id: &str) -> ApiResult<String>;

    /// `POST /api/v1/user/register`
    async fn register(&self, registration: &Registration) -> ApiResult<AuthResponse>;

    /// `POST /api/v1/user/login`
    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse>;

    /// `GET /api/v1/user/getuser`
    async fn current_user(&self) -> ApiResult<User>;

    /// `GET /api/v1/user/logout`
    async fn logout(&self) -> ApiResult<String>;

    /// `PUT /api/v1/user/update/profile`
    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<String>;

    /// `PUT /api/v1/user/update/password`
    async fn update_password(&self, update: &PasswordUpdate) -> ApiResult<String>;

    /// `POST /api/v1/application/post/:id`
    async fn submit_application(&self, job_id: &str, form: &ApplicationForm) -> ApiResult<String>;
}
