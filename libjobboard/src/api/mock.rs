//! Scripted in-memory API for testing
//!
//! `MockApi` answers every [`JobBoardApi`] call from a per-endpoint script:
//! queued responses (each with an optional delay to simulate latency) are
//! consumed in call order, then a fallback response is repeated. All calls
//! are recorded for verification.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::sleep;

use crate::api::JobBoardApi;
use crate::error::ApiResult;
use crate::types::{
    ApiStatus, ApplicationForm, AuthResponse, Credentials, FilterCriteria, HealthStatus, Job,
    NewJob, PasswordUpdate, ProfileUpdate, Registration, User,
};

/// A call received by the mock, in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Health,
    ApiStatus,
    ListJobs(FilterCriteria),
    GetJob(String),
    PostJob(String),
    MyJobs,
    DeleteJob(String),
    Register(String),
    Login(String),
    CurrentUser,
    Logout,
    UpdateProfile,
    UpdatePassword,
    SubmitApplication(String),
}

struct Script<T> {
    queue: Mutex<VecDeque<(Duration, ApiResult<T>)>>,
    fallback: Mutex<ApiResult<T>>,
}

impl<T: Clone> Script<T> {
    fn new(fallback: ApiResult<T>) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback: Mutex::new(fallback),
        }
    }

    fn set(&self, result: ApiResult<T>) {
        *self.fallback.lock().unwrap() = result;
    }

    fn push(&self, delay: Duration, result: ApiResult<T>) {
        self.queue.lock().unwrap().push_back((delay, result));
    }

    async fn next(&self) -> ApiResult<T> {
        let scripted = self.queue.lock().unwrap().pop_front();
        let (delay, result) = match scripted {
            Some(entry) => entry,
            None => (Duration::ZERO, self.fallback.lock().unwrap().clone()),
        };
        if !delay.is_zero() {
            sleep(delay).await;
        }
        result
    }
}

fn status_err<T>(status: u16, message: &str) -> ApiResult<T> {
    Err(crate::ApiError::Status {
        status,
        message: Some(message.to_string()),
    })
}

fn signed_out<T>() -> ApiResult<T> {
    status_err(401, "User is not authenticated.")
}

/// Mock backend for testing orchestrators and presentation code
pub struct MockApi {
    calls: Mutex<Vec<MockCall>>,
    health: Script<HealthStatus>,
    api_status: Script<ApiStatus>,
    jobs: Script<Vec<Job>>,
    job: Script<Job>,
    post_job: Script<String>,
    my_jobs: Script<Vec<Job>>,
    delete_job: Script<String>,
    register: Script<AuthResponse>,
    login: Script<AuthResponse>,
    current_user: Script<User>,
    logout: Script<String>,
    update_profile: Script<String>,
    update_password: Script<String>,
    application: Script<String>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockApi {
    /// Healthy backend with no jobs and a signed-out session
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            health: Script::new(Ok(HealthStatus {
                status: "OK".to_string(),
                message: Some("Server is running successfully".to_string()),
                timestamp: None,
            })),
            api_status: Script::new(Ok(ApiStatus {
                message: "API is working".to_string(),
                endpoints: Default::default(),
            })),
            jobs: Script::new(Ok(Vec::new())),
            job: Script::new(status_err(404, "Job not found.")),
            post_job: Script::new(Ok("Job posted successfully.".to_string())),
            my_jobs: Script::new(Ok(Vec::new())),
            delete_job: Script::new(status_err(404, "Job not found.")),
            register: Script::new(signed_out()),
            login: Script::new(signed_out()),
            current_user: Script::new(signed_out()),
            logout: Script::new(Ok("Logged out successfully.".to_string())),
            update_profile: Script::new(Ok("Profile updated.".to_string())),
            update_password: Script::new(Ok("Password updated.".to_string())),
            application: Script::new(Ok("Application submitted.".to_string())),
        }
    }

    pub fn with_health(self, result: ApiResult<HealthStatus>) -> Self {
        self.health.set(result);
        self
    }

    pub fn with_jobs(self, result: ApiResult<Vec<Job>>) -> Self {
        self.jobs.set(result);
        self
    }

    pub fn with_job(self, result: ApiResult<Job>) -> Self {
        self.job.set(result);
        self
    }

    pub fn with_post_job(self, result: ApiResult<String>) -> Self {
        self.post_job.set(result);
        self
    }

    pub fn with_my_jobs(self, result: ApiResult<Vec<Job>>) -> Self {
        self.my_jobs.set(result);
        self
    }

    pub fn with_delete_job(self, result: ApiResult<String>) -> Self {
        self.delete_job.set(result);
        self
    }

    pub fn with_register(self, result: ApiResult<AuthResponse>) -> Self {
        self.register.set(result);
        self
    }

    pub fn with_login(self, result: ApiResult<AuthResponse>) -> Self {
        self.login.set(result);
        self
    }

    pub fn with_current_user(self, result: ApiResult<User>) -> Self {
        self.current_user.set(result);
        self
    }

    pub fn with_logout(self, result: ApiResult<String>) -> Self {
        self.logout.set(result);
        self
    }

    pub fn with_update_profile(self, result: ApiResult<String>) -> Self {
        self.update_profile.set(result);
        self
    }

    pub fn with_update_password(self, result: ApiResult<String>) -> Self {
        self.update_password.set(result);
        self
    }

    pub fn with_application(self, result: ApiResult<String>) -> Self {
        self.application.set(result);
        self
    }

    /// Queue one job listing response, delivered after `delay`
    pub fn push_jobs(&self, delay: Duration, result: ApiResult<Vec<Job>>) {
        self.jobs.push(delay, result);
    }

    /// Queue one current-user response, delivered after `delay`
    pub fn push_current_user(&self, delay: Duration, result: ApiResult<User>) {
        self.current_user.push(delay, result);
    }

    /// All calls received so far
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls matching `predicate`
    pub fn count(&self, predicate: impl Fn(&MockCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| predicate(c)).count()
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl JobBoardApi for MockApi {
    async fn health(&self) -> ApiResult<HealthStatus> {
        self.record(MockCall::Health);
        self.health.next().await
    }

    async fn api_status(&self) -> ApiResult<ApiStatus> {
        self.record(MockCall::ApiStatus);
        self.api_status.next().await
    }

    async fn list_jobs(&self, filters: &FilterCriteria) -> ApiResult<Vec<Job>> {
        self.record(MockCall::ListJobs(filters.clone()));
        self.jobs.next().await
    }

    async fn get_job(&self, id: &str) -> ApiResult<Job> {
        self.record(MockCall::GetJob(id.to_string()));
        self.job.next().await
    }

    async fn post_job(&self, job: &NewJob) -> ApiResult<String> {
        self.record(MockCall::PostJob(job.title.clone()));
        self.post_job.next().await
    }

    async fn my_jobs(&self) -> ApiResult<Vec<Job>> {
        self.record(MockCall::MyJobs);
        self.my_jobs.next().await
    }

    async fn delete_job(&self, id: &str) -> ApiResult<String> {
        self.record(MockCall::DeleteJob(id.to_string()));
        self.delete_job.next().await
    }

    async fn register(&self, registration: &Registration) -> ApiResult<AuthResponse> {
        self.record(MockCall::Register(registration.email.clone()));
        self.register.next().await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        self.record(MockCall::Login(credentials.email.clone()));
        self.login.next().await
    }

    async fn current_user(&self) -> ApiResult<User> {
        self.record(MockCall::CurrentUser);
        self.current_user.next().await
    }

    async fn logout(&self) -> ApiResult<String> {
        self.record(MockCall::Logout);
        self.logout.next().await
    }

    async fn update_profile(&self, _update: &ProfileUpdate) -> ApiResult<String> {
        self.record(MockCall::UpdateProfile);
        self.update_profile.next().await
    }

    async fn update_password(&self, _update: &PasswordUpdate) -> ApiResult<String> {
        self.record(MockCall::UpdatePassword);
        self.update_password.next().await
    }

    async fn submit_application(&self, job_id: &str, _form: &ApplicationForm) -> ApiResult<String> {
        self.record(MockCall::SubmitApplication(job_id.to_string()));
        self.application.next().await
    }
}
