//! Job listing, lookup, posting and deletion

use tracing::debug;

use super::failure::Operation;
use super::Context;
use crate::error::{ApiError, ApiResult};
use crate::store::{Action, ResourceKey};
use crate::types::{FilterCriteria, Job, NewJob};

#[derive(Clone)]
pub struct JobService {
    ctx: Context,
}

impl JobService {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Refresh the job listing for `filters`
    ///
    /// When the health probe is enabled, an unreachable backend is detected
    /// before the listing request is sent.
    pub async fn fetch_jobs(&self, filters: &FilterCriteria) {
        let token = self.ctx.store.begin(ResourceKey::Jobs);
        let action = match self.list(filters).await {
            Ok(jobs) => {
                debug!(%token, count = jobs.len(), path = %filters.listing_path(), "jobs loaded");
                Action::JobsLoaded { token, jobs }
            }
            Err(err) => self.ctx.failed(Operation::FetchJobs, token, &err),
        };
        self.ctx.store.dispatch(action);
    }

    async fn list(&self, filters: &FilterCriteria) -> ApiResult<Vec<Job>> {
        if self.ctx.options.health_probe {
            if let Err(err) = self.ctx.api.health().await {
                debug!(error = %err, "health probe failed");
                return Err(ApiError::Unreachable(format!("health probe failed: {}", err)));
            }
        }
        self.ctx.api.list_jobs(filters).await
    }

    pub async fn fetch_job(&self, id: &str) {
        let token = self.ctx.store.begin(ResourceKey::SingleJob);
        let action = match self.ctx.api.get_job(id).await {
            Ok(job) => Action::JobLoaded { token, job },
            Err(err) => self.ctx.failed(Operation::FetchJob, token, &err),
        };
        self.ctx.store.dispatch(action);
    }

    pub async fn post_job(&self, job: &NewJob) {
        let token = self.ctx.store.begin(ResourceKey::PostJob);
        let action = match self.ctx.api.post_job(job).await {
            Ok(message) => Action::JobPosted { token, message },
            Err(err) => self.ctx.failed(Operation::PostJob, token, &err),
        };
        self.ctx.store.dispatch(action);
    }

    /// Jobs posted by the signed-in employer
    pub async fn fetch_my_jobs(&self) {
        let token = self.ctx.store.begin(ResourceKey::MyJobs);
        let action = match self.ctx.api.my_jobs().await {
            Ok(jobs) => Action::MyJobsLoaded { token, jobs },
            Err(err) => self.ctx.failed(Operation::FetchMyJobs, token, &err),
        };
        self.ctx.store.dispatch(action);
    }

    pub async fn delete_job(&self, id: &str) {
        let token = self.ctx.store.begin(ResourceKey::DeleteJob);
        let action = match self.ctx.api.delete_job(id).await {
            Ok(message) => Action::JobDeleted { token, message },
            Err(err) => self.ctx.failed(Operation::DeleteJob, token, &err),
        };
        self.ctx.store.dispatch(action);
    }

    /// Clear the error of every job resource
    pub fn clear_errors(&self) {
        for key in ResourceKey::JOB_RESOURCES {
            self.ctx.store.dispatch(Action::ClearError(key));
        }
    }

    /// Blank the single-job, post and delete flows; the listing is kept
    pub fn reset_flows(&self) {
        self.ctx.store.dispatch(Action::ResetJobFlows);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::mock::{MockApi, MockCall};
    use crate::service::failure::UNREACHABLE_MESSAGE;
    use crate::service::{JobBoard, ServiceOptions};
    use crate::store::Store;

    fn board(api: MockApi, health_probe: bool) -> (JobBoard, Arc<MockApi>) {
        let api = Arc::new(api);
        let board = JobBoard::with_api(api.clone(), Store::new(), ServiceOptions { health_probe });
        (board, api)
    }

    #[tokio::test]
    async fn test_failed_probe_skips_listing() {
        let (board, api) = board(
            MockApi::new().with_health(Err(ApiError::Status {
                status: 503,
                message: None,
            })),
            true,
        );

        board.jobs().fetch_jobs(&FilterCriteria::default()).await;

        let state = board.store().snapshot();
        assert_eq!(state.jobs.snapshot().error(), Some(UNREACHABLE_MESSAGE));
        assert_eq!(api.calls(), vec![MockCall::Health]);
    }

    #[tokio::test]
    async fn test_probe_can_be_disabled() {
        let (board, api) = board(MockApi::new(), false);
        board.jobs().fetch_jobs(&FilterCriteria::default()).await;

        assert_eq!(api.calls(), vec![MockCall::ListJobs(FilterCriteria::default())]);
        assert!(board.store().snapshot().jobs.snapshot().is_ready());
    }

    #[tokio::test]
    async fn test_fetch_job_not_found_keeps_previous_job() {
        let (board, _api) = board(MockApi::new(), false);
        board.jobs().fetch_job("missing").await;

        let state = board.store().snapshot();
        let single = state.single_job.snapshot();
        assert_eq!(single.error(), Some("Job not found."));
        assert_eq!(single.data(), &None);
        assert!(!single.loading());
    }

    #[tokio::test]
    async fn test_clear_errors_and_reset_flows() {
        let (board, _api) = board(MockApi::new(), false);
        board.jobs().delete_job("missing").await;
        assert!(board.store().snapshot().delete_job.snapshot().error().is_some());

        board.jobs().clear_errors();
        assert!(board.store().snapshot().errors().is_empty());

        board.jobs().reset_flows();
        assert_eq!(board.store().snapshot(), crate::store::BoardState::default());
    }
}
