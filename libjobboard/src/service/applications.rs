//! Job applications

use tracing::info;

use super::failure::Operation;
use super::Context;
use crate::store::{Action, ResourceKey};
use crate::types::ApplicationForm;

#[derive(Clone)]
pub struct ApplicationService {
    ctx: Context,
}

impl ApplicationService {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Apply to `job_id` as the signed-in job seeker
    pub async fn submit(&self, job_id: &str, form: &ApplicationForm) {
        let token = self.ctx.store.begin(ResourceKey::Application);
        let action = match self.ctx.api.submit_application(job_id, form).await {
            Ok(message) => {
                info!(job_id, "application submitted");
                Action::ApplicationSubmitted { token, message }
            }
            Err(err) => self.ctx.failed(Operation::SubmitApplication, token, &err),
        };
        self.ctx.store.dispatch(action);
    }
}
