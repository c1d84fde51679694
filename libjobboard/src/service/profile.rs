//! Profile and password updates

use super::failure::Operation;
use super::Context;
use crate::store::{Action, ResourceKey};
use crate::types::{PasswordUpdate, ProfileUpdate};

#[derive(Clone)]
pub struct ProfileService {
    ctx: Context,
}

impl ProfileService {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) {
        let token = self.ctx.store.begin(ResourceKey::Profile);
        let action = match self.ctx.api.update_profile(update).await {
            Ok(message) => Action::ProfileUpdated { token, message },
            Err(err) => self.ctx.failed(Operation::UpdateProfile, token, &err),
        };
        self.ctx.store.dispatch(action);
    }

    pub async fn update_password(&self, update: &PasswordUpdate) {
        let token = self.ctx.store.begin(ResourceKey::Profile);
        let action = match self.ctx.api.update_password(update).await {
            Ok(message) => Action::PasswordUpdated { token, message },
            Err(err) => self.ctx.failed(Operation::UpdatePassword, token, &err),
        };
        self.ctx.store.dispatch(action);
    }

    /// Forget the outcome of the last update once it has been shown
    pub fn reset_after_update(&self) {
        self.ctx.store.dispatch(Action::Reset(ResourceKey::Profile));
    }
}
