//! Session management: registration, login, current user and logout
//!
//! All four operations drive the single `User` resource. Its data is the
//! signed-in account and is dropped when registration, login or the session
//! check fails. A failed logout keeps it: the server session may still be live.

use tracing::info;

use super::failure::Operation;
use super::Context;
use crate::error::ApiResult;
use crate::store::{Action, ResourceKey};
use crate::types::{Credentials, Registration};

#[derive(Clone)]
pub struct UserService {
    ctx: Context,
}

impl UserService {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    pub async fn register(&self, registration: &Registration) {
        let token = self.ctx.store.begin(ResourceKey::User);
        let action = match self.ctx.api.register(registration).await {
            Ok(response) => {
                info!(email = %response.user.email, "registered");
                Action::Authenticated {
                    token,
                    user: response.user,
                    message: response.message,
                }
            }
            Err(err) => self.ctx.failed(Operation::Register, token, &err),
        };
        self.ctx.store.dispatch(action);
    }

    /// Sign in; the raw error is also returned so callers can tell a
    /// rejected login from a backend that never answered
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
        let token = self.ctx.store.begin(ResourceKey::User);
        let (action, result) = match self.ctx.api.login(credentials).await {
            Ok(response) => {
                info!(email = %response.user.email, role = %credentials.role, "logged in");
                let action = Action::Authenticated {
                    token,
                    user: response.user,
                    message: response.message,
                };
                (action, Ok(()))
            }
            Err(err) => (self.ctx.failed(Operation::Login, token, &err), Err(err)),
        };
        self.ctx.store.dispatch(action);
        result
    }

    /// Look up the account behind the current session cookie
    pub async fn fetch_current(&self) {
        let token = self.ctx.store.begin(ResourceKey::User);
        let action = match self.ctx.api.current_user().await {
            Ok(user) => Action::UserLoaded { token, user },
            Err(err) => self.ctx.failed(Operation::FetchUser, token, &err),
        };
        self.ctx.store.dispatch(action);
    }

    pub async fn logout(&self) {
        let token = self.ctx.store.begin(ResourceKey::User);
        let action = match self.ctx.api.logout().await {
            Ok(message) => {
                info!("logged out");
                Action::LoggedOut { token, message }
            }
            Err(err) => Action::LogoutFailed {
                token,
                error: self.ctx.failure(Operation::Logout, token, &err),
            },
        };
        self.ctx.store.dispatch(action);
    }

    pub fn clear_errors(&self) {
        self.ctx.store.dispatch(Action::ClearError(ResourceKey::User));
    }
}
