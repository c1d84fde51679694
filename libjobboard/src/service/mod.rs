//! Orchestrators that keep the store in sync with the backend
//!
//! Every operation follows the same cycle: begin a request on its resource,
//! perform one backend call, then dispatch exactly one terminal action.
//! Operations never return errors; failures are classified into a
//! user-facing message (see [`failure`]) and recorded on the resource.
//!
//! # Architecture
//!
//! [`JobBoard`] is the facade. It owns the shared [`Store`] and one
//! [`JobBoardApi`] instance and hands out the specialized services:
//!
//! - `JobService`: listing, single job, posting, own jobs, deletion
//! - `UserService`: registration, login, session lookup, logout
//! - `ProfileService`: profile and password updates
//! - `ApplicationService`: job applications
//!
//! # Example
//!
//! ```no_run
//! use libjobboard::service::JobBoard;
//! use libjobboard::types::FilterCriteria;
//!
//! # async fn example() -> libjobboard::Result<()> {
//! let board = JobBoard::new()?;
//!
//! let filters = FilterCriteria::new(Some("Delhi".to_string()), None, Some("engineer".to_string()));
//! board.jobs().fetch_jobs(&filters).await;
//!
//! let state = board.store().snapshot();
//! match state.jobs.snapshot().error() {
//!     Some(error) => eprintln!("{}", error),
//!     None => println!("{} jobs", state.jobs.snapshot().data().len()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod applications;
pub mod failure;
pub mod jobs;
pub mod profile;
pub mod users;

use std::sync::Arc;

use tracing::warn;

use self::applications::ApplicationService;
use self::failure::{failure_message, Operation};
use self::jobs::JobService;
use self::profile::ProfileService;
use self::users::UserService;
use crate::api::{HttpApi, JobBoardApi};
use crate::error::ApiError;
use crate::store::{Action, RequestToken, Store};
use crate::{Config, Result};

/// Behaviour switches for the orchestrators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Probe `/health` before listing jobs
    pub health_probe: bool,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self { health_probe: true }
    }
}

/// What every service needs: the backend and the store it reports into
#[derive(Clone)]
pub(crate) struct Context {
    api: Arc<dyn JobBoardApi>,
    store: Store,
    options: ServiceOptions,
}

impl Context {
    /// Terminal action for a failed call, logged with its classification
    fn failed(&self, operation: Operation, token: RequestToken, error: &ApiError) -> Action {
        Action::Failed {
            resource: operation.resource(),
            token,
            error: self.failure(operation, token, error),
        }
    }

    /// User-facing message for a failed call, logged with its classification
    fn failure(&self, operation: Operation, token: RequestToken, error: &ApiError) -> String {
        let message = failure_message(operation, error);
        warn!(
            operation = operation.as_str(),
            %token,
            error = %error,
            "{}",
            message
        );
        message
    }
}

/// Main service facade
///
/// Cloning is cheap; clones share the store and the API client.
#[derive(Clone)]
pub struct JobBoard {
    ctx: Context,
    jobs: JobService,
    users: UserService,
    profile: ProfileService,
    applications: ApplicationService,
}

impl JobBoard {
    /// Create a board from the default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid,
    /// or if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::from_config(&config)
    }

    /// Create a board talking HTTP to the backend described by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let api = HttpApi::new(&config.api)?;
        let options = ServiceOptions {
            health_probe: config.api.health_probe,
        };
        Ok(Self::with_api(Arc::new(api), Store::new(), options))
    }

    /// Create a board over any backend implementation and store
    pub fn with_api(api: Arc<dyn JobBoardApi>, store: Store, options: ServiceOptions) -> Self {
        let ctx = Context {
            api,
            store,
            options,
        };

        Self {
            jobs: JobService::new(ctx.clone()),
            users: UserService::new(ctx.clone()),
            profile: ProfileService::new(ctx.clone()),
            applications: ApplicationService::new(ctx.clone()),
            ctx,
        }
    }

    pub fn store(&self) -> &Store {
        &self.ctx.store
    }

    /// Direct backend access for calls that have no tracked resource
    pub fn api(&self) -> &Arc<dyn JobBoardApi> {
        &self.ctx.api
    }

    pub fn options(&self) -> ServiceOptions {
        self.ctx.options
    }

    pub fn jobs(&self) -> &JobService {
        &self.jobs
    }

    pub fn users(&self) -> &UserService {
        &self.users
    }

    pub fn profile(&self) -> &ProfileService {
        &self.profile
    }

    pub fn applications(&self) -> &ApplicationService {
        &self.applications
    }
}
