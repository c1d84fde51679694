//! Jobboard - client core for the job board REST backend
//!
//! This library provides the typed API client, the async resource store and
//! the orchestrators that keep the store in sync with the backend. The
//! terminal UI and the CLI are thin presentation layers on top of it.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use api::{HttpApi, JobBoardApi};
pub use config::Config;
pub use error::{ApiError, JobBoardError, Result};
pub use service::JobBoard;
pub use store::{Action, AsyncResource, BoardState, Phase, RequestToken, ResourceKey, Snapshot, Store};
pub use types::{FilterCriteria, Job, User};
