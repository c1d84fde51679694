//! jobboard-tui library
//!
//! Exports types and modules for testing and potential reuse.

pub mod app;
pub mod error;
pub mod services;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{effects, reduce, Action, AppState, Effect, Focus};
pub use error::{Result, TuiError};
