//! Error types for jobboard-tui
//!
//! Wraps library errors and terminal/IO errors for unified handling in the
//! event loop.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuiError {
    /// Configuration or client setup failed
    #[error("Service error: {0}")]
    Service(#[from] libjobboard::JobBoardError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Background bridge to the store stopped
    #[error("Application error: {0}")]
    Application(String),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
