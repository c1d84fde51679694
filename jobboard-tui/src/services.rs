//! Service layer adapter for TUI
//!
//! Bridges the async [`JobBoard`] orchestrators and the synchronous TUI
//! event loop.
//!
//! # Architecture
//!
//! - `ServiceHandle`: owns a tokio runtime and a `JobBoard`
//! - Commands (`fetch_jobs`) are spawned on the runtime and return at once
//! - Store changes are bridged from the tokio watch channel to a crossbeam
//!   channel the event loop can poll without blocking
//!
//! # Example
//!
//! ```no_run
//! use jobboard_tui::services::ServiceHandle;
//! use libjobboard::{Config, FilterCriteria};
//!
//! # fn example() -> jobboard_tui::error::Result<()> {
//! let config = Config::load()?;
//! let services = ServiceHandle::new(&config)?;
//! let updates = services.subscribe();
//!
//! services.fetch_jobs(FilterCriteria::default());
//!
//! if let Ok(board) = updates.recv() {
//!     println!("loading: {}", board.jobs.snapshot().loading());
//! }
//! # Ok(())
//! # }
//! ```

use crossbeam_channel::{unbounded, Receiver};
use libjobboard::store::{Action, BoardState, ResourceKey};
use libjobboard::types::FilterCriteria;
use libjobboard::{Config, JobBoard};
use tracing::debug;

use crate::error::{Result, TuiError};

/// Service handle for TUI operations
pub struct ServiceHandle {
    board: JobBoard,
    runtime: tokio::runtime::Runtime,
}

impl ServiceHandle {
    /// Create a handle talking HTTP to the backend described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime or the HTTP client cannot be
    /// created.
    pub fn new(config: &Config) -> Result<Self> {
        let runtime = Self::runtime()?;
        let board = {
            let _guard = runtime.enter();
            JobBoard::from_config(config)?
        };
        Ok(Self { board, runtime })
    }

    /// Create a handle over an already assembled board (tests, custom backends)
    pub fn with_board(board: JobBoard) -> Result<Self> {
        Ok(Self {
            board,
            runtime: Self::runtime()?,
        })
    }

    fn runtime() -> Result<tokio::runtime::Runtime> {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(|e| TuiError::Application(format!("Failed to start runtime: {}", e)))
    }

    pub fn board(&self) -> &JobBoard {
        &self.board
    }

    /// Receive every store change as a full snapshot
    ///
    /// The current state is delivered first. Forwarding stops when the
    /// receiver is dropped.
    pub fn subscribe(&self) -> Receiver<BoardState> {
        let (tx, rx) = unbounded();
        let mut watch_rx = self.board.store().subscribe();

        self.runtime.spawn(async move {
            let initial = watch_rx.borrow_and_update().clone();
            if tx.send(initial).is_err() {
                return;
            }
            while watch_rx.changed().await.is_ok() {
                let state = watch_rx.borrow_and_update().clone();
                if tx.send(state).is_err() {
                    debug!("board receiver dropped, stopping bridge");
                    break;
                }
            }
        });

        rx
    }

    /// Start a listing fetch in the background
    ///
    /// Results arrive through [`subscribe`](Self::subscribe). Overlapping
    /// fetches are fenced by the store: only the last one issued lands.
    pub fn fetch_jobs(&self, filters: FilterCriteria) {
        let board = self.board.clone();
        self.runtime.spawn(async move {
            board.jobs().fetch_jobs(&filters).await;
        });
    }

    /// Drop the listing error once the UI has shown it
    pub fn clear_jobs_error(&self) {
        self.board.store().dispatch(Action::ClearError(ResourceKey::Jobs));
    }

    pub fn snapshot(&self) -> BoardState {
        self.board.store().snapshot()
    }
}
