//! Event handling infrastructure
//!
//! Merges terminal events (keyboard, resize, tick) with store updates coming
//! from the service bridge into a unified action stream.

use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use libjobboard::store::BoardState;

use crate::app::Action;

/// TUI events that can be dispatched
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input
    Key(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// Periodic tick for toast expiry
    Tick,

    /// Store changed in the background
    Board(Box<BoardState>),
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick => Action::Tick,
            TuiEvent::Board(board) => Action::BoardUpdated(board),
        }
    }
}

/// Event handler that polls the terminal and the store bridge
pub struct EventHandler {
    tick_rate: Duration,
    board_rx: Option<Receiver<BoardState>>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            board_rx: None,
        }
    }

    /// Also deliver store updates received on `rx`
    pub fn with_board_updates(mut self, rx: Receiver<BoardState>) -> Self {
        self.board_rx = Some(rx);
        self
    }

    /// Latest pending store update, skipping intermediate ones
    pub fn pending_board(&self) -> Option<BoardState> {
        let rx = self.board_rx.as_ref()?;
        let mut latest = None;
        loop {
            match rx.try_recv() {
                Ok(board) => latest = Some(board),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        latest
    }

    /// Next event, blocking up to the tick rate
    ///
    /// Store updates take priority over terminal input. A timeout yields `Tick`.
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if let Some(board) = self.pending_board() {
            return Ok(TuiEvent::Board(Box::new(board)));
        }

        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Windows reports key releases too
                CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    Ok(TuiEvent::Key(key))
                }
                CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
                _ => Ok(TuiEvent::Tick),
            }
        } else {
            Ok(TuiEvent::Tick)
        }
    }
}
