//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).

use libjobboard::store::BoardState;
use libjobboard::types::FilterCriteria;

use super::actions::FilterKind;

/// Root application state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub should_quit: bool,

    pub help_visible: bool,

    /// Panel receiving keyboard input
    pub focus: Focus,

    /// Filters applied to the listing; the search keyword mirrors the box
    pub filters: FilterCriteria,

    /// Bumped whenever the listing must be fetched without a filter change
    pub fetch_generation: u64,

    /// A cleared listing error may still trigger one refetch; rearmed by a
    /// successful load
    pub retry_armed: bool,

    pub city_cursor: usize,

    pub niche_cursor: usize,

    /// Open dropdown popup, if any
    pub dropdown: Option<DropdownState>,

    /// First job card shown in the listing
    pub job_scroll: usize,

    /// Latest store state received from the service bridge
    pub board: BoardState,

    pub toast: Option<Toast>,

    pub config: UiConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    CityPicker,
    NichePicker,
    Jobs,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Search, Focus::CityPicker, Focus::NichePicker, Focus::Jobs];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Filter edited by this panel, if it is a picker
    pub fn picker(self) -> Option<FilterKind> {
        match self {
            Focus::CityPicker => Some(FilterKind::City),
            Focus::NichePicker => Some(FilterKind::Niche),
            Focus::Search | Focus::Jobs => None,
        }
    }
}

/// Dropdown popup: entry 0 is the placeholder, then the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownState {
    pub kind: FilterKind,
    pub cursor: usize,
}

impl DropdownState {
    pub fn entry_count(&self) -> usize {
        self.kind.options().len() + 1
    }

    /// Value chosen at the cursor; placeholder and "All" both clear
    pub fn value(&self) -> Option<String> {
        match self.cursor {
            0 => None,
            i => self.kind.options().get(i - 1).map(|s| s.to_string()),
        }
    }
}

/// Transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub ticks_left: u32,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// Ticks a toast stays on screen
    pub toast_ticks: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            focus: Focus::Search,
            filters: FilterCriteria::default(),
            fetch_generation: 0,
            retry_armed: true,
            city_cursor: 0,
            niche_cursor: 0,
            dropdown: None,
            job_scroll: 0,
            board: BoardState::default(),
            toast: None,
            config: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("JOBBOARD_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("JOBBOARD_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(100);

        // about four seconds
        let toast_ticks = (4000 / tick_rate_ms).max(1) as u32;

        Self {
            colors_enabled,
            tick_rate_ms,
            toast_ticks,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self, kind: FilterKind) -> usize {
        match kind {
            FilterKind::City => self.city_cursor,
            FilterKind::Niche => self.niche_cursor,
        }
    }

    pub fn loading(&self) -> bool {
        self.board.jobs.snapshot().loading()
    }

    /// Any popup that swallows keys
    pub fn has_overlay(&self) -> bool {
        self.help_visible || self.dropdown.is_some()
    }
}
