//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Keys are translated into
//! the more specific actions below by the reducer itself.

use crossterm::event::KeyEvent;
use libjobboard::catalog::{CITIES, NICHES};
use libjobboard::store::BoardState;
use libjobboard::types::FilterCriteria;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick; ages the toast
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    /// First frame is about to be drawn
    Mounted,

    // === Navigation ===
    Quit,

    ShowHelp,

    HideHelp,

    FocusNext,

    FocusPrev,

    // === Filters ===
    /// `None` clears the filter
    SelectFilter {
        kind: FilterKind,
        value: Option<String>,
    },

    /// Move the checklist cursor of a picker
    PickerMove {
        kind: FilterKind,
        delta: isize,
    },

    /// Toggle the option under the picker cursor
    PickerSelect(FilterKind),

    OpenDropdown(FilterKind),

    CloseDropdown,

    DropdownMove(isize),

    DropdownConfirm,

    /// Search box content changed
    SearchChanged(String),

    /// Enter in the search box
    SubmitSearch,

    /// F5 / Ctrl+R
    Refresh,

    // === Listing ===
    ScrollJobs(isize),

    /// New store state from the service bridge
    BoardUpdated(Box<BoardState>),

    // === Toasts ===
    ShowToast(String),

    DismissToast,
}

/// Which filter dimension a picker or dropdown edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    City,
    Niche,
}

impl FilterKind {
    /// Checklist entries, starting with "All"
    pub fn options(self) -> &'static [&'static str] {
        match self {
            FilterKind::City => CITIES,
            FilterKind::Niche => NICHES,
        }
    }

    /// First dropdown entry, meaning no filter
    pub fn placeholder(self) -> &'static str {
        match self {
            FilterKind::City => "Filter By City",
            FilterKind::Niche => "Filter By Niche",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FilterKind::City => "City",
            FilterKind::Niche => "Niche",
        }
    }

    pub fn current(self, filters: &FilterCriteria) -> Option<&str> {
        match self {
            FilterKind::City => filters.city.as_deref(),
            FilterKind::Niche => filters.niche.as_deref(),
        }
    }

    /// Checklist index of the current selection; "All" when unset
    pub fn selected_index(self, filters: &FilterCriteria) -> usize {
        self.current(filters)
            .and_then(|value| self.options().iter().position(|o| *o == value))
            .unwrap_or(0)
    }
}
