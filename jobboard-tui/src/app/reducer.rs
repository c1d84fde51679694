//! Pure reducer function for state transitions
//!
//! `(AppState, Action) -> AppState` with no I/O. Backend work implied by a
//! transition is derived separately by [`effects`](super::effects).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libjobboard::store::Phase;
use libjobboard::types::FilterCriteria;

use super::actions::{Action, FilterKind};
use super::state::{AppState, DropdownState, Focus, Toast};

pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),

        Action::Tick => {
            let toast = state.toast.and_then(|toast| {
                (toast.ticks_left > 1).then(|| Toast {
                    ticks_left: toast.ticks_left - 1,
                    ..toast
                })
            });
            AppState { toast, ..state }
        }

        Action::Resize(_, _) => state, // ratatui redraws on the next frame

        Action::Mounted | Action::SubmitSearch | Action::Refresh => AppState {
            fetch_generation: state.fetch_generation + 1,
            ..state
        },

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::FocusNext => AppState {
            focus: state.focus.next(),
            ..state
        },

        Action::FocusPrev => AppState {
            focus: state.focus.prev(),
            ..state
        },

        // === Filters ===
        Action::SelectFilter { kind, value } => select_filter(state, kind, value),

        Action::PickerMove { kind, delta } => {
            let max = kind.options().len() - 1;
            let cursor = step(state.cursor(kind), delta, max);
            match kind {
                FilterKind::City => AppState {
                    city_cursor: cursor,
                    ..state
                },
                FilterKind::Niche => AppState {
                    niche_cursor: cursor,
                    ..state
                },
            }
        }

        Action::PickerSelect(kind) => {
            let value = kind
                .options()
                .get(state.cursor(kind))
                .map(|s| s.to_string());
            reduce(state, Action::SelectFilter { kind, value })
        }

        Action::OpenDropdown(kind) => {
            let cursor = match kind.current(&state.filters) {
                Some(_) => kind.selected_index(&state.filters) + 1,
                None => 0,
            };
            AppState {
                dropdown: Some(DropdownState { kind, cursor }),
                help_visible: false,
                ..state
            }
        }

        Action::CloseDropdown => AppState {
            dropdown: None,
            ..state
        },

        Action::DropdownMove(delta) => match state.dropdown {
            Some(dropdown) => AppState {
                dropdown: Some(DropdownState {
                    cursor: step(dropdown.cursor, delta, dropdown.entry_count() - 1),
                    ..dropdown
                }),
                ..state
            },
            None => state,
        },

        Action::DropdownConfirm => match state.dropdown {
            Some(dropdown) => {
                let state = AppState {
                    dropdown: None,
                    ..state
                };
                reduce(
                    state,
                    Action::SelectFilter {
                        kind: dropdown.kind,
                        value: dropdown.value(),
                    },
                )
            }
            None => state,
        },

        Action::SearchChanged(text) => AppState {
            filters: FilterCriteria {
                search_keyword: (!text.is_empty()).then_some(text),
                ..state.filters
            },
            ..state
        },

        // === Listing ===
        Action::ScrollJobs(delta) => {
            let max = state.board.jobs.snapshot().data().len().saturating_sub(1);
            AppState {
                job_scroll: step(state.job_scroll, delta, max),
                ..state
            }
        }

        Action::BoardUpdated(board) => {
            let jobs = board.jobs.snapshot();
            let toast = match jobs.error() {
                Some(error) => Some(Toast {
                    message: error.to_string(),
                    ticks_left: state.config.toast_ticks,
                }),
                None => state.toast,
            };

            // Error acknowledged with nothing in flight: refetch once
            let error_cleared = state.board.jobs.snapshot().error().is_some()
                && jobs.error().is_none()
                && *jobs.phase() == Phase::Idle;
            let retry = error_cleared && state.retry_armed;
            let retry_armed = if jobs.is_ready() {
                true
            } else {
                state.retry_armed && !retry
            };

            let max = jobs.data().len().saturating_sub(1);
            AppState {
                job_scroll: state.job_scroll.min(max),
                fetch_generation: state.fetch_generation + u64::from(retry),
                retry_armed,
                board: *board,
                toast,
                ..state
            }
        }

        // === Toasts ===
        Action::ShowToast(message) => AppState {
            toast: Some(Toast {
                message,
                ticks_left: state.config.toast_ticks,
            }),
            ..state
        },

        Action::DismissToast => AppState {
            toast: None,
            ..state
        },
    }
}

/// Apply a filter choice; "All" and blank values clear the filter
fn select_filter(state: AppState, kind: FilterKind, value: Option<String>) -> AppState {
    let value = value.filter(|v| !v.trim().is_empty() && v != libjobboard::types::ALL);
    let filters = match kind {
        FilterKind::City => FilterCriteria {
            city: value,
            ..state.filters
        },
        FilterKind::Niche => FilterCriteria {
            niche: value,
            ..state.filters
        },
    };
    let cursor = kind.selected_index(&filters);
    let state = AppState { filters, ..state };
    match kind {
        FilterKind::City => AppState {
            city_cursor: cursor,
            ..state
        },
        FilterKind::Niche => AppState {
            niche_cursor: cursor,
            ..state
        },
    }
}

fn step(current: usize, delta: isize, max: usize) -> usize {
    current.saturating_add_signed(delta).min(max)
}

/// Keys that the search box must never swallow
pub fn is_global_key(key: &KeyEvent, focus: Focus) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::F(_), _)
            | (KeyCode::Esc, _)
            | (KeyCode::Tab, _)
            | (KeyCode::BackTab, _)
            | (KeyCode::Enter, _)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('r'), KeyModifiers::CONTROL)
    ) || (focus != Focus::Search && key.code == KeyCode::Char('q'))
}

fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return reduce(state, Action::Quit),

        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        (KeyCode::Esc, _) if state.dropdown.is_some() => {
            return reduce(state, Action::CloseDropdown)
        }
        (KeyCode::Esc, _) if state.help_visible => return reduce(state, Action::HideHelp),
        (KeyCode::Esc, _) if state.toast.is_some() => return reduce(state, Action::DismissToast),

        (KeyCode::F(2), _) => return reduce(state, Action::OpenDropdown(FilterKind::City)),
        (KeyCode::F(3), _) => return reduce(state, Action::OpenDropdown(FilterKind::Niche)),

        (KeyCode::F(5), _) | (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Refresh)
        }

        _ => {}
    }

    if state.dropdown.is_some() {
        return handle_dropdown_key(state, key);
    }
    if state.help_visible {
        return state;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Tab, _) => return reduce(state, Action::FocusNext),
        (KeyCode::BackTab, _) => return reduce(state, Action::FocusPrev),
        (KeyCode::Char('q'), KeyModifiers::NONE) if state.focus != Focus::Search => {
            return reduce(state, Action::Quit)
        }
        _ => {}
    }

    match state.focus {
        Focus::Search => match key.code {
            KeyCode::Enter => reduce(state, Action::SubmitSearch),
            _ => state, // text editing is handled by the textarea
        },
        Focus::CityPicker | Focus::NichePicker => {
            let Some(kind) = state.focus.picker() else {
                return state;
            };
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => reduce(state, Action::PickerMove { kind, delta: -1 }),
                KeyCode::Down | KeyCode::Char('j') => reduce(state, Action::PickerMove { kind, delta: 1 }),
                KeyCode::Char(' ') | KeyCode::Enter => reduce(state, Action::PickerSelect(kind)),
                _ => state,
            }
        }
        Focus::Jobs => match key.code {
            KeyCode::Up | KeyCode::Char('k') => reduce(state, Action::ScrollJobs(-1)),
            KeyCode::Down | KeyCode::Char('j') => reduce(state, Action::ScrollJobs(1)),
            KeyCode::PageUp => reduce(state, Action::ScrollJobs(-5)),
            KeyCode::PageDown => reduce(state, Action::ScrollJobs(5)),
            _ => state,
        },
    }
}

fn handle_dropdown_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => reduce(state, Action::DropdownMove(-1)),
        KeyCode::Down | KeyCode::Char('j') => reduce(state, Action::DropdownMove(1)),
        KeyCode::Enter | KeyCode::Char(' ') => reduce(state, Action::DropdownConfirm),
        _ => state,
    }
}
