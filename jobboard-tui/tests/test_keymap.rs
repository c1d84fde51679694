//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input is correctly mapped to actions
//! through the reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use jobboard_tui::app::{reduce, Action, AppState, FilterKind, Focus};

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn press(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(key_event(code, KeyModifiers::NONE)))
}

#[test]
fn test_ctrl_c_quits_application() {
    let state = AppState::new();
    let key = key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);

    let new_state = reduce(state, Action::Key(key));

    assert!(new_state.should_quit);
}

#[test]
fn test_q_does_not_quit_while_typing_search() {
    let state = AppState::new();
    assert_eq!(state.focus, Focus::Search);

    let new_state = press(state, KeyCode::Char('q'));

    assert!(!new_state.should_quit);
}

#[test]
fn test_q_quits_from_listing() {
    let state = AppState {
        focus: Focus::Jobs,
        ..AppState::new()
    };

    assert!(press(state, KeyCode::Char('q')).should_quit);
}

#[test]
fn test_f1_toggles_help() {
    let state = AppState::new();
    assert!(!state.help_visible);

    let state = press(state, KeyCode::F(1));
    assert!(state.help_visible);

    let state = press(state, KeyCode::F(1));
    assert!(!state.help_visible);
}

#[test]
fn test_tab_cycles_focus() {
    let mut state = AppState::new();
    let expected = [Focus::CityPicker, Focus::NichePicker, Focus::Jobs, Focus::Search];

    for focus in expected {
        state = press(state, KeyCode::Tab);
        assert_eq!(state.focus, focus);
    }

    let state = press(state, KeyCode::BackTab);
    assert_eq!(state.focus, Focus::Jobs);
}

#[test]
fn test_enter_in_search_submits() {
    let state = AppState::new();
    let before = state.fetch_generation;

    let state = press(state, KeyCode::Enter);

    assert_eq!(state.fetch_generation, before + 1);
}

#[test]
fn test_f5_refreshes_from_any_panel() {
    let state = AppState {
        focus: Focus::NichePicker,
        ..AppState::new()
    };

    let state = press(state, KeyCode::F(5));
    assert_eq!(state.fetch_generation, 1);

    let state = reduce(
        state,
        Action::Key(key_event(KeyCode::Char('r'), KeyModifiers::CONTROL)),
    );
    assert_eq!(state.fetch_generation, 2);
}

#[test]
fn test_picker_space_selects_option_under_cursor() {
    let state = AppState {
        focus: Focus::CityPicker,
        ..AppState::new()
    };

    let state = press(state, KeyCode::Down);
    let state = press(state, KeyCode::Down);
    let state = press(state, KeyCode::Char(' '));

    assert_eq!(state.filters.city.as_deref(), Some("Pune"));
    assert_eq!(state.city_cursor, 2);
}

#[test]
fn test_picker_all_clears_filter() {
    let state = AppState {
        focus: Focus::NichePicker,
        ..AppState::new()
    };
    let state = press(state, KeyCode::Down);
    let state = press(state, KeyCode::Enter);
    assert_eq!(state.filters.niche.as_deref(), Some("Software Development"));

    let state = press(state, KeyCode::Up);
    let state = press(state, KeyCode::Enter);
    assert_eq!(state.filters.niche, None);
}

#[test]
fn test_dropdown_flow() {
    let state = press(AppState::new(), KeyCode::F(3));
    let dropdown = state.dropdown.expect("dropdown open");
    assert_eq!(dropdown.kind, FilterKind::Niche);
    assert_eq!(dropdown.cursor, 0);

    // placeholder, All, Software Development, Web Development
    let state = press(state, KeyCode::Down);
    let state = press(state, KeyCode::Down);
    let state = press(state, KeyCode::Down);
    let state = press(state, KeyCode::Enter);

    assert!(state.dropdown.is_none());
    assert_eq!(state.filters.niche.as_deref(), Some("Web Development"));
    assert_eq!(state.niche_cursor, 2);
}

#[test]
fn test_dropdown_placeholder_clears_filter() {
    let state = reduce(
        AppState::new(),
        Action::SelectFilter {
            kind: FilterKind::City,
            value: Some("Delhi".to_string()),
        },
    );

    let state = press(state, KeyCode::F(2));
    assert_eq!(state.dropdown.map(|d| d.cursor), Some(7));

    let mut state = state;
    for _ in 0..7 {
        state = press(state, KeyCode::Up);
    }
    let state = press(state, KeyCode::Enter);

    assert_eq!(state.filters.city, None);
    assert_eq!(state.city_cursor, 0);
}

#[test]
fn test_escape_closes_dropdown_before_anything_else() {
    let state = press(AppState::new(), KeyCode::F(2));
    let state = reduce(state, Action::ShowToast("Failed to fetch jobs".to_string()));

    let state = press(state, KeyCode::Esc);
    assert!(state.dropdown.is_none());
    assert!(state.toast.is_some());

    let state = press(state, KeyCode::Esc);
    assert!(state.toast.is_none());
}

#[test]
fn test_keys_swallowed_by_help_overlay() {
    let state = press(AppState::new(), KeyCode::F(1));

    let state = press(state, KeyCode::Tab);

    assert_eq!(state.focus, Focus::Search);
    assert!(state.help_visible);
}
