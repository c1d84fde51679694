//! Test that filter changes translate into the right listing fetches
//!
//! Drives the reducer and the effect derivation together the way the
//! event loop does.

use jobboard_tui::app::{effects, reduce, Action, AppState, Effect, FilterKind};
use libjobboard::store::{Action as StoreAction, ResourceKey, Store};
use libjobboard::types::FilterCriteria;

/// Apply one action, returning the effects the event loop would run
fn step(state: &mut AppState, action: Action) -> Vec<Effect> {
    let prev = state.clone();
    let next = reduce(prev.clone(), action.clone());
    let fx = effects(&prev, &next, &action);
    *state = next;
    fx
}

fn city(value: &str) -> Action {
    Action::SelectFilter {
        kind: FilterKind::City,
        value: Some(value.to_string()),
    }
}

#[test]
fn test_mount_issues_initial_fetch() {
    let mut state = AppState::new();

    let fx = step(&mut state, Action::Mounted);

    assert_eq!(fx, vec![Effect::FetchJobs(FilterCriteria::default())]);
}

#[test]
fn test_typing_then_submitting_fetches_once() {
    let mut state = AppState::new();

    for text in ["e", "en", "eng"] {
        assert!(step(&mut state, Action::SearchChanged(text.to_string())).is_empty());
    }

    let fx = step(&mut state, Action::SubmitSearch);
    assert_eq!(
        fx,
        vec![Effect::FetchJobs(FilterCriteria::new(None, None, Some("eng".to_string())))]
    );
}

#[test]
fn test_niche_change_keeps_city_and_keyword() {
    let mut state = AppState::new();
    step(&mut state, city("Delhi"));
    step(&mut state, Action::SearchChanged("rust".to_string()));

    let fx = step(
        &mut state,
        Action::SelectFilter {
            kind: FilterKind::Niche,
            value: Some("DevOps".to_string()),
        },
    );

    assert_eq!(
        fx,
        vec![Effect::FetchJobs(FilterCriteria::new(
            Some("Delhi".to_string()),
            Some("DevOps".to_string()),
            Some("rust".to_string()),
        ))]
    );
}

#[test]
fn test_selecting_all_after_city_fetches_unfiltered() {
    let mut state = AppState::new();
    step(&mut state, city("Delhi"));

    let fx = step(&mut state, city("All"));

    assert_eq!(fx, vec![Effect::FetchJobs(FilterCriteria::default())]);
    assert!(state.filters.is_unfiltered());
}

#[test]
fn test_listing_error_is_shown_cleared_and_retried_once() {
    let store = Store::new();
    let token = store.begin(ResourceKey::Jobs);
    store.dispatch(StoreAction::Failed {
        resource: ResourceKey::Jobs,
        token,
        error: "Cannot connect to server. Please check if the backend server is running."
            .to_string(),
    });

    let mut state = AppState::new();
    let fx = step(&mut state, Action::BoardUpdated(Box::new(store.snapshot())));

    assert_eq!(fx, vec![Effect::ClearJobsError]);
    assert!(state.toast.as_ref().unwrap().message.starts_with("Cannot connect"));

    // the acknowledged error triggers one refetch with the same filters
    store.dispatch(StoreAction::ClearError(ResourceKey::Jobs));
    let fx = step(&mut state, Action::BoardUpdated(Box::new(store.snapshot())));
    assert_eq!(fx, vec![Effect::FetchJobs(FilterCriteria::default())]);
    assert!(state.toast.is_some());

    // a second failure in a row is shown but not retried
    let token = store.begin(ResourceKey::Jobs);
    store.dispatch(StoreAction::Failed {
        resource: ResourceKey::Jobs,
        token,
        error: "Failed to fetch jobs".to_string(),
    });
    let fx = step(&mut state, Action::BoardUpdated(Box::new(store.snapshot())));
    assert_eq!(fx, vec![Effect::ClearJobsError]);
    store.dispatch(StoreAction::ClearError(ResourceKey::Jobs));
    let fx = step(&mut state, Action::BoardUpdated(Box::new(store.snapshot())));
    assert!(fx.is_empty());
}
