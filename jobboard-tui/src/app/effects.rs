//! Side effects implied by a state transition
//!
//! The reducer stays pure; the event loop compares the state before and
//! after each action and hands the resulting effects to the service handle.

use libjobboard::types::FilterCriteria;

use super::actions::Action;
use super::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the listing with these filters
    FetchJobs(FilterCriteria),

    /// Acknowledge a listing error once it has been shown
    ClearJobsError,
}

/// Effects to run after `action` turned `prev` into `next`
///
/// A city or niche change fetches immediately with the current keyword.
/// Typing in the search box never fetches on its own; submitting, refreshing,
/// mounting and the single retry after an acknowledged listing error bump
/// `fetch_generation` instead.
pub fn effects(prev: &AppState, next: &AppState, action: &Action) -> Vec<Effect> {
    let mut out = Vec::new();

    let filters_changed =
        prev.filters.city != next.filters.city || prev.filters.niche != next.filters.niche;
    if filters_changed || prev.fetch_generation != next.fetch_generation {
        out.push(Effect::FetchJobs(next.filters.clone()));
    }

    if let Action::BoardUpdated(board) = action {
        if board.jobs.snapshot().error().is_some() {
            out.push(Effect::ClearJobsError);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::FilterKind;
    use crate::app::reducer::reduce;
    use libjobboard::store::{Action as StoreAction, BoardState, ResourceKey, Store};

    fn run(state: AppState, action: Action) -> (AppState, Vec<Effect>) {
        let next = reduce(state.clone(), action.clone());
        let fx = effects(&state, &next, &action);
        (next, fx)
    }

    #[test]
    fn test_mount_fetches_unfiltered() {
        let (_, fx) = run(AppState::new(), Action::Mounted);
        assert_eq!(fx, vec![Effect::FetchJobs(FilterCriteria::default())]);
    }

    #[test]
    fn test_city_change_fetches_with_current_keyword() {
        let (state, fx) = run(AppState::new(), Action::SearchChanged("rust".to_string()));
        assert!(fx.is_empty());

        let (_, fx) = run(
            state,
            Action::SelectFilter {
                kind: FilterKind::City,
                value: Some("Delhi".to_string()),
            },
        );
        assert_eq!(
            fx,
            vec![Effect::FetchJobs(FilterCriteria::new(
                Some("Delhi".to_string()),
                None,
                Some("rust".to_string()),
            ))]
        );
    }

    fn board_with_jobs_error() -> (Store, BoardState) {
        let store = Store::new();
        let token = store.begin(ResourceKey::Jobs);
        store.dispatch(StoreAction::Failed {
            resource: ResourceKey::Jobs,
            token,
            error: "Failed to fetch jobs".to_string(),
        });
        let failed = store.snapshot();
        store.dispatch(StoreAction::ClearError(ResourceKey::Jobs));
        (store, failed)
    }

    #[test]
    fn test_acknowledged_error_refetches_once() {
        let state = AppState::new();
        let (store, failed) = board_with_jobs_error();

        let (state, fx) = run(state, Action::BoardUpdated(Box::new(failed.clone())));
        assert_eq!(fx, vec![Effect::ClearJobsError]);

        let (state, fx) = run(state, Action::BoardUpdated(Box::new(store.snapshot())));
        assert_eq!(fx, vec![Effect::FetchJobs(FilterCriteria::default())]);
        assert!(!state.retry_armed);

        // the retry fails too: acknowledged, but no second refetch
        let (state, fx) = run(state, Action::BoardUpdated(Box::new(failed)));
        assert_eq!(fx, vec![Effect::ClearJobsError]);
        let (_, fx) = run(state, Action::BoardUpdated(Box::new(store.snapshot())));
        assert!(fx.is_empty());
    }

    #[test]
    fn test_successful_load_rearms_retry() {
        let (store, failed) = board_with_jobs_error();
        let state = AppState {
            retry_armed: false,
            ..AppState::new()
        };

        let token = store.begin(ResourceKey::Jobs);
        store.dispatch(StoreAction::JobsLoaded {
            token,
            jobs: Vec::new(),
        });
        let (state, _) = run(state, Action::BoardUpdated(Box::new(store.snapshot())));
        assert!(state.retry_armed);

        let (state, _) = run(state, Action::BoardUpdated(Box::new(failed)));
        let (cleared_store, _) = board_with_jobs_error();
        let (_, fx) = run(state, Action::BoardUpdated(Box::new(cleared_store.snapshot())));
        assert_eq!(fx, vec![Effect::FetchJobs(FilterCriteria::default())]);
    }

    #[test]
    fn test_error_replaced_by_new_request_does_not_retry() {
        let (store, failed) = board_with_jobs_error();
        let (state, _) = run(AppState::new(), Action::BoardUpdated(Box::new(failed)));

        store.begin(ResourceKey::Jobs);
        let (state, fx) = run(state, Action::BoardUpdated(Box::new(store.snapshot())));
        assert!(fx.is_empty());
        assert!(state.retry_armed);
    }

    #[test]
    fn test_reselecting_same_niche_does_not_fetch() {
        let select = Action::SelectFilter {
            kind: FilterKind::Niche,
            value: Some("DevOps".to_string()),
        };
        let (state, fx) = run(AppState::new(), select.clone());
        assert_eq!(fx.len(), 1);

        let (_, fx) = run(state, select);
        assert!(fx.is_empty());
    }
}
