//! End-to-end tests for the listing flow
//!
//! Runs the service handle against a scripted backend and feeds the bridged
//! store updates back through the reducer.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use jobboard_tui::app::{reduce, Action, AppState};
use jobboard_tui::services::ServiceHandle;
use libjobboard::api::mock::{MockApi, MockCall};
use libjobboard::service::ServiceOptions;
use libjobboard::store::BoardState;
use libjobboard::types::{FilterCriteria, Job};
use libjobboard::{ApiError, JobBoard, Store};

fn job(id: &str, title: &str) -> Job {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "title": title,
        "companyName": "Acme",
        "location": "Delhi",
        "salary": "10 LPA",
        "jobPostedOn": "2024-01-15T00:00:00.000Z",
        "hiringMultipleCandidates": "No"
    }))
    .unwrap()
}

fn handle(api: Arc<MockApi>) -> ServiceHandle {
    let board = JobBoard::with_api(api, Store::new(), ServiceOptions::default());
    ServiceHandle::with_board(board).expect("runtime")
}

/// Feed updates into the reducer until `done` holds
fn wait_for<F>(rx: &Receiver<BoardState>, mut state: AppState, mut done: F) -> AppState
where
    F: FnMut(&AppState) -> bool,
{
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if let Ok(board) = rx.recv_timeout(Duration::from_millis(50)) {
            state = reduce(state, Action::BoardUpdated(Box::new(board)));
            if done(&state) {
                return state;
            }
        }
    }
    panic!("timed out waiting for board update");
}

#[test]
fn test_fetch_populates_listing() {
    let api = Arc::new(MockApi::new().with_jobs(Ok(vec![job("1", "Rust Developer")])));
    let services = handle(api.clone());
    let rx = services.subscribe();

    let filters = FilterCriteria::new(Some("Delhi".to_string()), None, None);
    services.fetch_jobs(filters.clone());

    let state = wait_for(&rx, AppState::new(), |s| s.board.jobs.snapshot().is_ready());

    assert_eq!(state.board.jobs.snapshot().data()[0].title, "Rust Developer");
    assert!(!state.loading());
    assert_eq!(
        api.calls(),
        vec![MockCall::Health, MockCall::ListJobs(filters)]
    );
}

#[test]
fn test_unreachable_backend_raises_toast_and_keeps_listing() {
    let api = Arc::new(MockApi::new().with_jobs(Ok(vec![job("1", "Rust Developer")])));
    let services = handle(api.clone());
    let rx = services.subscribe();

    services.fetch_jobs(FilterCriteria::default());
    let state = wait_for(&rx, AppState::new(), |s| s.board.jobs.snapshot().is_ready());

    api.push_jobs(
        Duration::ZERO,
        Err(ApiError::Unreachable("connection refused".to_string())),
    );
    services.fetch_jobs(FilterCriteria::default());
    let state = wait_for(&rx, state, |s| s.toast.is_some());

    assert_eq!(
        state.toast.as_ref().unwrap().message,
        "Cannot connect to server. Please check if the backend server is running."
    );
    assert_eq!(state.board.jobs.snapshot().data().len(), 1);

    services.clear_jobs_error();
    assert!(services.snapshot().jobs.snapshot().error().is_none());
}
