//! Pure reducer for the board state
//!
//! `(BoardState, Action) -> BoardState` with no I/O. Terminal actions whose
//! token is no longer the latest for their resource leave the state as is.

use super::actions::{Action, ResourceKey};
use super::resource::DataPolicy;
use super::state::BoardState;

/// Apply `$body` (with the resource bound to `$r`) to the resource named by `$key`
macro_rules! with_resource {
    ($state:expr, $key:expr, |$r:ident| $body:expr) => {{
        let mut state = $state;
        match $key {
            ResourceKey::Jobs => {
                let $r = state.jobs;
                state.jobs = $body;
            }
            ResourceKey::SingleJob => {
                let $r = state.single_job;
                state.single_job = $body;
            }
            ResourceKey::MyJobs => {
                let $r = state.my_jobs;
                state.my_jobs = $body;
            }
            ResourceKey::PostJob => {
                let $r = state.post_job;
                state.post_job = $body;
            }
            ResourceKey::DeleteJob => {
                let $r = state.delete_job;
                state.delete_job = $body;
            }
            ResourceKey::User => {
                let $r = state.user;
                state.user = $body;
            }
            ResourceKey::Profile => {
                let $r = state.profile;
                state.profile = $body;
            }
            ResourceKey::Application => {
                let $r = state.application;
                state.application = $body;
            }
        }
        state
    }};
}

pub fn reduce(state: BoardState, action: Action) -> BoardState {
    match action {
        // === Lifecycle ===
        Action::Request(key) => with_resource!(state, key, |r| r.start()),

        Action::ClearError(key) => with_resource!(state, key, |r| r.clear_error()),

        Action::ClearAllErrors => ResourceKey::ALL
            .into_iter()
            .fold(state, |state, key| with_resource!(state, key, |r| r.clear_error())),

        Action::Reset(key) => with_resource!(state, key, |r| r.reset()),

        Action::ResetJobFlows => ResourceKey::JOB_FLOWS
            .into_iter()
            .fold(state, |state, key| with_resource!(state, key, |r| r.reset())),

        Action::Failed {
            resource,
            token,
            error,
        } => with_resource!(state, resource, |r| r.fail(token, error)),

        // === Jobs ===
        Action::JobsLoaded { token, jobs } => BoardState {
            jobs: state.jobs.succeed(token, jobs, None),
            ..state
        },

        Action::JobLoaded { token, job } => BoardState {
            single_job: state.single_job.succeed(token, Some(job), None),
            ..state
        },

        Action::MyJobsLoaded { token, jobs } => BoardState {
            my_jobs: state.my_jobs.succeed(token, jobs, None),
            ..state
        },

        Action::JobPosted { token, message } => BoardState {
            post_job: state.post_job.confirm(token, Some(message)),
            ..state
        },

        Action::JobDeleted { token, message } => BoardState {
            delete_job: state.delete_job.confirm(token, Some(message)),
            ..state
        },

        // === Session ===
        Action::Authenticated {
            token,
            user,
            message,
        } => BoardState {
            user: state.user.succeed(token, Some(user), message),
            ..state
        },

        Action::UserLoaded { token, user } => BoardState {
            user: state.user.succeed(token, Some(user), None),
            ..state
        },

        Action::LoggedOut { token, message } => BoardState {
            user: state.user.succeed(token, None, Some(message)),
            ..state
        },

        Action::LogoutFailed { token, error } => BoardState {
            user: state.user.fail_with(token, error, DataPolicy::Keep),
            ..state
        },

        // === Profile ===
        Action::ProfileUpdated { token, message } | Action::PasswordUpdated { token, message } => {
            BoardState {
                profile: state.profile.confirm(token, Some(message)),
                ..state
            }
        }

        // === Applications ===
        Action::ApplicationSubmitted { token, message } => BoardState {
            application: state.application.confirm(token, Some(message)),
            ..state
        },
    }
}
