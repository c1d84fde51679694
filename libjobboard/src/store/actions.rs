//! Actions for the board store
//!
//! Every change to [`BoardState`](super::BoardState) is described by an
//! [`Action`]. Terminal actions carry the token returned when their request
//! began so the reducer can drop results that arrive out of date.

use std::fmt;

use super::resource::RequestToken;
use crate::types::{Job, User};

/// Name of a tracked resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Jobs,
    SingleJob,
    MyJobs,
    PostJob,
    DeleteJob,
    User,
    Profile,
    Application,
}

impl ResourceKey {
    pub const ALL: [ResourceKey; 8] = [
        ResourceKey::Jobs,
        ResourceKey::SingleJob,
        ResourceKey::MyJobs,
        ResourceKey::PostJob,
        ResourceKey::DeleteJob,
        ResourceKey::User,
        ResourceKey::Profile,
        ResourceKey::Application,
    ];

    /// Resources owned by the job service
    pub const JOB_RESOURCES: [ResourceKey; 5] = [
        ResourceKey::Jobs,
        ResourceKey::SingleJob,
        ResourceKey::MyJobs,
        ResourceKey::PostJob,
        ResourceKey::DeleteJob,
    ];

    /// Per-flow job resources blanked by [`Action::ResetJobFlows`]
    pub const JOB_FLOWS: [ResourceKey; 3] = [
        ResourceKey::SingleJob,
        ResourceKey::PostJob,
        ResourceKey::DeleteJob,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKey::Jobs => "jobs",
            ResourceKey::SingleJob => "single_job",
            ResourceKey::MyJobs => "my_jobs",
            ResourceKey::PostJob => "post_job",
            ResourceKey::DeleteJob => "delete_job",
            ResourceKey::User => "user",
            ResourceKey::Profile => "profile",
            ResourceKey::Application => "application",
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Lifecycle ===
    /// A request for `key` is about to be sent
    Request(ResourceKey),

    ClearError(ResourceKey),

    ClearAllErrors,

    Reset(ResourceKey),

    /// Blank the single-job, post and delete flows
    ResetJobFlows,

    /// Any request ended without a usable response
    Failed {
        resource: ResourceKey,
        token: RequestToken,
        error: String,
    },

    // === Jobs ===
    JobsLoaded {
        token: RequestToken,
        jobs: Vec<Job>,
    },

    JobLoaded {
        token: RequestToken,
        job: Job,
    },

    MyJobsLoaded {
        token: RequestToken,
        jobs: Vec<Job>,
    },

    JobPosted {
        token: RequestToken,
        message: String,
    },

    JobDeleted {
        token: RequestToken,
        message: String,
    },

    // === Session ===
    /// Register or login succeeded
    Authenticated {
        token: RequestToken,
        user: User,
        message: Option<String>,
    },

    UserLoaded {
        token: RequestToken,
        user: User,
    },

    LoggedOut {
        token: RequestToken,
        message: String,
    },

    /// Logout failed; the session may still be valid, so the user is kept
    LogoutFailed {
        token: RequestToken,
        error: String,
    },

    // === Profile ===
    ProfileUpdated {
        token: RequestToken,
        message: String,
    },

    PasswordUpdated {
        token: RequestToken,
        message: String,
    },

    // === Applications ===
    ApplicationSubmitted {
        token: RequestToken,
        message: String,
    },
}

impl Action {
    /// Resource and token of a terminal action, `None` for lifecycle actions
    pub fn terminal(&self) -> Option<(ResourceKey, RequestToken)> {
        let pair = match self {
            Action::Failed { resource, token, .. } => (*resource, *token),
            Action::JobsLoaded { token, .. } => (ResourceKey::Jobs, *token),
            Action::JobLoaded { token, .. } => (ResourceKey::SingleJob, *token),
            Action::MyJobsLoaded { token, .. } => (ResourceKey::MyJobs, *token),
            Action::JobPosted { token, .. } => (ResourceKey::PostJob, *token),
            Action::JobDeleted { token, .. } => (ResourceKey::DeleteJob, *token),
            Action::Authenticated { token, .. }
            | Action::UserLoaded { token, .. }
            | Action::LoggedOut { token, .. }
            | Action::LogoutFailed { token, .. } => (ResourceKey::User, *token),
            Action::ProfileUpdated { token, .. } | Action::PasswordUpdated { token, .. } => {
                (ResourceKey::Profile, *token)
            }
            Action::ApplicationSubmitted { token, .. } => (ResourceKey::Application, *token),
            Action::Request(_)
            | Action::ClearError(_)
            | Action::ClearAllErrors
            | Action::Reset(_)
            | Action::ResetJobFlows => return None,
        };
        Some(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_resource_mapping() {
        let token = RequestToken::default();
        let action = Action::PasswordUpdated {
            token,
            message: "Password updated.".to_string(),
        };
        assert_eq!(action.terminal(), Some((ResourceKey::Profile, token)));

        let action = Action::LoggedOut {
            token,
            message: "bye".to_string(),
        };
        assert_eq!(action.terminal(), Some((ResourceKey::User, token)));

        assert_eq!(Action::ResetJobFlows.terminal(), None);
    }

    #[test]
    fn test_job_groups_are_subsets() {
        for key in ResourceKey::JOB_FLOWS {
            assert!(ResourceKey::JOB_RESOURCES.contains(&key));
        }
        for key in ResourceKey::JOB_RESOURCES {
            assert!(ResourceKey::ALL.contains(&key));
        }
    }
}
