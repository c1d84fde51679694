//! Board state: one [`AsyncResource`] per tracked resource

use super::actions::ResourceKey;
use super::resource::{AsyncResource, Phase, RequestToken, ResourcePolicy};
use crate::types::{Job, User};

#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    /// Search results; stale results survive a failed refresh
    pub jobs: AsyncResource<Vec<Job>>,
    pub single_job: AsyncResource<Option<Job>>,
    /// Caller's own postings; emptied before every fetch
    pub my_jobs: AsyncResource<Vec<Job>>,
    pub post_job: AsyncResource<()>,
    pub delete_job: AsyncResource<()>,
    /// Signed-in account; dropped on any failure except logout
    pub user: AsyncResource<Option<User>>,
    pub profile: AsyncResource<()>,
    pub application: AsyncResource<()>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            jobs: AsyncResource::new(ResourcePolicy::KEEP),
            single_job: AsyncResource::new(ResourcePolicy::KEEP),
            my_jobs: AsyncResource::new(ResourcePolicy::CLEAR_ON_REQUEST),
            post_job: AsyncResource::new(ResourcePolicy::KEEP),
            delete_job: AsyncResource::new(ResourcePolicy::KEEP),
            user: AsyncResource::new(ResourcePolicy::CLEAR_ON_FAILURE),
            profile: AsyncResource::new(ResourcePolicy::KEEP),
            application: AsyncResource::new(ResourcePolicy::KEEP),
        }
    }
}

impl BoardState {
    pub fn is_authenticated(&self) -> bool {
        self.user.snapshot().data().is_some()
    }

    /// The last profile or password update went through
    pub fn profile_updated(&self) -> bool {
        self.profile.snapshot().is_ready()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.snapshot().data().as_ref()
    }

    pub fn latest_token(&self, key: ResourceKey) -> RequestToken {
        match key {
            ResourceKey::Jobs => self.jobs.latest_token(),
            ResourceKey::SingleJob => self.single_job.latest_token(),
            ResourceKey::MyJobs => self.my_jobs.latest_token(),
            ResourceKey::PostJob => self.post_job.latest_token(),
            ResourceKey::DeleteJob => self.delete_job.latest_token(),
            ResourceKey::User => self.user.latest_token(),
            ResourceKey::Profile => self.profile.latest_token(),
            ResourceKey::Application => self.application.latest_token(),
        }
    }

    pub fn phase(&self, key: ResourceKey) -> &Phase {
        match key {
            ResourceKey::Jobs => self.jobs.snapshot().phase(),
            ResourceKey::SingleJob => self.single_job.snapshot().phase(),
            ResourceKey::MyJobs => self.my_jobs.snapshot().phase(),
            ResourceKey::PostJob => self.post_job.snapshot().phase(),
            ResourceKey::DeleteJob => self.delete_job.snapshot().phase(),
            ResourceKey::User => self.user.snapshot().phase(),
            ResourceKey::Profile => self.profile.snapshot().phase(),
            ResourceKey::Application => self.application.snapshot().phase(),
        }
    }

    pub fn error(&self, key: ResourceKey) -> Option<&str> {
        match self.phase(key) {
            Phase::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Every resource currently holding an error, in [`ResourceKey::ALL`] order
    pub fn errors(&self) -> Vec<(ResourceKey, &str)> {
        ResourceKey::ALL
            .into_iter()
            .filter_map(|key| self.error(key).map(|e| (key, e)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_blank() {
        let state = BoardState::default();
        for key in ResourceKey::ALL {
            assert_eq!(state.phase(key), &Phase::Idle);
            assert_eq!(state.latest_token(key), RequestToken::default());
        }
        assert!(!state.is_authenticated());
        assert!(!state.profile_updated());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_policies_per_resource() {
        let state = BoardState::default();
        assert_eq!(state.jobs.policy(), ResourcePolicy::KEEP);
        assert_eq!(state.my_jobs.policy(), ResourcePolicy::CLEAR_ON_REQUEST);
        assert_eq!(state.user.policy(), ResourcePolicy::CLEAR_ON_FAILURE);
    }
}
