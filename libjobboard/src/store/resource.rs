//! Generic request/terminal state machine for one backend resource
//!
//! Every transition consumes the resource and returns the next one. Terminal
//! transitions carry the [`RequestToken`] handed out by [`AsyncResource::start`]
//! and are ignored unless that token is still the latest issued, so a request
//! that was superseded (or reset away) can never overwrite newer state.

use std::fmt;

/// Identifies one request cycle of one resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    fn next(self) -> Self {
        RequestToken(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// What happens to previously loaded data at a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataPolicy {
    Keep,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePolicy {
    pub on_request: DataPolicy,
    pub on_failure: DataPolicy,
}

impl ResourcePolicy {
    /// Data survives both new requests and failures
    pub const KEEP: Self = Self {
        on_request: DataPolicy::Keep,
        on_failure: DataPolicy::Keep,
    };

    /// Data is emptied when a new request starts
    pub const CLEAR_ON_REQUEST: Self = Self {
        on_request: DataPolicy::Clear,
        on_failure: DataPolicy::Keep,
    };

    /// Data is emptied when a request fails
    pub const CLEAR_ON_FAILURE: Self = Self {
        on_request: DataPolicy::Keep,
        on_failure: DataPolicy::Clear,
    };
}

/// Observable state of a resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot<D> {
    phase: Phase,
    data: D,
    message: Option<String>,
}

impl<D> Snapshot<D> {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    /// Confirmation text from the last successful action
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct AsyncResource<D> {
    snapshot: Snapshot<D>,
    policy: ResourcePolicy,
    latest: RequestToken,
}

// Tokens are bookkeeping: two resources showing the same snapshot are equal.
impl<D: PartialEq> PartialEq for AsyncResource<D> {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot == other.snapshot && self.policy == other.policy
    }
}

impl<D> AsyncResource<D> {
    pub fn snapshot(&self) -> &Snapshot<D> {
        &self.snapshot
    }

    pub fn policy(&self) -> ResourcePolicy {
        self.policy
    }

    /// Token of the most recent request, the only one whose terminal applies
    pub fn latest_token(&self) -> RequestToken {
        self.latest
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token == self.latest
    }
}

impl<D: Default> AsyncResource<D> {
    pub fn new(policy: ResourcePolicy) -> Self {
        Self {
            snapshot: Snapshot::default(),
            policy,
            latest: RequestToken::default(),
        }
    }

    /// Enter `Loading` under a freshly issued token
    pub fn start(self) -> Self {
        let data = match self.policy.on_request {
            DataPolicy::Keep => self.snapshot.data,
            DataPolicy::Clear => D::default(),
        };
        Self {
            snapshot: Snapshot {
                phase: Phase::Loading,
                data,
                message: None,
            },
            latest: self.latest.next(),
            ..self
        }
    }

    pub fn succeed(self, token: RequestToken, data: D, message: Option<String>) -> Self {
        if !self.is_current(token) {
            return self;
        }
        Self {
            snapshot: Snapshot {
                phase: Phase::Ready,
                data,
                message,
            },
            ..self
        }
    }

    /// Like [`succeed`](Self::succeed) but leaves `data` as it is
    pub fn confirm(self, token: RequestToken, message: Option<String>) -> Self {
        if !self.is_current(token) {
            return self;
        }
        Self {
            snapshot: Snapshot {
                phase: Phase::Ready,
                message,
                ..self.snapshot
            },
            ..self
        }
    }

    pub fn fail(self, token: RequestToken, error: String) -> Self {
        let on_failure = self.policy.on_failure;
        self.fail_with(token, error, on_failure)
    }

    /// [`fail`](Self::fail) with an explicit data policy for this one failure
    pub fn fail_with(self, token: RequestToken, error: String, on_failure: DataPolicy) -> Self {
        if !self.is_current(token) {
            return self;
        }
        let data = match on_failure {
            DataPolicy::Keep => self.snapshot.data,
            DataPolicy::Clear => D::default(),
        };
        Self {
            snapshot: Snapshot {
                phase: Phase::Failed(error),
                data,
                message: None,
            },
            ..self
        }
    }

    /// `Failed` becomes `Idle`; any other phase is left alone
    pub fn clear_error(self) -> Self {
        match self.snapshot.phase {
            Phase::Failed(_) => Self {
                snapshot: Snapshot {
                    phase: Phase::Idle,
                    ..self.snapshot
                },
                ..self
            },
            _ => self,
        }
    }

    /// Back to the blank snapshot; requests still in flight are orphaned
    pub fn reset(self) -> Self {
        Self {
            snapshot: Snapshot::default(),
            policy: self.policy,
            latest: self.latest.next(),
        }
    }
}
