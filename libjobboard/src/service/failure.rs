//! Translation of API failures into user-facing messages

use crate::error::ApiError;
use crate::store::ResourceKey;

pub const UNREACHABLE_MESSAGE: &str =
    "Cannot connect to server. Please check if the backend server is running.";

/// An orchestrated backend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchJobs,
    FetchJob,
    PostJob,
    FetchMyJobs,
    DeleteJob,
    Register,
    Login,
    FetchUser,
    Logout,
    UpdateProfile,
    UpdatePassword,
    SubmitApplication,
}

impl Operation {
    /// Resource whose state the operation drives
    pub fn resource(self) -> ResourceKey {
        match self {
            Operation::FetchJobs => ResourceKey::Jobs,
            Operation::FetchJob => ResourceKey::SingleJob,
            Operation::PostJob => ResourceKey::PostJob,
            Operation::FetchMyJobs => ResourceKey::MyJobs,
            Operation::DeleteJob => ResourceKey::DeleteJob,
            Operation::Register | Operation::Login | Operation::FetchUser | Operation::Logout => {
                ResourceKey::User
            }
            Operation::UpdateProfile | Operation::UpdatePassword => ResourceKey::Profile,
            Operation::SubmitApplication => ResourceKey::Application,
        }
    }

    /// Message used when the failure carries nothing better
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::FetchJobs => "Failed to fetch jobs",
            Operation::FetchJob => "Failed to fetch job details",
            Operation::PostJob => "Failed to post job",
            Operation::FetchMyJobs => "Failed to fetch your jobs",
            Operation::DeleteJob => "Failed to delete job",
            Operation::Register => "Registration failed",
            Operation::Login => "Login failed",
            Operation::FetchUser => "Failed to fetch user data",
            Operation::Logout => "Logout failed",
            Operation::UpdateProfile => "Failed to update profile.",
            Operation::UpdatePassword => "Failed to update password.",
            Operation::SubmitApplication => "Failed to submit application",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::FetchJobs => "fetch_jobs",
            Operation::FetchJob => "fetch_job",
            Operation::PostJob => "post_job",
            Operation::FetchMyJobs => "fetch_my_jobs",
            Operation::DeleteJob => "delete_job",
            Operation::Register => "register",
            Operation::Login => "login",
            Operation::FetchUser => "fetch_user",
            Operation::Logout => "logout",
            Operation::UpdateProfile => "update_profile",
            Operation::UpdatePassword => "update_password",
            Operation::SubmitApplication => "submit_application",
        }
    }
}

/// Message shown to the user when `operation` fails with `error`
pub fn failure_message(operation: Operation, error: &ApiError) -> String {
    match error {
        ApiError::Unreachable(_) => UNREACHABLE_MESSAGE.to_string(),
        ApiError::Status { status, message } => {
            if operation == Operation::FetchUser {
                match status {
                    400 | 401 => return "Please log in to continue".to_string(),
                    403 => return "Access forbidden".to_string(),
                    404 => return "User not found".to_string(),
                    _ => {}
                }
            }
            match message {
                Some(message) => message.clone(),
                None => format!("Server error: {}", status),
            }
        }
        ApiError::Unexpected(_) => operation.fallback_message().to_string(),
    }
}
