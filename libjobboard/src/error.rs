//! Error types for Jobboard

use thiserror::Error;

pub type Result<T> = std::result::Result<T, JobBoardError>;

/// Result type for calls made through [`crate::api::JobBoardApi`]
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum JobBoardError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An orchestrated operation failed; carries the user-facing message
    #[error("{0}")]
    Failed(String),

    /// No session, or the backend rejected the credentials
    #[error("{0}")]
    AuthRequired(String),
}

impl JobBoardError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JobBoardError::InvalidInput(_) => 3,
            JobBoardError::AuthRequired(_) => 2,
            JobBoardError::Failed(_) => 1,
            JobBoardError::Api(err) if err.is_auth() => 2,
            JobBoardError::Api(_) => 1,
            JobBoardError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Failure of a single backend call, classified by origin
///
/// The three variants are the taxonomy the presentation layer understands:
/// no response at all, an HTTP error response, or anything else that went
/// wrong on the client side (malformed body, bad multipart part).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    #[error("Server responded with {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Status { status: u16, message: Option<String> },

    #[error("Unexpected response: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// Server rejected the caller's session or credentials
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_builder() {
            ApiError::Unexpected(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                message: None,
            }
        } else {
            // connect, timeout, request and body errors all mean no usable response
            ApiError::Unreachable(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = JobBoardError::InvalidInput("Missing job id".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_authentication_error() {
        let error = JobBoardError::Api(ApiError::Status {
            status: 401,
            message: Some("User is not authenticated.".to_string()),
        });
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_other_api_errors() {
        let unreachable = JobBoardError::Api(ApiError::Unreachable("refused".to_string()));
        assert_eq!(unreachable.exit_code(), 1);

        let not_found = JobBoardError::Api(ApiError::Status {
            status: 404,
            message: None,
        });
        assert_eq!(not_found.exit_code(), 1);

        let unexpected = JobBoardError::Api(ApiError::Unexpected("bad json".to_string()));
        assert_eq!(unexpected.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_operation_outcomes() {
        let failed = JobBoardError::Failed("Job not found".to_string());
        assert_eq!(failed.exit_code(), 1);
        assert_eq!(failed.to_string(), "Job not found");

        let auth = JobBoardError::AuthRequired("Please log in to continue".to_string());
        assert_eq!(auth.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_config_error() {
        let error = JobBoardError::Config(ConfigError::MissingField("api.base_url".to_string()));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_status_error_formatting() {
        let with_message = ApiError::Status {
            status: 404,
            message: Some("Job not found".to_string()),
        };
        assert_eq!(with_message.to_string(), "Server responded with 404: Job not found");

        let without_message = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(without_message.to_string(), "Server responded with 500: <no message>");
    }

    #[test]
    fn test_error_message_formatting_invalid_input() {
        let error = JobBoardError::InvalidInput("Salary cannot be empty".to_string());
        assert_eq!(error.to_string(), "Invalid input: Salary cannot be empty");
    }

    #[test]
    fn test_config_invalid_value_formatting() {
        let error = ConfigError::InvalidValue {
            field: "api.timeout_secs".to_string(),
            reason: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for api.timeout_secs: must be greater than zero"
        );
    }

    #[test]
    fn test_error_conversion_from_api_error() {
        let err: JobBoardError = ApiError::Unreachable("down".to_string()).into();
        match err {
            JobBoardError::Api(ApiError::Unreachable(detail)) => assert_eq!(detail, "down"),
            _ => panic!("Expected JobBoardError::Api"),
        }
    }

    #[test]
    fn test_api_error_status_accessor() {
        let err = ApiError::Status {
            status: 400,
            message: None,
        };
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_auth());
        assert_eq!(ApiError::Unexpected("x".to_string()).status(), None);
    }
}
