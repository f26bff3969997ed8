/*
[INPUT]:  Error sources (HTTP transport, status, decode, configuration)
[OUTPUT]: Structured error types with descriptive messages
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the EzRentOut client.
///
/// Remote failures are deliberately uniform: the service draws no useful
/// line between network faults, non-2xx statuses, and undecodable bodies,
/// so every failed operation surfaces as [`EzRentOutError::Operation`]
/// rendered as `Failed to {action}: {cause}`.
#[derive(Error, Debug)]
pub enum EzRentOutError {
    /// A remote operation failed (transport, status, or decode).
    #[error("Failed to {action}: {message}")]
    Operation { action: String, message: String },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EzRentOutError {
    /// Wrap an underlying failure in the uniform operation error.
    pub fn operation(action: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        EzRentOutError::Operation {
            action: action.into(),
            message: cause.to_string(),
        }
    }
}

/// Result type alias for EzRentOut operations
pub type Result<T> = std::result::Result<T, EzRentOutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_error_message_format() {
        let err = EzRentOutError::operation("get all asset", "Network Error");
        assert_eq!(err.to_string(), "Failed to get all asset: Network Error");
    }

    #[test]
    fn test_operation_error_with_id_in_action() {
        let err = EzRentOutError::operation("update group with id 7", "timed out");
        assert_eq!(err.to_string(), "Failed to update group with id 7: timed out");
    }

    #[test]
    fn test_config_error_message() {
        let err = EzRentOutError::Config("EZRENTOUT_API_KEY is not set".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: EZRENTOUT_API_KEY is not set"
        );
    }
}
