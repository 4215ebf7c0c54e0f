use crate::core::form::FormError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {endpoint}")]
    HttpStatusError { status: u16, endpoint: String },

    #[error("Session is not authorized, please log in again")]
    Unauthorized,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("{0}")]
    Validation(#[from] FormError),

    #[error("Cannot {event} from the {from} step")]
    IllegalTransition { from: String, event: String },

    #[error("Booking submission failed: {message}")]
    SubmissionFailed { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Authentication,
    Configuration,
    Input,
    Flow,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BookingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::HttpStatusError { .. } | Self::SubmissionFailed { .. } => {
                ErrorCategory::Network
            }
            Self::Unauthorized => ErrorCategory::Authentication,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::Validation(_) => ErrorCategory::Input,
            Self::IllegalTransition { .. } => ErrorCategory::Flow,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Authentication => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Flow => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Whether repeating the same action may succeed without changing any input.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ApiError(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::HttpStatusError { status, .. } => *status >= 500 || *status == 429,
            Self::SubmissionFailed { .. } => true,
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) => "Could not reach the laundry service".to_string(),
            Self::HttpStatusError { status, .. } => {
                format!("The laundry service answered with an error ({})", status)
            }
            Self::Unauthorized => "Your session has expired, please log in".to_string(),
            Self::Validation(e) => e.to_string(),
            Self::SubmissionFailed { .. } => "Your booking could not be sent".to_string(),
            Self::IllegalTransition { .. } => self.to_string(),
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => format!("Invalid configuration: {}", self),
            Self::IoError(_) | Self::SerializationError(_) => {
                format!("Unexpected internal error: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your connection and try again",
            ErrorCategory::Authentication => "Run the login command to start a new session",
            ErrorCategory::Configuration => {
                "Check --api-url, LAUNDRY_API_URL or the [api] section of the config file"
            }
            ErrorCategory::Input => "Fill in the missing booking details and submit again",
            ErrorCategory::Flow => "Restart the booking from the service selection",
            ErrorCategory::System => "Re-run with --verbose and report the log output",
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_keeps_form_message() {
        let err = BookingError::from(FormError::MissingName);
        assert_eq!(err.to_string(), "Name is required");
        assert_eq!(err.user_friendly_message(), "Name is required");
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_submission_failure_is_retryable() {
        let err = BookingError::SubmissionFailed {
            message: "status 503".to_string(),
        };
        assert!(err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Network);
    }

    #[test]
    fn test_http_status_retryable_only_for_server_errors() {
        let server = BookingError::HttpStatusError {
            status: 502,
            endpoint: "/bookings".to_string(),
        };
        let client = BookingError::HttpStatusError {
            status: 422,
            endpoint: "/bookings".to_string(),
        };
        assert!(server.is_retryable());
        assert!(!client.is_retryable());
    }
}
