//! Client error types

use shared::ValidationError;
use thiserror::Error;

/// Message shown for network failures and timeouts
pub const NETWORK_MESSAGE: &str = "Нет соединения с сервером. Проверьте подключение.";
/// Message shown for 5xx responses
pub const SERVER_MESSAGE: &str = "Ошибка сервера, попробуйте позже.";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response
    #[error("HTTP {status} {status_text}")]
    Http {
        status: u16,
        status_text: String,
        /// Parsed `detail` of the error body, when there was one
        detail: Option<String>,
    },

    /// Connection could not be established or was interrupted
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Rejected before any request was issued
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            Self::Config(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.0)
    }
}

impl ClientError {
    /// HTTP status, for `Http` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Network failures, timeouts and 5xx responses may succeed on retry
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout => true,
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Localized message for display next to a retry action
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::Timeout => NETWORK_MESSAGE.to_string(),
            Self::Http { status, .. } if *status >= 500 => SERVER_MESSAGE.to_string(),
            Self::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Http {
                status,
                status_text,
                ..
            } => format!("Ошибка запроса: {} {}", status, status_text)
                .trim_end()
                .to_string(),
            Self::InvalidResponse(_) | Self::Serialization(_) => {
                "Некорректный ответ сервера.".to_string()
            }
            Self::Validation(msg) => msg.clone(),
            Self::Config(msg) => format!("Ошибка конфигурации: {}", msg),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, detail: Option<&str>) -> ClientError {
        ClientError::Http {
            status,
            status_text: "Bad Request".into(),
            detail: detail.map(String::from),
        }
    }

    #[test]
    fn only_transient_errors_are_retryable() {
        assert!(ClientError::Timeout.is_retryable());
        assert!(ClientError::Network("refused".into()).is_retryable());
        assert!(http(503, None).is_retryable());
        assert!(!http(400, None).is_retryable());
        assert!(!http(404, None).is_retryable());
        assert!(!ClientError::Validation("x".into()).is_retryable());
    }

    #[test]
    fn user_messages() {
        assert_eq!(ClientError::Timeout.user_message(), NETWORK_MESSAGE);
        assert_eq!(http(500, Some("trace")).user_message(), SERVER_MESSAGE);
        assert_eq!(http(422, Some("phone: field required")).user_message(), "phone: field required");
        assert_eq!(http(400, None).user_message(), "Ошибка запроса: 400 Bad Request");
    }

    #[test]
    fn validation_error_converts() {
        let err: ClientError = ValidationError::new("Телефон слишком короткий").into();
        assert_eq!(err.user_message(), "Телефон слишком короткий");
    }
}
