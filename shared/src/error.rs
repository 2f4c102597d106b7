//! Error types for the shared crate
//!
//! Backend error bodies and client-side validation errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One entry of a validation error list
///
/// ```json
/// { "loc": ["body", "phone"], "msg": "field required", "type": "missing" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub loc: Vec<Value>,
    pub msg: String,
}

impl ValidationIssue {
    /// `loc` rendered as a dotted path, without the leading `body` segment
    pub fn field(&self) -> Option<String> {
        let parts: Vec<String> = self
            .loc
            .iter()
            .filter_map(|segment| match segment {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .skip_while(|s| s == "body" || s == "query" || s == "path")
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("."))
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.field() {
            Some(field) => write!(f, "{}: {}", field, self.msg),
            None => write!(f, "{}", self.msg),
        }
    }
}

/// `detail` field of an error body: either a message or a list of issues
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Issues(Vec<ValidationIssue>),
}

impl ErrorDetail {
    /// Single human-readable message
    pub fn message(&self) -> String {
        match self {
            Self::Message(msg) => msg.clone(),
            Self::Issues(issues) => issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: ErrorDetail,
}

impl ErrorBody {
    /// Parse a raw response body, `None` if it is not an error body
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }
}

/// Client-side validation failure, raised before any request is issued
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
