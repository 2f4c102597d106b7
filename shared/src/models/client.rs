//! Client Model

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::util::digits;

/// Minimum number of digits accepted in a phone number
pub const MIN_PHONE_DIGITS: usize = 10;

/// Role a client plays in orders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClientType {
    /// Places orders
    Orderer,
    /// Receives deliveries
    Recipient,
    #[default]
    Both,
}

impl ClientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orderer => "orderer",
            Self::Recipient => "recipient",
            Self::Both => "both",
        }
    }
}

/// Client entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: Option<String>,
    /// Only identifying field guaranteed to be present
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "crate::util::lenient")]
    pub client_type: ClientType,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

/// Create client payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub client_type: ClientType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ClientCreate {
    /// Create payload with only the required phone number
    pub fn with_phone(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_phone(&self.phone)?;
        if let Some(email) = self.email.as_deref()
            && !email.is_empty()
            && !email.contains('@')
        {
            return Err(ValidationError::new("Некорректный email"));
        }
        Ok(())
    }
}

/// Update client payload (only `Some` fields are sent)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_type: Option<ClientType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ClientUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.phone.as_deref() {
            Some(phone) => validate_phone(phone),
            None => Ok(()),
        }
    }
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if digits(phone).len() < MIN_PHONE_DIGITS {
        return Err(ValidationError::new(format!(
            "Телефон должен содержать не менее {} цифр",
            MIN_PHONE_DIGITS
        )));
    }
    Ok(())
}
