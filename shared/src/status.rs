//! Order status vocabulary
//!
//! The backend speaks Russian status tokens, the UI speaks English ones.
//! The two vocabularies are not the same size: the UI distinguishes
//! `ready` (assembled, waiting) from `delivery` (handed to the courier),
//! while the backend records both as `готов`. Translating UI -> backend
//! therefore loses information and translating back always yields `ready`.
//!
//! | backend     | UI            |
//! |-------------|---------------|
//! | `новый`     | `new`         |
//! | `в работе`  | `in_progress` |
//! | `готов`     | `ready`, `delivery` |
//! | `доставлен` | `completed`   |

use serde::{Deserialize, Serialize};

/// Status recorded by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum BackendStatus {
    #[default]
    #[serde(rename = "новый")]
    New,
    #[serde(rename = "в работе")]
    InProgress,
    #[serde(rename = "готов")]
    Ready,
    #[serde(rename = "доставлен")]
    Delivered,
}

impl BackendStatus {
    pub const ALL: [BackendStatus; 4] = [Self::New, Self::InProgress, Self::Ready, Self::Delivered];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "новый",
            Self::InProgress => "в работе",
            Self::Ready => "готов",
            Self::Delivered => "доставлен",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == token.trim())
    }

    /// The status every order starts in
    pub fn is_initial(&self) -> bool {
        *self == Self::New
    }

    pub fn to_frontend(self) -> FrontendStatus {
        match self {
            Self::New => FrontendStatus::New,
            Self::InProgress => FrontendStatus::InProgress,
            Self::Ready => FrontendStatus::Ready,
            Self::Delivered => FrontendStatus::Completed,
        }
    }
}

impl std::fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status shown in the UI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum FrontendStatus {
    #[default]
    New,
    InProgress,
    Ready,
    Delivery,
    Completed,
}

impl FrontendStatus {
    pub const ALL: [FrontendStatus; 5] = [
        Self::New,
        Self::InProgress,
        Self::Ready,
        Self::Delivery,
        Self::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Ready => "ready",
            Self::Delivery => "delivery",
            Self::Completed => "completed",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == token.trim())
    }

    /// Lossy: `Ready` and `Delivery` both become [`BackendStatus::Ready`]
    pub fn to_backend(self) -> BackendStatus {
        match self {
            Self::New => BackendStatus::New,
            Self::InProgress => BackendStatus::InProgress,
            Self::Ready | Self::Delivery => BackendStatus::Ready,
            Self::Completed => BackendStatus::Delivered,
        }
    }

    /// Russian label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "Новый",
            Self::InProgress => "В работе",
            Self::Ready => "Готов",
            Self::Delivery => "Доставка",
            Self::Completed => "Выполнен",
        }
    }
}

impl std::fmt::Display for FrontendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend token -> UI token. Unrecognized tokens pass through unchanged.
pub fn to_frontend(token: &str) -> String {
    match BackendStatus::from_token(token) {
        Some(status) => status.to_frontend().as_str().to_string(),
        None => token.to_string(),
    }
}

/// UI token -> backend token. Unrecognized tokens map to the initial status.
pub fn to_backend(token: &str) -> &'static str {
    FrontendStatus::from_token(token)
        .map(FrontendStatus::to_backend)
        .unwrap_or_default()
        .as_str()
}
