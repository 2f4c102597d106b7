//! Shared types for the Bloom florist CRM
//!
//! Wire records exchanged with the CRM backend, the UI-shaped view records,
//! the status vocabulary translator and the adapters that map one onto the
//! other.

pub mod adapter;
pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod status;
pub mod util;
pub mod view;

// Re-exports
pub use error::{ErrorBody, ErrorDetail, ValidationError};
pub use response::{ListEnvelope, Page};
pub use serde::{Deserialize, Serialize};
pub use status::{BackendStatus, FrontendStatus};
