//! Bloom Client - HTTP client for the florist CRM backend
//!
//! Provides the retrying HTTP wrapper, a typed endpoint facade and the
//! per-entity stores the console views render from.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod retry;
pub mod store;

pub use api::BloomApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use retry::RetryPolicy;
pub use store::{
    ClientsStore, DashboardStore, InventoryStore, OrderDetailStore, OrdersStore, ProductsStore,
    Resource, ResourceState, StaffStore,
};

// Re-export shared types for convenience
pub use shared::models;
pub use shared::view;
