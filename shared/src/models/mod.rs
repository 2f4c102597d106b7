//! Data models
//!
//! Records as transmitted by the CRM backend. The backend is the source of
//! truth; the client only ever holds refetchable copies.
//! All IDs are `i64`, money is [`rust_decimal::Decimal`].

pub mod client;
pub mod inventory;
pub mod order;
pub mod product;
pub mod stats;
pub mod user;

// Re-exports
pub use client::*;
pub use inventory::*;
pub use order::*;
pub use product::*;
pub use stats::*;
pub use user::*;
