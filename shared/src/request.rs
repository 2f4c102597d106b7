//! Request types for the shared crate
//!
//! Query parameters for list endpoints. Every field is optional and skipped
//! when unset, so a default filter produces an empty query string.

use serde::Serialize;

use crate::models::{ClientType, ProductCategory, UserRole};

/// Default page size for list requests
pub const DEFAULT_LIMIT: u32 = 50;

/// Pagination query parameters (`limit` / `skip`)
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u32,
    pub skip: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            skip: 0,
        }
    }
}

impl Pagination {
    /// 1-based page number to `skip`
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            limit,
            skip: page.saturating_sub(1).saturating_mul(limit),
        }
    }
}

/// `/api/orders` filter
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct OrderFilter {
    #[serde(flatten)]
    pub pagination: Pagination,
    /// Backend status token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// `/api/clients` filter
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ClientFilter {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_type: Option<ClientType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// `/api/products` filter
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ProductFilter {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProductCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// `/api/inventory` filter
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct InventoryFilter {
    #[serde(flatten)]
    pub pagination: Pagination,
    /// Only items below their minimum quantity
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub low_stock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// `/api/users` filter
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}
