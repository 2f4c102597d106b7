//! UI-shaped records
//!
//! What the console views render. Produced from wire records by
//! [`crate::adapter`]; never sent back to the backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ClientType, Unit};
use crate::status::FrontendStatus;

/// Client status tag; the backend does not track one yet
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    #[default]
    Active,
    Vip,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientView {
    pub id: i64,
    /// Wire name, or a phone-derived label when absent
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub client_type: ClientType,
    pub notes: String,
    pub total_orders: u32,
    pub total_spent: String,
    pub last_order_date: Option<String>,
    pub status: ClientStatus,
    pub created_at: Option<String>,
}

/// Product type tag shown in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    #[default]
    Bouquet,
    Composition,
    Potted,
}

impl ProductKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bouquet => "Букет",
            Self::Composition => "Композиция",
            Self::Potted => "Горшечное",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub kind: ProductKind,
    pub preparation_time: Option<i32>,
    /// Ingredients joined for display, empty when not loaded
    pub composition: String,
    pub created_at: Option<String>,
}

/// Composition row resolved against stock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompositionLine {
    pub name: String,
    pub quantity: Decimal,
    pub unit: Option<String>,
    pub inventory_item_id: Option<i64>,
    /// Quantity on hand, when the row matched an inventory item
    pub in_stock: Option<Decimal>,
}

impl CompositionLine {
    /// Matched stock covers the row
    pub fn is_available(&self) -> bool {
        self.in_stock.is_some_and(|stock| stock >= self.quantity)
    }
}

/// Coarse delivery-day bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryBucket {
    Today,
    Tomorrow,
}

impl DeliveryBucket {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Сегодня",
            Self::Tomorrow => "Завтра",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactView {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MainProduct {
    pub title: String,
    pub image: String,
    pub quantity: i32,
    pub price: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryView {
    pub date: DeliveryBucket,
    pub raw_date: Option<String>,
    pub time_window: String,
    pub address: String,
}

/// History category derived from the action text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HistoryKind {
    Created,
    StatusChanged,
    Payment,
    Assigned,
    Comment,
    Edited,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryView {
    pub kind: HistoryKind,
    pub text: String,
    pub comment: Option<String>,
    pub author: Option<String>,
    pub at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderView {
    pub id: i64,
    /// Display number, `#{id}`
    pub number: String,
    /// UI token; unrecognized backend tokens are kept verbatim
    pub status: String,
    pub payment_status: PaymentStatus,
    pub customer: ContactView,
    pub recipient: ContactView,
    pub main_product: MainProduct,
    pub additional_items: Vec<String>,
    pub delivery: DeliveryView,
    pub executor: Option<String>,
    pub courier: Option<String>,
    pub total: String,
    pub comment: String,
    pub history: Vec<HistoryView>,
    pub created_at: Option<String>,
}

impl OrderView {
    /// Typed status, `None` for tokens outside the UI vocabulary
    pub fn frontend_status(&self) -> Option<FrontendStatus> {
        FrontendStatus::from_token(&self.status)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryView {
    pub id: i64,
    pub name: String,
    pub quantity: Decimal,
    pub unit: Unit,
    pub min_quantity: Decimal,
    pub price_per_unit: Decimal,
    pub is_low_stock: bool,
    pub created_at: Option<String>,
}
