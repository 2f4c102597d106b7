//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Client, Product, User};
use crate::error::ValidationError;

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    /// Product reference
    pub product_id: i64,
    /// Embedded product, when the backend expands it
    pub product: Option<Product>,
    pub quantity: i32,
    /// Unit price at the time of ordering
    pub price: Decimal,
}

/// Audit entry attached to an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHistoryEntry {
    pub id: i64,
    /// Free-text action description (backend language)
    pub action: String,
    pub comment: Option<String>,
    pub user_name: Option<String>,
    pub created_at: Option<String>,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Orderer reference
    pub client_id: i64,
    pub recipient_id: i64,
    pub client: Option<Client>,
    pub recipient: Option<Client>,
    /// Florist assigned to prepare the order
    pub executor_id: Option<i64>,
    pub courier_id: Option<i64>,
    pub executor: Option<User>,
    pub courier: Option<User>,
    /// Backend status token, see [`crate::status`]
    pub status: String,
    pub delivery_date: Option<String>,
    pub delivery_address: Option<String>,
    pub delivery_time_window: Option<String>,
    pub total_price: Decimal,
    pub comment: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub history: Vec<OrderHistoryEntry>,
}

/// Line item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub product_id: i64,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub client_id: i64,
    pub recipient_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courier_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub items: Vec<OrderItemCreate>,
}

impl OrderCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.items.is_empty() {
            return Err(ValidationError::new("Добавьте хотя бы один товар"));
        }
        if self.items.iter().any(|item| item.quantity <= 0) {
            return Err(ValidationError::new("Количество должно быть больше нуля"));
        }
        Ok(())
    }
}

/// Update order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courier_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Update status payload (backend token)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_and_history_default_to_empty() {
        let order: Order = serde_json::from_str(
            r#"{"id":7,"client_id":1,"recipient_id":2,"status":"новый","total_price":0}"#,
        )
        .unwrap();
        assert!(order.items.is_empty());
        assert!(order.history.is_empty());
        assert!(order.client.is_none());
    }

    #[test]
    fn order_without_items_is_invalid() {
        let create = OrderCreate {
            client_id: 1,
            recipient_id: 1,
            executor_id: None,
            courier_id: None,
            delivery_date: None,
            delivery_address: None,
            delivery_time_window: None,
            comment: None,
            items: vec![],
        };
        assert!(create.validate().is_err());
    }
}
