//! Inventory Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unit of measure for stock
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    #[default]
    Pcs,
    Stem,
    Bunch,
    Pack,
    M,
    Kg,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pcs => "pcs",
            Self::Stem => "stem",
            Self::Bunch => "bunch",
            Self::Pack => "pack",
            Self::M => "m",
            Self::Kg => "kg",
        }
    }

    /// Short Russian label used in tables
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pcs => "шт",
            Self::Stem => "стеб.",
            Self::Bunch => "пуч.",
            Self::Pack => "уп.",
            Self::M => "м",
            Self::Kg => "кг",
        }
    }
}

/// Inventory item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub quantity: Decimal,
    #[serde(default, deserialize_with = "crate::util::lenient")]
    pub unit: Unit,
    #[serde(default)]
    pub min_quantity: Decimal,
    #[serde(default)]
    pub price_per_unit: Decimal,
    pub created_at: Option<String>,
}

impl InventoryItem {
    /// Quantity on hand is below the configured minimum
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.min_quantity
    }
}

/// Create inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryCreate {
    pub name: String,
    pub quantity: Decimal,
    pub unit: Unit,
    pub min_quantity: Decimal,
    pub price_per_unit: Decimal,
}

impl InventoryCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("Укажите название позиции"));
        }
        if self.quantity.is_sign_negative() || self.min_quantity.is_sign_negative() {
            return Err(ValidationError::new("Количество не может быть отрицательным"));
        }
        Ok(())
    }
}

/// Update inventory item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_quantity: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<Decimal>,
}

/// Kind of stock movement recorded in the audit trail
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Receipt,
    WriteOff,
    Adjustment,
    /// Consumed by an order
    Order,
}

/// Inventory transaction (audit trail row)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryTransaction {
    pub id: i64,
    pub inventory_item_id: i64,
    pub kind: TransactionKind,
    /// Signed quantity delta
    pub quantity: Decimal,
    pub comment: Option<String>,
    pub order_id: Option<i64>,
    pub created_at: Option<String>,
}

/// Write-off / adjustment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryAdjust {
    pub kind: TransactionKind,
    pub quantity: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
}

impl InventoryAdjust {
    pub fn write_off(quantity: Decimal, comment: impl Into<String>) -> Self {
        Self {
            kind: TransactionKind::WriteOff,
            quantity: -quantity.abs(),
            comment: Some(comment.into()),
            order_id: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.quantity.is_zero() {
            return Err(ValidationError::new("Количество не может быть нулевым"));
        }
        Ok(())
    }
}
