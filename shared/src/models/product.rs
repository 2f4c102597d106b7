//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Product category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    #[default]
    Bouquet,
    Composition,
    Potted,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bouquet => "bouquet",
            Self::Composition => "composition",
            Self::Potted => "potted",
        }
    }
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    /// Unknown categories decode as `None`
    #[serde(default, deserialize_with = "crate::util::lenient")]
    pub category: Option<ProductCategory>,
    /// Preparation time in minutes
    pub preparation_time: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    pub category: ProductCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ProductCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().chars().count() < 2 {
            return Err(ValidationError::new(
                "Название должно содержать не менее 2 символов",
            ));
        }
        if self.price.is_sign_negative() {
            return Err(ValidationError::new("Цена не может быть отрицательной"));
        }
        Ok(())
    }
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProductCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ProductUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = self.name.as_deref()
            && name.trim().chars().count() < 2
        {
            return Err(ValidationError::new(
                "Название должно содержать не менее 2 символов",
            ));
        }
        if let Some(price) = self.price
            && price.is_sign_negative()
        {
            return Err(ValidationError::new("Цена не может быть отрицательной"));
        }
        Ok(())
    }
}

/// One ingredient row of a product's composition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionRow {
    pub id: i64,
    pub product_id: i64,
    /// Inventory item this row draws from, if linked
    pub inventory_item_id: Option<i64>,
    pub name: String,
    pub quantity: Decimal,
    pub unit: Option<String>,
}

/// Add composition row payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionRowCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<i64>,
    pub name: String,
    pub quantity: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}
