//! API Response types
//!
//! List endpoints answer either with a bare array or with an object that
//! carries the array under a named field:
//! ```json
//! { "orders": [ ... ], "total": 120, "page": 1, "page_size": 50 }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field names tried after the entity-specific one
const FALLBACK_FIELDS: [&str; 2] = ["items", "data"];

/// Raw list response, decoded lazily once the entity field is known
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListEnvelope(pub Value);

impl ListEnvelope {
    /// Decode the list, looking for `field` when the body is an object
    pub fn into_page<T: DeserializeOwned>(self, field: &str) -> Result<Page<T>, serde_json::Error> {
        match self.0 {
            Value::Array(items) => {
                let items: Vec<T> = serde_json::from_value(Value::Array(items))?;
                Ok(Page::from_items(items))
            }
            Value::Object(mut map) => {
                let list = std::iter::once(field)
                    .chain(FALLBACK_FIELDS)
                    .find_map(|key| match map.remove(key) {
                        Some(Value::Array(items)) => Some(items),
                        _ => None,
                    })
                    .unwrap_or_default();
                let items: Vec<T> = serde_json::from_value(Value::Array(list))?;
                let number = |key: &str| map.get(key).and_then(Value::as_u64);
                Ok(Page {
                    total: number("total").unwrap_or(items.len() as u64),
                    page: number("page").and_then(|v| u32::try_from(v).ok()),
                    page_size: number("page_size").and_then(|v| u32::try_from(v).ok()),
                    items,
                })
            }
            Value::Null => Ok(Page::from_items(Vec::new())),
            other => Err(serde::de::Error::custom(format!(
                "expected list response, got {}",
                kind(&other)
            ))),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One page of a list response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of records on the server
    pub total: u64,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::from_items(Vec::new())
    }
}

impl<T> Page<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            total: items.len() as u64,
            page: None,
            page_size: None,
            items,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> ListEnvelope {
        ListEnvelope(value)
    }

    #[test]
    fn bare_array() {
        let page: Page<i64> = envelope(json!([1, 2, 3])).into_page("orders").unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total, 3);
        assert_eq!(page.page, None);
    }

    #[test]
    fn named_field_with_pagination() {
        let page: Page<i64> = envelope(json!({
            "orders": [4, 5],
            "total": 42,
            "page": 2,
            "page_size": 2
        }))
        .into_page("orders")
        .unwrap();
        assert_eq!(page.items, vec![4, 5]);
        assert_eq!(page.total, 42);
        assert_eq!(page.page, Some(2));
        assert_eq!(page.page_size, Some(2));
    }

    #[test]
    fn out_of_range_page_numbers_are_dropped() {
        let page: Page<i64> = envelope(json!({
            "orders": [1],
            "page": 5_000_000_000u64,
            "page_size": 4_294_967_296u64
        }))
        .into_page("orders")
        .unwrap();
        assert_eq!(page.page, None);
        assert_eq!(page.page_size, None);
    }

    #[test]
    fn falls_back_to_items_field() {
        let page: Page<i64> = envelope(json!({ "items": [9] })).into_page("clients").unwrap();
        assert_eq!(page.items, vec![9]);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn object_without_list_is_empty() {
        let page: Page<i64> = envelope(json!({ "total": 0 })).into_page("products").unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn scalar_is_an_error() {
        assert!(envelope(json!("nope")).into_page::<i64>("orders").is_err());
    }
}
