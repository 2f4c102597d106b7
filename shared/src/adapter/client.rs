// shared/src/adapter/client.rs
// Client adapter

use crate::models::Client;
use crate::util::digits;
use crate::view::{ClientStatus, ClientView};

/// Display name: the wire name when present, otherwise `Клиент {last4}`.
pub fn client_display_name(name: Option<&str>, phone: &str) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            let digits = digits(phone);
            let last4 = &digits[digits.len().saturating_sub(4)..];
            format!("Клиент {}", last4)
        }
    }
}

/// Order statistics are computed elsewhere; they start from zero here.
pub fn adapt_client(client: &Client) -> ClientView {
    ClientView {
        id: client.id,
        name: client_display_name(client.name.as_deref(), &client.phone),
        phone: client.phone.clone(),
        email: client.email.clone(),
        address: client.address.clone(),
        client_type: client.client_type,
        notes: client.notes.clone().unwrap_or_default(),
        total_orders: 0,
        total_spent: "0".to_string(),
        last_order_date: None,
        status: ClientStatus::default(),
        created_at: client.created_at.clone(),
    }
}
