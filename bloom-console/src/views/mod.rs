//! Terminal views, one per CRM screen
//!
//! Each view refetches its store and prints the adapted records. Failures
//! are printed inline by [`report_error`] and the process exits non-zero.

pub mod clients;
pub mod dashboard;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod staff;
mod table;

pub use table::Table;

use bloom_client::ClientError;

const RETRY_HINT: &str = "Повторите команду, чтобы попробовать снова.";

/// Print an error the way a view would show it next to a retry button
pub fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<ClientError>() {
        Some(client_err) => {
            eprintln!("Ошибка: {}", client_err.user_message());
            if client_err.is_retryable() {
                eprintln!("{}", RETRY_HINT);
            }
        }
        None => eprintln!("Ошибка: {:#}", err),
    }
}

/// `-` for absent optional text
fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
