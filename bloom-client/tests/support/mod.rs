//! Mock CRM backend for integration tests
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use bloom_client::{BloomApi, ClientConfig};
use chrono::NaiveDate;

/// Request counter shared with handlers
#[derive(Debug, Clone, Default)]
pub struct Hits(Arc<AtomicUsize>);

impl Hits {
    /// Record a request, returning the 1-based request number
    pub fn hit(&self) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Route client logs to the test harness; `RUST_LOG` picks the level
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bloom_client=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Serve `router` on an ephemeral port and return its base URL
pub async fn serve(router: Router) -> String {
    init_tracing();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Config with short backoff so retry tests stay fast
pub fn config(base_url: &str) -> ClientConfig {
    ClientConfig::new(base_url)
        .with_timeout(Duration::from_secs(5))
        .with_retry_delay(Duration::from_millis(10))
}

pub async fn api(router: Router) -> Arc<BloomApi> {
    let base_url = serve(router).await;
    Arc::new(BloomApi::from_config(&config(&base_url)).unwrap())
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

/// Minimal backend order in the given status
pub fn order_json(id: i64, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "client_id": 1,
        "recipient_id": 2,
        "client": {"id": 1, "name": "Анна", "phone": "+7 900 123-45-67"},
        "recipient": {"id": 2, "name": null, "phone": "+7 911 000-12-34"},
        "status": status,
        "delivery_date": "2026-10-14T15:00:00",
        "delivery_address": "ул. Ленина, 1",
        "total_price": 3500.0,
        "items": [
            {
                "id": 10,
                "product_id": 5,
                "product": {"id": 5, "name": "Букет роз", "price": 3000.0},
                "quantity": 1,
                "price": 3000.0
            }
        ]
    })
}
