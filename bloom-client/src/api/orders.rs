// bloom-client/src/api/orders.rs
// Order endpoints

use serde_json::Value;
use shared::models::{Order, OrderCreate, OrderHistoryEntry, OrderStatusUpdate, OrderUpdate};
use shared::request::OrderFilter;
use shared::status::BackendStatus;
use shared::{ListEnvelope, Page};

use super::BloomApi;
use crate::error::ClientResult;
use crate::http::HttpClient;

impl<C: HttpClient> BloomApi<C> {
    pub async fn list_orders(&self, filter: &OrderFilter) -> ClientResult<Page<Order>> {
        let envelope: ListEnvelope = self.http.get_query("/api/orders", filter).await?;
        Ok(envelope.into_page("orders")?)
    }

    pub async fn get_order(&self, id: i64) -> ClientResult<Order> {
        self.http.get(&format!("/api/orders/{}", id)).await
    }

    pub async fn create_order(&self, payload: &OrderCreate) -> ClientResult<Order> {
        self.http.post("/api/orders", payload).await
    }

    pub async fn update_order(&self, id: i64, payload: &OrderUpdate) -> ClientResult<Order> {
        self.http.patch(&format!("/api/orders/{}", id), payload).await
    }

    pub async fn update_order_status(&self, id: i64, status: BackendStatus) -> ClientResult<Order> {
        let payload = OrderStatusUpdate {
            status: status.as_str().to_string(),
        };
        self.http
            .patch(&format!("/api/orders/{}/status", id), &payload)
            .await
    }

    pub async fn delete_order(&self, id: i64) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("/api/orders/{}", id)).await?;
        Ok(())
    }

    pub async fn order_history(&self, id: i64) -> ClientResult<Vec<OrderHistoryEntry>> {
        let envelope: ListEnvelope = self.http.get(&format!("/api/orders/{}/history", id)).await?;
        Ok(envelope.into_page("history")?.items)
    }
}
