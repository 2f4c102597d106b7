// bloom-client/src/api/inventory.rs
// Stock, adjustment and transaction endpoints

use serde_json::Value;
use shared::models::{
    InventoryAdjust, InventoryCreate, InventoryItem, InventoryTransaction, InventoryUpdate,
};
use shared::request::InventoryFilter;
use shared::{ListEnvelope, Page};

use super::BloomApi;
use crate::error::ClientResult;
use crate::http::HttpClient;

impl<C: HttpClient> BloomApi<C> {
    pub async fn list_inventory(&self, filter: &InventoryFilter) -> ClientResult<Page<InventoryItem>> {
        let envelope: ListEnvelope = self.http.get_query("/api/inventory", filter).await?;
        Ok(envelope.into_page("items")?)
    }

    pub async fn get_inventory_item(&self, id: i64) -> ClientResult<InventoryItem> {
        self.http.get(&format!("/api/inventory/{}", id)).await
    }

    pub async fn create_inventory_item(&self, payload: &InventoryCreate) -> ClientResult<InventoryItem> {
        self.http.post("/api/inventory", payload).await
    }

    pub async fn update_inventory_item(
        &self,
        id: i64,
        payload: &InventoryUpdate,
    ) -> ClientResult<InventoryItem> {
        self.http.patch(&format!("/api/inventory/{}", id), payload).await
    }

    pub async fn delete_inventory_item(&self, id: i64) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("/api/inventory/{}", id)).await?;
        Ok(())
    }

    /// Record a write-off or adjustment; the backend logs the transaction.
    pub async fn adjust_inventory(
        &self,
        id: i64,
        payload: &InventoryAdjust,
    ) -> ClientResult<InventoryItem> {
        self.http
            .post(&format!("/api/inventory/{}/adjust", id), payload)
            .await
    }

    pub async fn inventory_transactions(&self, id: i64) -> ClientResult<Vec<InventoryTransaction>> {
        let envelope: ListEnvelope = self
            .http
            .get(&format!("/api/inventory/{}/transactions", id))
            .await?;
        Ok(envelope.into_page("transactions")?.items)
    }
}
