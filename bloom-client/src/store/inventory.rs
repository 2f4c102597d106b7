// bloom-client/src/store/inventory.rs
// Stock store

use std::sync::Arc;

use shared::Page;
use shared::adapter::adapt_inventory;
use shared::models::{InventoryAdjust, InventoryCreate, InventoryTransaction, InventoryUpdate};
use shared::request::InventoryFilter;
use shared::view::InventoryView;
use tokio::sync::RwLock;

use super::{Resource, ResourceState};
use crate::api::BloomApi;
use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};

/// Stock list
pub struct InventoryStore<C: HttpClient = NetworkHttpClient> {
    api: Arc<BloomApi<C>>,
    resource: Resource<Page<InventoryView>>,
    filter: RwLock<InventoryFilter>,
}

impl<C: HttpClient> InventoryStore<C> {
    pub fn new(api: Arc<BloomApi<C>>) -> Self {
        Self {
            api,
            resource: Resource::default(),
            filter: RwLock::new(InventoryFilter::default()),
        }
    }

    pub async fn state(&self) -> ResourceState<Page<InventoryView>> {
        self.resource.snapshot().await
    }

    pub async fn items(&self) -> Vec<InventoryView> {
        self.resource.data().await.items
    }

    /// Loaded items below their minimum quantity
    pub async fn low_stock(&self) -> Vec<InventoryView> {
        self.items()
            .await
            .into_iter()
            .filter(|item| item.is_low_stock)
            .collect()
    }

    pub async fn refetch(&self) -> ClientResult<()> {
        let filter = self.filter.read().await.clone();
        self.resource
            .load(async {
                let page = self.api.list_inventory(&filter).await?;
                Ok(page.map(|item| adapt_inventory(&item)))
            })
            .await
    }

    pub async fn set_filter(&self, filter: InventoryFilter) -> ClientResult<()> {
        *self.filter.write().await = filter;
        self.refetch().await
    }

    pub async fn create(&self, payload: InventoryCreate) -> ClientResult<InventoryView> {
        let item = self
            .resource
            .mutate(
                async {
                    payload.validate()?;
                    self.api.create_inventory_item(&payload).await
                },
                || self.refetch(),
            )
            .await?;
        Ok(adapt_inventory(&item))
    }

    pub async fn update(&self, id: i64, payload: InventoryUpdate) -> ClientResult<InventoryView> {
        let item = self
            .resource
            .mutate(self.api.update_inventory_item(id, &payload), || self.refetch())
            .await?;
        Ok(adapt_inventory(&item))
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.resource
            .mutate(self.api.delete_inventory_item(id), || self.refetch())
            .await
    }

    /// Write-off or adjustment; the backend records the transaction
    pub async fn adjust(&self, id: i64, payload: InventoryAdjust) -> ClientResult<InventoryView> {
        let item = self
            .resource
            .mutate(
                async {
                    payload.validate()?;
                    self.api.adjust_inventory(id, &payload).await
                },
                || self.refetch(),
            )
            .await?;
        tracing::info!(
            item_id = id,
            quantity = %payload.quantity,
            kind = ?payload.kind,
            "Inventory adjusted"
        );
        Ok(adapt_inventory(&item))
    }

    /// Audit trail for one item, newest as returned by the backend
    pub async fn transactions(&self, id: i64) -> ClientResult<Vec<InventoryTransaction>> {
        self.resource
            .track(self.api.inventory_transactions(id).await)
            .await
    }
}
