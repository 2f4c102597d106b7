// bloom-client/src/store/products.rs
// Product catalog store

use std::sync::Arc;

use shared::Page;
use shared::adapter::{adapt_product, adapt_product_with_composition, resolve_composition};
use shared::models::{CompositionRowCreate, ProductCreate, ProductUpdate};
use shared::request::{InventoryFilter, Pagination, ProductFilter};
use shared::view::{CompositionLine, ProductView};
use tokio::sync::RwLock;

use super::{Resource, ResourceState};
use crate::api::BloomApi;
use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};

/// Page size used when loading stock to resolve compositions
const STOCK_LOOKUP_LIMIT: u32 = 500;

/// Product catalog
pub struct ProductsStore<C: HttpClient = NetworkHttpClient> {
    api: Arc<BloomApi<C>>,
    resource: Resource<Page<ProductView>>,
    filter: RwLock<ProductFilter>,
}

impl<C: HttpClient> ProductsStore<C> {
    pub fn new(api: Arc<BloomApi<C>>) -> Self {
        Self {
            api,
            resource: Resource::default(),
            filter: RwLock::new(ProductFilter::default()),
        }
    }

    pub async fn state(&self) -> ResourceState<Page<ProductView>> {
        self.resource.snapshot().await
    }

    pub async fn products(&self) -> Vec<ProductView> {
        self.resource.data().await.items
    }

    pub async fn refetch(&self) -> ClientResult<()> {
        let filter = self.filter.read().await.clone();
        self.resource
            .load(async {
                let page = self.api.list_products(&filter).await?;
                Ok(page.map(|product| adapt_product(&product)))
            })
            .await
    }

    pub async fn set_filter(&self, filter: ProductFilter) -> ClientResult<()> {
        *self.filter.write().await = filter;
        self.refetch().await
    }

    pub async fn create(&self, payload: ProductCreate) -> ClientResult<ProductView> {
        let product = self
            .resource
            .mutate(
                async {
                    payload.validate()?;
                    self.api.create_product(&payload).await
                },
                || self.refetch(),
            )
            .await?;
        tracing::info!(product_id = product.id, "Product created");
        Ok(adapt_product(&product))
    }

    pub async fn update(&self, id: i64, payload: ProductUpdate) -> ClientResult<ProductView> {
        let product = self
            .resource
            .mutate(
                async {
                    payload.validate()?;
                    self.api.update_product(id, &payload).await
                },
                || self.refetch(),
            )
            .await?;
        Ok(adapt_product(&product))
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.resource
            .mutate(self.api.delete_product(id), || self.refetch())
            .await?;
        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }

    /// Composition rows resolved against current stock
    pub async fn composition(&self, id: i64) -> ClientResult<Vec<CompositionLine>> {
        let rows = self.api.product_composition(id).await?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let stock_filter = InventoryFilter {
            pagination: Pagination {
                limit: STOCK_LOOKUP_LIMIT,
                skip: 0,
            },
            ..Default::default()
        };
        let inventory = self.api.list_inventory(&stock_filter).await?.items;
        Ok(resolve_composition(&rows, &inventory))
    }

    /// Single product with its composition string filled in, plus the
    /// resolved rows
    pub async fn detail(&self, id: i64) -> ClientResult<(ProductView, Vec<CompositionLine>)> {
        let product = self.api.get_product(id).await?;
        let lines = self.composition(id).await?;
        Ok((adapt_product_with_composition(&product, &lines), lines))
    }

    pub async fn add_composition_row(&self, id: i64, payload: CompositionRowCreate) -> ClientResult<()> {
        self.resource
            .track(self.api.add_composition_row(id, &payload).await)
            .await?;
        Ok(())
    }
}
