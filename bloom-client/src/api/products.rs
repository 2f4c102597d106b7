// bloom-client/src/api/products.rs
// Product and composition endpoints

use serde_json::Value;
use shared::models::{CompositionRow, CompositionRowCreate, Product, ProductCreate, ProductUpdate};
use shared::request::ProductFilter;
use shared::{ListEnvelope, Page};

use super::BloomApi;
use crate::error::ClientResult;
use crate::http::HttpClient;

impl<C: HttpClient> BloomApi<C> {
    pub async fn list_products(&self, filter: &ProductFilter) -> ClientResult<Page<Product>> {
        let envelope: ListEnvelope = self.http.get_query("/api/products", filter).await?;
        Ok(envelope.into_page("products")?)
    }

    pub async fn get_product(&self, id: i64) -> ClientResult<Product> {
        self.http.get(&format!("/api/products/{}", id)).await
    }

    pub async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product> {
        self.http.post("/api/products", payload).await
    }

    pub async fn update_product(&self, id: i64, payload: &ProductUpdate) -> ClientResult<Product> {
        self.http.patch(&format!("/api/products/{}", id), payload).await
    }

    pub async fn delete_product(&self, id: i64) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("/api/products/{}", id)).await?;
        Ok(())
    }

    pub async fn product_composition(&self, id: i64) -> ClientResult<Vec<CompositionRow>> {
        let envelope: ListEnvelope = self
            .http
            .get(&format!("/api/products/{}/composition", id))
            .await?;
        Ok(envelope.into_page("composition")?.items)
    }

    pub async fn add_composition_row(
        &self,
        id: i64,
        payload: &CompositionRowCreate,
    ) -> ClientResult<CompositionRow> {
        self.http
            .post(&format!("/api/products/{}/composition", id), payload)
            .await
    }
}
