// bloom-client/src/api/clients.rs
// Client endpoints

use serde_json::Value;
use shared::models::{Client, ClientCreate, ClientUpdate};
use shared::request::ClientFilter;
use shared::{ListEnvelope, Page};

use super::BloomApi;
use crate::error::ClientResult;
use crate::http::HttpClient;

impl<C: HttpClient> BloomApi<C> {
    pub async fn list_clients(&self, filter: &ClientFilter) -> ClientResult<Page<Client>> {
        let envelope: ListEnvelope = self.http.get_query("/api/clients", filter).await?;
        Ok(envelope.into_page("clients")?)
    }

    pub async fn get_client(&self, id: i64) -> ClientResult<Client> {
        self.http.get(&format!("/api/clients/{}", id)).await
    }

    pub async fn create_client(&self, payload: &ClientCreate) -> ClientResult<Client> {
        self.http.post("/api/clients", payload).await
    }

    pub async fn update_client(&self, id: i64, payload: &ClientUpdate) -> ClientResult<Client> {
        self.http.patch(&format!("/api/clients/{}", id), payload).await
    }

    pub async fn delete_client(&self, id: i64) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("/api/clients/{}", id)).await?;
        Ok(())
    }
}
