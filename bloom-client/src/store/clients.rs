// bloom-client/src/store/clients.rs
// Client list store

use std::sync::Arc;

use shared::Page;
use shared::adapter::adapt_client;
use shared::models::{ClientCreate, ClientUpdate};
use shared::request::ClientFilter;
use shared::view::ClientView;
use tokio::sync::RwLock;

use super::{Resource, ResourceState};
use crate::api::BloomApi;
use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};

/// Client list
pub struct ClientsStore<C: HttpClient = NetworkHttpClient> {
    api: Arc<BloomApi<C>>,
    resource: Resource<Page<ClientView>>,
    filter: RwLock<ClientFilter>,
}

impl<C: HttpClient> ClientsStore<C> {
    pub fn new(api: Arc<BloomApi<C>>) -> Self {
        Self {
            api,
            resource: Resource::default(),
            filter: RwLock::new(ClientFilter::default()),
        }
    }

    pub async fn state(&self) -> ResourceState<Page<ClientView>> {
        self.resource.snapshot().await
    }

    pub async fn clients(&self) -> Vec<ClientView> {
        self.resource.data().await.items
    }

    pub async fn refetch(&self) -> ClientResult<()> {
        let filter = self.filter.read().await.clone();
        self.resource
            .load(async {
                let page = self.api.list_clients(&filter).await?;
                Ok(page.map(|client| adapt_client(&client)))
            })
            .await
    }

    pub async fn set_filter(&self, filter: ClientFilter) -> ClientResult<()> {
        *self.filter.write().await = filter;
        self.refetch().await
    }

    /// Substring search on name / phone; blank input clears the search
    pub async fn search(&self, term: &str) -> ClientResult<()> {
        let term = term.trim();
        self.filter.write().await.search = (!term.is_empty()).then(|| term.to_string());
        self.refetch().await
    }

    pub async fn create(&self, payload: ClientCreate) -> ClientResult<ClientView> {
        let client = self
            .resource
            .mutate(
                async {
                    payload.validate()?;
                    self.api.create_client(&payload).await
                },
                || self.refetch(),
            )
            .await?;
        tracing::info!(client_id = client.id, "Client created");
        Ok(adapt_client(&client))
    }

    pub async fn update(&self, id: i64, payload: ClientUpdate) -> ClientResult<ClientView> {
        let client = self
            .resource
            .mutate(
                async {
                    payload.validate()?;
                    self.api.update_client(id, &payload).await
                },
                || self.refetch(),
            )
            .await?;
        Ok(adapt_client(&client))
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.resource
            .mutate(self.api.delete_client(id), || self.refetch())
            .await?;
        tracing::info!(client_id = id, "Client deleted");
        Ok(())
    }
}
