// bloom-client/src/store/dashboard.rs
// Dashboard store

use std::sync::Arc;

use shared::models::DashboardStats;

use super::{Resource, ResourceState};
use crate::api::BloomApi;
use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};

/// Dashboard counters, read-only
pub struct DashboardStore<C: HttpClient = NetworkHttpClient> {
    api: Arc<BloomApi<C>>,
    resource: Resource<Option<DashboardStats>>,
}

impl<C: HttpClient> DashboardStore<C> {
    pub fn new(api: Arc<BloomApi<C>>) -> Self {
        Self {
            api,
            resource: Resource::default(),
        }
    }

    pub async fn state(&self) -> ResourceState<Option<DashboardStats>> {
        self.resource.snapshot().await
    }

    pub async fn refetch(&self) -> ClientResult<()> {
        self.resource
            .load(async { self.api.dashboard_stats().await.map(Some) })
            .await
    }
}
