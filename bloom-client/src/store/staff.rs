// bloom-client/src/store/staff.rs
// Staff store

use std::sync::Arc;

use shared::models::{User, UserRole};
use shared::request::UserFilter;

use super::{Resource, ResourceState};
use crate::api::BloomApi;
use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};

/// Staff list, used to pick executors and couriers
pub struct StaffStore<C: HttpClient = NetworkHttpClient> {
    api: Arc<BloomApi<C>>,
    resource: Resource<Vec<User>>,
}

impl<C: HttpClient> StaffStore<C> {
    pub fn new(api: Arc<BloomApi<C>>) -> Self {
        Self {
            api,
            resource: Resource::default(),
        }
    }

    pub async fn state(&self) -> ResourceState<Vec<User>> {
        self.resource.snapshot().await
    }

    pub async fn refetch(&self) -> ClientResult<()> {
        self.resource
            .load(self.api.list_users(&UserFilter::default()))
            .await
    }

    async fn active_with_role(&self, role: UserRole) -> Vec<User> {
        self.resource
            .data()
            .await
            .into_iter()
            .filter(|user| user.is_active && user.role == role)
            .collect()
    }

    /// Active florists
    pub async fn executors(&self) -> Vec<User> {
        self.active_with_role(UserRole::Florist).await
    }

    pub async fn couriers(&self) -> Vec<User> {
        self.active_with_role(UserRole::Courier).await
    }
}
