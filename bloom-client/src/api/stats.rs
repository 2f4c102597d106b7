// bloom-client/src/api/stats.rs
// Dashboard endpoint

use shared::models::DashboardStats;

use super::BloomApi;
use crate::error::ClientResult;
use crate::http::HttpClient;

impl<C: HttpClient> BloomApi<C> {
    pub async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        self.http.get("/api/stats/dashboard").await
    }
}
