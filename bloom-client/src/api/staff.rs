// bloom-client/src/api/staff.rs
// Staff endpoints

use shared::ListEnvelope;
use shared::models::User;
use shared::request::UserFilter;

use super::BloomApi;
use crate::error::ClientResult;
use crate::http::HttpClient;

impl<C: HttpClient> BloomApi<C> {
    pub async fn list_users(&self, filter: &UserFilter) -> ClientResult<Vec<User>> {
        let envelope: ListEnvelope = self.http.get_query("/api/users", filter).await?;
        Ok(envelope.into_page("users")?.items)
    }
}
