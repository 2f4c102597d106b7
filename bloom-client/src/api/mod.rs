//! Typed endpoint facade
//!
//! One method per backend endpoint. Methods return wire records; adapting
//! them for display is left to the stores.

mod clients;
mod inventory;
mod orders;
mod products;
mod staff;
mod stats;

use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::ClientConfig;

/// Typed access to the CRM REST API
#[derive(Debug, Clone)]
pub struct BloomApi<C: HttpClient = NetworkHttpClient> {
    http: C,
}

impl BloomApi<NetworkHttpClient> {
    /// Build the API over a network client from configuration
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config.build_http_client()?))
    }
}

impl<C: HttpClient> BloomApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// The underlying HTTP client
    pub fn http(&self) -> &C {
        &self.http
    }
}
