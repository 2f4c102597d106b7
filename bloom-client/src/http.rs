//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ErrorBody;

use crate::{ClientConfig, ClientError, ClientResult, RetryPolicy};

/// HTTP client trait
///
/// Paths are relative to the configured base URL (`/api/orders`).
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn get_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
}

/// Network HTTP client with timeout, bearer auth and retry/backoff
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    retry: RetryPolicy,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base_url is required".into()));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            retry: config.retry,
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send a request built by `build`, retrying per the policy.
    ///
    /// `build` is called once per attempt. 4xx responses and decode errors
    /// are returned immediately; the last error is returned once attempts
    /// are exhausted.
    async fn execute<T, F>(&self, method: Method, path: &str, build: F) -> ClientResult<T>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder + Send + Sync,
    {
        let max_attempts = self.retry.attempts_for(&method);
        let mut attempt = 0;
        loop {
            attempt += 1;
            tracing::debug!(%method, path, attempt, "Sending request");
            let error = {
                let result = match self.authorize(build()).send().await {
                    Ok(response) => Self::handle_response(response).await,
                    Err(e) => Err(ClientError::from(e)),
                };
                match result {
                    Ok(value) => return Ok(value),
                    Err(e) => e,
                }
            };
            if !error.is_retryable() || attempt >= max_attempts {
                tracing::debug!(%method, path, attempt, error = %error, "Request failed");
                return Err(error);
            }
            let delay = self.retry.delay_after(attempt);
            tracing::warn!(
                %method,
                path,
                attempt,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "Request failed, retrying"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            // Unreadable bodies fall back to the status text alone
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                detail: ErrorBody::parse(&text).map(|body| body.detail.message()),
            });
        }

        let bytes = response.bytes().await?;
        if status == StatusCode::NO_CONTENT || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(serde_json::Value::Object(
                serde_json::Map::new(),
            ))?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        self.execute(Method::GET, path, || self.client.get(&url)).await
    }

    async fn get_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let url = self.url(path);
        self.execute(Method::GET, path, || self.client.get(&url).query(query))
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        self.execute(Method::POST, path, || self.client.post(&url).json(body))
            .await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        self.execute(Method::PUT, path, || self.client.put(&url).json(body))
            .await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        self.execute(Method::PATCH, path, || self.client.patch(&url).json(body))
            .await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        self.execute(Method::DELETE, path, || self.client.delete(&url))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client = ClientConfig::new("http://localhost:8000/")
            .build_http_client()
            .unwrap();
        assert_eq!(client.url("/api/orders"), "http://localhost:8000/api/orders");
        assert_eq!(client.url("api/orders"), "http://localhost:8000/api/orders");
    }

    #[test]
    fn empty_base_url_is_rejected() {
        assert!(matches!(
            ClientConfig::new("").build_http_client(),
            Err(ClientError::Config(_))
        ));
    }
}
