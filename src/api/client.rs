//! HTTP transport for the mbmanager REST API.
//!
//! `ApiClient` owns the reqwest client, the API base URL and the shared
//! bearer token. Every resource operation funnels through `dispatch`,
//! which attaches the token, maps non-2xx statuses to `ApiError` and
//! enforces the forced-logout policy on 401 responses.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::{ApiError, Endpoint};

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the mbmanager service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection
/// pooling, and the token cell is shared between clones.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    /// Shared bearer token. Single writer (the session manager), many
    /// readers (every outbound request). Updates are whole-value
    /// replacements, so readers see either the old or the new token.
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Create a new API client against the given base URL,
    /// e.g. `http://localhost:8080/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a non-empty token is held.
    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_deref()
            .is_some_and(|t| !t.is_empty())
    }

    /// Replace the bearer token attached to subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    /// Drop the bearer token; subsequent requests go out unauthenticated.
    pub fn clear_token(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn builder(&self, endpoint: &Endpoint) -> RequestBuilder {
        let mut builder = self
            .http
            .request(endpoint.method.clone(), self.url(&endpoint.path));
        if let Some(token) = self.token() {
            if !token.is_empty() {
                builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
            }
        }
        builder
    }

    /// Send a planned request and check the response status.
    ///
    /// A 401 clears the shared token so the session predicate flips to
    /// unauthenticated immediately; the error is still returned to the
    /// caller unchanged.
    async fn dispatch(&self, endpoint: &Endpoint, builder: RequestBuilder) -> Result<Response> {
        debug!(%endpoint, "dispatching request");
        let response = builder
            .send()
            .await
            .with_context(|| format!("Failed to send {}", endpoint))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status.as_u16() == 401 && self.has_token() {
            warn!(%endpoint, "401 response, dropping stored token");
            self.clear_token();
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body).into())
    }

    /// Dispatch without a body and decode the JSON response.
    pub(crate) async fn send<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let response = self.dispatch(&endpoint, self.builder(&endpoint)).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", endpoint))
    }

    /// Dispatch with a JSON body and decode the JSON response.
    pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<T> {
        let builder = self.builder(&endpoint).json(body);
        let response = self.dispatch(&endpoint, builder).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", endpoint))
    }

    /// Dispatch with URL query parameters and decode the JSON response.
    pub(crate) async fn send_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        query: &Q,
    ) -> Result<T> {
        let builder = self.builder(&endpoint).query(query);
        let response = self.dispatch(&endpoint, builder).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", endpoint))
    }

    /// Dispatch without a body and return the raw response bytes.
    /// Used for backup artifact downloads.
    pub(crate) async fn send_bytes(&self, endpoint: Endpoint) -> Result<Vec<u8>> {
        let response = self.dispatch(&endpoint, self.builder(&endpoint)).await?;
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body from {}", endpoint))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_cell_is_shared_between_clones() {
        let client = ApiClient::new("http://localhost:8080/api/v1").unwrap();
        let clone = client.clone();

        assert!(!client.has_token());
        clone.set_token("T1");
        assert_eq!(client.token().as_deref(), Some("T1"));

        client.clear_token();
        assert!(!clone.has_token());
    }

    #[test]
    fn empty_token_does_not_count_as_authenticated() {
        let client = ApiClient::new("http://localhost:8080/api/v1").unwrap();
        client.set_token("");
        assert!(!client.has_token());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8080/api/v1/").unwrap();
        assert_eq!(client.url("/hosts"), "http://localhost:8080/api/v1/hosts");
    }

    #[test]
    fn concurrent_readers_see_whole_values() {
        use std::thread;

        let client = ApiClient::new("http://localhost:8080/api/v1").unwrap();
        let writer = client.clone();

        let w = thread::spawn(move || {
            for i in 0..1000 {
                writer.set_token(format!("token-{}", i));
            }
        });

        for _ in 0..1000 {
            if let Some(token) = client.token() {
                assert!(token.starts_with("token-"));
            }
        }
        w.join().unwrap();
    }
}
