//! Async REST client for the Pokemon API.
//!
//! [`Client`] wraps a reqwest client pointed at a configured base URL and
//! exposes one method per endpoint, grouped by service area (pokemon,
//! moves, generations, search, generated content). Responses are decoded
//! through `rotom-model` at the boundary.
//!
//! This layer performs no retries and keeps no cache: any transport error,
//! non-2xx status, or decode failure surfaces immediately as a
//! [`FetchError`], and retry policy belongs to the caller.
//!
//! # Example
//!
//! ```ignore
//! use rotom_client::Client;
//!
//! let client = Client::new("http://localhost:8080/api")?;
//! let bulbasaur = client.pokemon("bulbasaur").await?;
//! println!("#{} {}", bulbasaur.id, bulbasaur.name);
//! ```

mod content;
mod error;
mod generation;
mod list;
mod moves;
mod pokemon;
mod search;
mod view;

use std::time::Duration;

use serde::de::DeserializeOwned;

pub use content::{ContentKind, GenerateOptions, SimilarQuery, SimilarityStrategy};
pub use error::FetchError;
pub use list::ListAccumulator;
pub use view::{ViewGuard, ViewToken};

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration, loaded from the environment or built by hand.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are joined to.
    pub base_url: String,
    /// Optional bearer token sent with every request.
    pub api_key: Option<String>,
    /// Transport-level request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// - `ROTOM_API_URL` - base URL (default: `http://localhost:8080/api`)
    /// - `ROTOM_API_KEY` - bearer token, omitted when unset
    /// - `ROTOM_TIMEOUT_SECS` - request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ROTOM_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = std::env::var("ROTOM_API_KEY").ok();
        let timeout = std::env::var("ROTOM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            base_url,
            api_key,
            timeout,
        }
    }
}

/// Pokemon API client.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl Client {
    /// Create a client for the given base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_config(ClientConfig {
            base_url: base_url.into(),
            ..ClientConfig::default()
        })
    }

    /// Create a client from a full configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "request failed");
            return Err(FetchError::Status { status, url });
        }

        let body = response.text().await?;
        Ok(rotom_model::decode(&body)?)
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, FetchError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let mut request = self.http.post(&url).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "request failed");
            return Err(FetchError::Status { status, url });
        }

        let text = response.text().await?;
        Ok(rotom_model::decode(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = Client::new("http://localhost:8080/api/").unwrap();
        assert_eq!(
            client.url("pokemon/bulbasaur"),
            "http://localhost:8080/api/pokemon/bulbasaur"
        );
        assert_eq!(
            client.url("/pokemon/list"),
            "http://localhost:8080/api/pokemon/list"
        );
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key, None);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
