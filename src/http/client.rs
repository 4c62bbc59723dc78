//! Signed HTTP client
//!
//! Thin wrapper over `reqwest` that attaches the OAuth `Authorization`
//! header to every request. Exactly one attempt per call: a transport
//! failure, a non-200 status, or an undecodable body each terminate the
//! whole operation.

use crate::auth::Signer;
use crate::config::Credentials;
use crate::error::{Error, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL joined with endpoint paths
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("flock/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Authenticated API client
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
    signer: Signer,
}

impl ApiClient {
    /// Create a client with default configuration
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(credentials, ApiClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: ApiClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            config,
            signer: Signer::new(credentials),
        }
    }

    /// Perform one GET and decode the JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let (url, body) = self.get_body(path).await?;
        serde_json::from_slice(&body).map_err(|e| Error::decode(url, e))
    }

    /// Perform one GET and return the raw response body.
    pub async fn get_raw(&self, path: &str) -> Result<String> {
        let (_, body) = self.get_body(path).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Shared fetch path: sign, send, enforce the strict 200 contract, and
    /// capture the body into an owned buffer exactly once.
    async fn get_body(&self, path: &str) -> Result<(String, Vec<u8>)> {
        let url = self.build_url(path);
        debug!("GET {url}");

        let authorization = self.signer.authorization("GET", &url)?;
        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(|e| Error::request(url.as_str(), e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::request(url.as_str(), e))?
            .to_vec();

        if status != StatusCode::OK {
            return Err(Error::http_status(
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status"),
                String::from_utf8_lossy(&body).into_owned(),
            ));
        }

        Ok((url, body))
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
