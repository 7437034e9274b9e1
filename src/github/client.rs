//! HTTP client for the GitHub REST API
//!
//! This module provides a thin reqwest wrapper with:
//! - Configurable timeout and User-Agent
//! - GitHub media type and optional bearer token on every request
//! - Status checking that surfaces the API's error message
//!
//! A failed request is reported once; there is no retry.

use crate::error::NetworkError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("release-watch/", env!("CARGO_PKG_VERSION"));

/// GitHub REST media type
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// GitHub error payload
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// HTTP client wrapper for GitHub API calls
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new unauthenticated HTTP client with default settings
    pub fn new() -> Result<Self, NetworkError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, None)
    }

    /// Create a new HTTP client, optionally sending a bearer token
    pub fn with_token(token: Option<&str>) -> Result<Self, NetworkError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, token)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(
        timeout: Duration,
        user_agent: &str,
        token: Option<&str>,
    ) -> Result<Self, NetworkError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                NetworkError::ClientBuild {
                    message: format!("invalid token: {}", e),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| NetworkError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request and parse the JSON response
    ///
    /// `context` names what is being fetched and is carried in errors.
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<T, NetworkError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| NetworkError::request(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.message)
                .unwrap_or(text);
            return Err(NetworkError::http_status(context, status.as_u16(), message));
        }

        let text = response
            .text()
            .await
            .map_err(|e| NetworkError::request(url, e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| NetworkError::invalid_response(context, e.to_string()))
    }
}
