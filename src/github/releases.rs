//! GitHub releases API adapter
//!
//! Lists the releases of one repository.
//! API endpoint: {api_url}/repos/{owner}/{name}/releases?per_page=100
//!
//! Only the first page is requested.

use crate::domain::Release;
use crate::error::NetworkError;
use crate::github::{HttpClient, ReleaseSource};
use async_trait::async_trait;
use tracing::info;

/// Public GitHub API base URL
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Releases requested per call (API maximum for one page)
const PER_PAGE: u32 = 100;

/// Releases source backed by the GitHub REST API
pub struct GitHubReleases {
    client: HttpClient,
    api_url: String,
}

impl GitHubReleases {
    /// Create a new adapter against the public API
    pub fn new(client: HttpClient) -> Self {
        Self::with_api_url(client, GITHUB_API_URL)
    }

    /// Create a new adapter against a custom API base URL
    pub fn with_api_url(client: HttpClient, api_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the releases URL for a repository
    fn build_url(&self, repo: &str) -> String {
        format!(
            "{}/repos/{}/releases?per_page={}",
            self.api_url, repo, PER_PAGE
        )
    }
}

#[async_trait]
impl ReleaseSource for GitHubReleases {
    fn source_name(&self) -> &'static str {
        "GitHub"
    }

    async fn fetch_releases(&self, repo: &str) -> Result<Vec<Release>, NetworkError> {
        let url = self.build_url(repo);
        let releases: Vec<Release> = self.client.get_json(&url, repo).await?;
        info!(repo, count = releases.len(), "fetched releases");
        Ok(releases)
    }
}
