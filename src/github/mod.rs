//! Release sources
//!
//! This module provides:
//! - HTTP client foundation for the GitHub REST API
//! - GitHub releases adapter

mod client;
mod releases;

pub use client::HttpClient;
pub use releases::{GitHubReleases, GITHUB_API_URL};

use crate::domain::Release;
use crate::error::NetworkError;
use async_trait::async_trait;

/// Trait for anything that can list a repository's releases
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Get the source name
    fn source_name(&self) -> &'static str;

    /// Fetch the releases of a repository in owner/name form
    async fn fetch_releases(&self, repo: &str) -> Result<Vec<Release>, NetworkError>;
}
