//! Run configuration
//!
//! Everything a watch run depends on, resolved once from the command line
//! and environment and then passed down explicitly.

use crate::cli::CliArgs;
use crate::error::ConfigError;
use crate::github::GITHUB_API_URL;
use crate::report::SelectionPolicy;
use std::path::PathBuf;

/// Configuration for a single watch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Repository in owner/name form
    pub repo: String,
    /// Lookback window in days
    pub window_days: u32,
    /// Keep prereleases in the report
    pub include_prereleases: bool,
    /// Report file path
    pub output: PathBuf,
    /// Bearer token for the API
    pub token: Option<String>,
    /// File receiving the has_releases line
    pub signal_path: Option<PathBuf>,
    /// Base URL of the releases API
    pub api_url: String,
}

impl WatchConfig {
    /// Create a configuration with defaults for everything but the repository
    pub fn new(repo: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            repo: validate_repo(repo)?,
            window_days: 7,
            include_prereleases: false,
            output: PathBuf::from("report.md"),
            token: None,
            signal_path: None,
            api_url: GITHUB_API_URL.to_string(),
        })
    }

    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        Ok(Self {
            repo: validate_repo(&args.repo)?,
            window_days: args.days,
            include_prereleases: args.include_prereleases,
            output: args.output.clone(),
            token: args.token.clone().filter(|t| !t.is_empty()),
            signal_path: args.github_output.clone(),
            api_url: args.api_url.clone(),
        })
    }

    /// Set the lookback window
    pub fn with_window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    /// Set whether prereleases are kept
    pub fn with_include_prereleases(mut self, include: bool) -> Self {
        self.include_prereleases = include;
        self
    }

    /// Set the report path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the signal file path
    pub fn with_signal_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.signal_path = Some(path.into());
        self
    }

    /// Set the API base URL
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = url.to_string();
        self
    }

    /// Release selection policy for this run
    pub fn selection_policy(&self) -> SelectionPolicy {
        SelectionPolicy::new(self.window_days, self.include_prereleases)
    }
}

/// Check that a repository identifier is exactly `owner/name`
fn validate_repo(value: &str) -> Result<String, ConfigError> {
    let repo = value.trim();
    let mut parts = repo.split('/');
    let valid = matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(owner), Some(name), None)
            if !owner.is_empty()
                && !name.is_empty()
                && !repo.contains(char::is_whitespace)
    );

    if valid {
        Ok(repo.to_string())
    } else {
        Err(ConfigError::InvalidRepository {
            value: value.to_string(),
        })
    }
}
