//! Run summary types
//!
//! Provides structures describing what a single watch run put into the report.

use super::Classification;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

/// Per-release entry of the run summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseSummary {
    /// Tag name
    pub tag: String,
    /// Calendar date of publication (UTC)
    pub published: NaiveDate,
    /// Whether this is a prerelease
    pub prerelease: bool,
    /// Number of potentially breaking items
    pub breaking: usize,
    /// Number of feature items
    pub features: usize,
    /// Number of other items
    pub other: usize,
}

impl ReleaseSummary {
    /// Creates a new ReleaseSummary from a classified release
    pub fn new(
        tag: impl Into<String>,
        published: NaiveDate,
        prerelease: bool,
        classification: &Classification,
    ) -> Self {
        Self {
            tag: tag.into(),
            published,
            prerelease,
            breaking: classification.breaking.len(),
            features: classification.features.len(),
            other: classification.other.len(),
        }
    }

    /// Returns true if any item looked breaking
    pub fn has_breaking(&self) -> bool {
        self.breaking > 0
    }
}

/// Overall summary of a watch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Repository in owner/name form
    pub repo: String,
    /// Lookback window in days
    pub window_days: u32,
    /// Path the report was written to
    pub output: PathBuf,
    /// Releases included in the report, newest first
    pub releases: Vec<ReleaseSummary>,
}

impl RunSummary {
    /// Creates a new empty RunSummary
    pub fn new(repo: impl Into<String>, window_days: u32, output: impl Into<PathBuf>) -> Self {
        Self {
            repo: repo.into(),
            window_days,
            output: output.into(),
            releases: Vec::new(),
        }
    }

    /// Adds a release entry
    pub fn add_release(&mut self, release: ReleaseSummary) {
        self.releases.push(release);
    }

    /// Returns true if the report contains at least one release
    pub fn has_releases(&self) -> bool {
        !self.releases.is_empty()
    }

    /// Returns the number of releases with potentially breaking items
    pub fn breaking_release_count(&self) -> usize {
        self.releases.iter().filter(|r| r.has_breaking()).count()
    }
}
