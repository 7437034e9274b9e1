//! Watch orchestrator for coordinating a single run
//!
//! This module provides:
//! - Workflow coordination: fetch → select → analyze → render → write → signal
//! - A pure report builder driven by an injected clock
//!
//! Any failure aborts the run; nothing is retried.

use crate::changelog::analyze;
use crate::config::WatchConfig;
use crate::domain::{Release, ReleaseSummary, RunSummary};
use crate::error::{AppError, FormatError, NetworkError};
use crate::github::{GitHubReleases, HttpClient, ReleaseSource};
use crate::output::{append_signal, write_report};
use crate::progress::Progress;
use crate::report::{format_release, render_report, select_releases, ReportHeader};
use chrono::{DateTime, Utc};
use tracing::info;

/// Orchestrator for coordinating the watch workflow
pub struct Orchestrator {
    /// Run configuration
    config: WatchConfig,
    /// Where releases come from
    source: Box<dyn ReleaseSource>,
}

/// Result of a watch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchOutcome {
    /// Rendered markdown document
    pub report: String,
    /// What went into the report
    pub summary: RunSummary,
}

impl WatchOutcome {
    /// Returns true if the report lists at least one release
    pub fn has_releases(&self) -> bool {
        self.summary.has_releases()
    }
}

impl Orchestrator {
    /// Create a new orchestrator talking to the configured GitHub API
    pub fn new(config: WatchConfig) -> Result<Self, NetworkError> {
        let client = HttpClient::with_token(config.token.as_deref())?;
        let source = GitHubReleases::with_api_url(client, &config.api_url);

        Ok(Self::with_source(config, Box::new(source)))
    }

    /// Create an orchestrator with a custom release source (for testing)
    pub fn with_source(config: WatchConfig, source: Box<dyn ReleaseSource>) -> Self {
        Self { config, source }
    }

    /// Run the watch workflow against the current time
    pub async fn run(&self, show_progress: bool) -> Result<WatchOutcome, AppError> {
        self.run_at(Utc::now(), show_progress).await
    }

    /// Run the watch workflow as of `now`
    pub async fn run_at(
        &self,
        now: DateTime<Utc>,
        show_progress: bool,
    ) -> Result<WatchOutcome, AppError> {
        let mut progress = Progress::new(show_progress);

        progress.spinner(&format!(
            "Fetching {} releases for {}...",
            self.source.source_name(),
            self.config.repo
        ));
        let fetched = self.source.fetch_releases(&self.config.repo).await;
        progress.finish_and_clear();

        let outcome = build_report(fetched?, now, &self.config)?;

        write_report(&self.config.output, &outcome.report)?;
        info!(
            path = %self.config.output.display(),
            releases = outcome.summary.releases.len(),
            "report written"
        );

        if let Some(signal_path) = &self.config.signal_path {
            append_signal(signal_path, outcome.has_releases())?;
        }

        Ok(outcome)
    }
}

/// Build the report document for a fetched release list
///
/// Pure apart from logging: the same releases, clock and configuration
/// always produce the same document.
pub fn build_report(
    releases: Vec<Release>,
    now: DateTime<Utc>,
    config: &WatchConfig,
) -> Result<WatchOutcome, FormatError> {
    let header = ReportHeader::new(&config.repo, now, config.window_days);
    let mut summary = RunSummary::new(&config.repo, config.window_days, &config.output);

    let selected = select_releases(releases, now, config.selection_policy())?;
    info!(repo = %config.repo, selected = selected.len(), "releases in window");

    let mut sections = Vec::with_capacity(selected.len());
    for entry in &selected {
        let published = entry.published.date_naive();
        let notes = analyze(entry.release.notes());

        sections.push(format_release(&entry.release, published, &notes));
        summary.add_release(ReleaseSummary::new(
            entry.release.tag(),
            published,
            entry.release.prerelease,
            &notes.classification,
        ));
    }

    Ok(WatchOutcome {
        report: render_report(&header, &sections),
        summary,
    })
}
