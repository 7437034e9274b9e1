//! release-watch - GitHub release digest library
//!
//! This library provides the pipeline behind the `release-watch` binary:
//! - Fetching a repository's releases from the GitHub REST API
//! - Selecting releases published inside a lookback window
//! - Extracting and heuristically classifying changelog bullets
//! - Rendering a markdown report and a has_releases signal

pub mod changelog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod github;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod report;
pub mod timestamp;
