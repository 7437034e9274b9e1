//! Core domain models for release-watch
//!
//! This module contains the fundamental types used throughout the application:
//! - Release records from the releases API
//! - Changelog categories and classification results
//! - Run summary structures

mod classification;
mod release;
mod summary;

pub use classification::{Category, Classification};
pub use release::Release;
pub use summary::{ReleaseSummary, RunSummary};
