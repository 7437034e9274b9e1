//! Release-notes analysis
//!
//! This module provides:
//! - Bullet and compare-link extraction from markdown notes
//! - Heuristic keyword classification of bullets

mod classify;
mod extract;

pub use classify::{classify, classify_item, BREAKING_KEYWORDS, FEATURE_KEYWORDS};
pub use extract::{extract_compare_url, extract_items};

use crate::domain::Classification;

/// Everything the report needs from one release's notes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzedNotes {
    /// Classified bullet items
    pub classification: Classification,
    /// "Full Changelog" compare link, if any
    pub compare_url: Option<String>,
}

/// Extract and classify release notes in one pass
pub fn analyze(body: &str) -> AnalyzedNotes {
    AnalyzedNotes {
        classification: classify(extract_items(body)),
        compare_url: extract_compare_url(body),
    }
}
