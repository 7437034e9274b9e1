//! Markdown rendering of the release report
//!
//! This module provides:
//! - The report header block
//! - One section per release with classified changelog items
//! - Assembly of header and sections into the final document

use crate::changelog::AnalyzedNotes;
use crate::domain::{Category, Release};
use chrono::{DateTime, NaiveDate, Utc};

/// Line written when no release falls inside the window
pub const EMPTY_WINDOW_LINE: &str = "No releases published in this window.";

/// Placeholder bullet for an empty mandatory subsection
const NONE_DETECTED: &str = "- None detected from release notes";

/// Separator between release sections
const SECTION_SEPARATOR: &str = "\n---\n";

/// Header metadata of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    /// Repository in owner/name form
    pub repo: String,
    /// Instant the check ran
    pub checked_at: DateTime<Utc>,
    /// Lookback window in days
    pub window_days: u32,
}

impl ReportHeader {
    /// Creates a new ReportHeader
    pub fn new(repo: impl Into<String>, checked_at: DateTime<Utc>, window_days: u32) -> Self {
        Self {
            repo: repo.into(),
            checked_at,
            window_days,
        }
    }

    /// Header lines, ending with a blank spacer line
    fn lines(&self) -> Vec<String> {
        vec![
            "# Release Watch".to_string(),
            format!("Repo: {}", self.repo),
            format!("Checked: {} (UTC)", self.checked_at.date_naive()),
            format!("Window: last {} days", self.window_days),
            String::new(),
        ]
    }
}

/// Render one release as a markdown section
pub fn format_release(release: &Release, published: NaiveDate, notes: &AnalyzedNotes) -> String {
    let mut lines = vec![format!(
        "## {} ({}, {})",
        release.tag(),
        published,
        release.kind()
    )];

    if let Some(url) = release.html_url.as_deref().filter(|u| !u.is_empty()) {
        lines.push(format!("Source: [Release]({})", url));
    }
    if let Some(url) = &notes.compare_url {
        lines.push(format!("Full Changelog: [Compare]({})", url));
    }

    for category in [Category::Breaking, Category::Feature] {
        lines.push(String::new());
        lines.push(format!("### {}", category.display_name()));
        push_items(&mut lines, notes.classification.items(category), true);
    }

    let other = notes.classification.items(Category::Other);
    if !other.is_empty() {
        lines.push(String::new());
        lines.push(format!("### {}", Category::Other.display_name()));
        push_items(&mut lines, other, false);
    }

    lines.join("\n")
}

fn push_items(lines: &mut Vec<String>, items: &[String], mandatory: bool) {
    if items.is_empty() && mandatory {
        lines.push(NONE_DETECTED.to_string());
        return;
    }
    lines.extend(items.iter().map(|item| format!("- {}", item)));
}

/// Assemble the full document from the header and rendered sections
pub fn render_report(header: &ReportHeader, sections: &[String]) -> String {
    let mut lines = header.lines();
    if sections.is_empty() {
        lines.push(EMPTY_WINDOW_LINE.to_string());
    } else {
        lines.push(sections.join(SECTION_SEPARATOR));
    }
    lines.join("\n")
}
