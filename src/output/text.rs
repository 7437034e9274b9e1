//! Text output formatter for human-readable display
//!
//! Prints one line per reported release with colored category counts,
//! followed by where the report went.

use crate::domain::{ReleaseSummary, RunSummary};
use crate::output::SummaryFormatter;
use colored::Colorize;
use std::io::Write;

/// Text formatter for terminal display
pub struct TextFormatter {
    /// Whether to colorize output
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn release_line(&self, release: &ReleaseSummary) -> String {
        let kind = if release.prerelease {
            " (prerelease)"
        } else {
            ""
        };
        let breaking = format!("{} breaking", release.breaking);
        let features = format!("{} features", release.features);
        let other = format!("{} other", release.other);

        if self.color {
            let breaking = if release.has_breaking() {
                breaking.red().bold().to_string()
            } else {
                breaking.dimmed().to_string()
            };
            format!(
                "  {}{} {}  {}, {}, {}",
                release.tag.bold(),
                kind.yellow(),
                release.published.to_string().dimmed(),
                breaking,
                features.green(),
                other.dimmed()
            )
        } else {
            format!(
                "  {}{} {}  {}, {}, {}",
                release.tag, kind, release.published, breaking, features, other
            )
        }
    }
}

impl SummaryFormatter for TextFormatter {
    fn format(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        if !summary.has_releases() {
            writeln!(
                writer,
                "{}: no releases in the last {} days",
                summary.repo, summary.window_days
            )?;
        } else {
            writeln!(
                writer,
                "{}: {} release(s) in the last {} days",
                summary.repo,
                summary.releases.len(),
                summary.window_days
            )?;
            for release in &summary.releases {
                writeln!(writer, "{}", self.release_line(release))?;
            }

            let breaking = summary.breaking_release_count();
            if breaking > 0 {
                let line = format!("{} release(s) with potential breaking changes", breaking);
                if self.color {
                    writeln!(writer, "{}", line.red())?;
                } else {
                    writeln!(writer, "{}", line)?;
                }
            }
        }

        writeln!(writer, "Report written to {}", summary.output.display())
    }
}
