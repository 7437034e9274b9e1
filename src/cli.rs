//! CLI argument parsing module for release-watch

use crate::github::GITHUB_API_URL;
use clap::Parser;
use std::path::PathBuf;

/// GitHub release digest with heuristic breaking-change detection
#[derive(Parser, Debug, Clone)]
#[command(
    name = "release-watch",
    version,
    about = "Summarize a repository's recent GitHub releases as markdown"
)]
pub struct CliArgs {
    /// Repository to watch, in owner/name form
    #[arg(long)]
    pub repo: String,

    /// Lookback window in days
    #[arg(long, default_value_t = 7)]
    pub days: u32,

    /// Include prereleases in the report
    #[arg(long)]
    pub include_prereleases: bool,

    /// Report file to write (overwritten)
    #[arg(long, default_value = "report.md")]
    pub output: PathBuf,

    // Environment-provided settings
    /// Bearer token for the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// File to append the has_releases=<0|1> line to
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_URL)]
    pub api_url: String,

    // Output options
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - no summary or spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["release-watch", "--repo", "o/r"]);
        assert_eq!(args.repo, "o/r");
        assert_eq!(args.days, 7);
        assert!(!args.include_prereleases);
        assert_eq!(args.output, PathBuf::from("report.md"));
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(!args.json);
    }

    #[test]
    fn test_repo_is_required() {
        let result = CliArgs::try_parse_from(["release-watch"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_days() {
        let args = CliArgs::parse_from(["release-watch", "--repo", "o/r", "--days", "30"]);
        assert_eq!(args.days, 30);
    }

    #[test]
    fn test_days_rejects_negative() {
        let result = CliArgs::try_parse_from(["release-watch", "--repo", "o/r", "--days", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_include_prereleases() {
        let args = CliArgs::parse_from(["release-watch", "--repo", "o/r", "--include-prereleases"]);
        assert!(args.include_prereleases);
    }

    #[test]
    fn test_output_path() {
        let args =
            CliArgs::parse_from(["release-watch", "--repo", "o/r", "--output", "out/weekly.md"]);
        assert_eq!(args.output, PathBuf::from("out/weekly.md"));
    }

    #[test]
    fn test_explicit_env_backed_options() {
        let args = CliArgs::parse_from([
            "release-watch",
            "--repo",
            "o/r",
            "--token",
            "abc",
            "--github-output",
            "/tmp/gh_out",
            "--api-url",
            "http://localhost:8080",
        ]);
        assert_eq!(args.token.as_deref(), Some("abc"));
        assert_eq!(args.github_output, Some(PathBuf::from("/tmp/gh_out")));
        assert_eq!(args.api_url, "http://localhost:8080");
    }

    #[test]
    fn test_quiet_flags() {
        let args = CliArgs::parse_from(["release-watch", "--repo", "o/r", "-q"]);
        assert!(args.quiet);

        let args = CliArgs::parse_from(["release-watch", "--repo", "o/r", "--quiet"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_combined_flags() {
        let args = CliArgs::parse_from([
            "release-watch",
            "--repo",
            "tokio-rs/tokio",
            "--days",
            "14",
            "--include-prereleases",
            "--verbose",
            "--json",
        ]);
        assert_eq!(args.repo, "tokio-rs/tokio");
        assert_eq!(args.days, 14);
        assert!(args.include_prereleases);
        assert!(args.verbose);
        assert!(args.json);
    }
}
