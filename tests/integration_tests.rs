//! Integration tests for release-watch
//!
//! These tests verify:
//! - Full runs against a mock releases API
//! - Report file contents and signal file lines
//! - Error propagation for API and timestamp failures

use chrono::{DateTime, TimeZone, Utc};
use release_watch::config::WatchConfig;
use release_watch::error::AppError;
use release_watch::orchestrator::Orchestrator;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Fixed clock for all runs
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 20, 9, 0, 0).unwrap()
}

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Mount a releases payload for owner/repo
async fn mock_releases(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/releases"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

fn config_for(server: &MockServer, dir: &TempDir) -> WatchConfig {
    WatchConfig::new("owner/repo")
        .unwrap()
        .with_api_url(&server.uri())
        .with_output(dir.path().join("report.md"))
        .with_signal_path(dir.path().join("github_output"))
}

const MIXED_RELEASES: &str = r###"[
    {
        "tag_name": "v2.0.0-draft",
        "published_at": null,
        "created_at": "2024-01-19T08:00:00Z",
        "prerelease": false,
        "draft": true,
        "html_url": "https://github.com/owner/repo/releases/tag/untagged",
        "body": "- Remove everything"
    },
    {
        "tag_name": "v2.0.0-rc.1",
        "published_at": "2024-01-18T08:00:00Z",
        "created_at": "2024-01-18T07:00:00Z",
        "prerelease": true,
        "draft": false,
        "html_url": "https://github.com/owner/repo/releases/tag/v2.0.0-rc.1",
        "body": "- Add experimental mode"
    },
    {
        "tag_name": "v1.4.0",
        "published_at": "2024-01-17T08:00:00Z",
        "created_at": "2024-01-17T07:00:00Z",
        "prerelease": false,
        "draft": false,
        "html_url": "https://github.com/owner/repo/releases/tag/v1.4.0",
        "body": "## What's Changed\r\n- Remove legacy auth flag\r\n- Add retry support\r\n- Fix flaky test\r\n\r\n**Full Changelog**: https://github.com/owner/repo/compare/v1.3.0...v1.4.0"
    },
    {
        "tag_name": "v1.3.0",
        "published_at": "2023-12-01T08:00:00Z",
        "created_at": "2023-12-01T07:00:00Z",
        "prerelease": false,
        "draft": false,
        "html_url": "https://github.com/owner/repo/releases/tag/v1.3.0",
        "body": "- Old news"
    }
]"###;

mod full_run {
    use super::*;

    #[tokio::test]
    async fn test_report_contains_only_published_release() {
        let server = MockServer::start().await;
        mock_releases(&server, MIXED_RELEASES).await;
        let dir = create_test_dir();

        let orchestrator = Orchestrator::new(config_for(&server, &dir)).unwrap();
        let outcome = orchestrator.run_at(now(), false).await.unwrap();

        let expected = "# Release Watch\n\
            Repo: owner/repo\n\
            Checked: 2024-01-20 (UTC)\n\
            Window: last 7 days\n\
            \n\
            ## v1.4.0 (2024-01-17, release)\n\
            Source: [Release](https://github.com/owner/repo/releases/tag/v1.4.0)\n\
            Full Changelog: [Compare](https://github.com/owner/repo/compare/v1.3.0...v1.4.0)\n\
            \n\
            ### Potential breaking changes (heuristic)\n\
            - Remove legacy auth flag\n\
            \n\
            ### New features\n\
            - Add retry support\n\
            \n\
            ### Other changes\n\
            - Fix flaky test";

        let written = fs::read_to_string(dir.path().join("report.md")).unwrap();
        assert_eq!(written, expected);
        assert_eq!(outcome.report, expected);
        assert_eq!(
            fs::read_to_string(dir.path().join("github_output")).unwrap(),
            "has_releases=1\n"
        );
    }

    #[tokio::test]
    async fn test_prereleases_included_when_enabled() {
        let server = MockServer::start().await;
        mock_releases(&server, MIXED_RELEASES).await;
        let dir = create_test_dir();

        let config = config_for(&server, &dir).with_include_prereleases(true);
        let outcome = Orchestrator::new(config)
            .unwrap()
            .run_at(now(), false)
            .await
            .unwrap();

        let tags: Vec<&str> = outcome
            .summary
            .releases
            .iter()
            .map(|r| r.tag.as_str())
            .collect();
        assert_eq!(tags, vec!["v2.0.0-rc.1", "v1.4.0"]);
        assert!(outcome
            .report
            .contains("## v2.0.0-rc.1 (2024-01-18, prerelease)"));
        assert!(!outcome.report.contains("v2.0.0-draft"));
    }

    #[tokio::test]
    async fn test_wider_window_picks_up_older_release() {
        let server = MockServer::start().await;
        mock_releases(&server, MIXED_RELEASES).await;
        let dir = create_test_dir();

        let config = config_for(&server, &dir).with_window_days(60);
        let outcome = Orchestrator::new(config)
            .unwrap()
            .run_at(now(), false)
            .await
            .unwrap();

        assert_eq!(outcome.summary.releases.len(), 2);
        assert!(outcome.report.contains("Window: last 60 days"));
        assert!(outcome.report.contains("\n---\n## v1.3.0 (2023-12-01, release)"));
    }

    #[tokio::test]
    async fn test_empty_window_report_and_signal() {
        let server = MockServer::start().await;
        mock_releases(&server, "[]").await;
        let dir = create_test_dir();

        let outcome = Orchestrator::new(config_for(&server, &dir))
            .unwrap()
            .run_at(now(), false)
            .await
            .unwrap();

        assert!(!outcome.has_releases());
        assert_eq!(
            fs::read_to_string(dir.path().join("report.md")).unwrap(),
            "# Release Watch\nRepo: owner/repo\nChecked: 2024-01-20 (UTC)\nWindow: last 7 days\n\nNo releases published in this window."
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("github_output")).unwrap(),
            "has_releases=0\n"
        );
    }

    #[tokio::test]
    async fn test_report_file_is_overwritten() {
        let server = MockServer::start().await;
        mock_releases(&server, "[]").await;
        let dir = create_test_dir();
        fs::write(dir.path().join("report.md"), "stale report from last week\n".repeat(50))
            .unwrap();

        Orchestrator::new(config_for(&server, &dir))
            .unwrap()
            .run_at(now(), false)
            .await
            .unwrap();

        let written = fs::read_to_string(dir.path().join("report.md")).unwrap();
        assert!(!written.contains("stale"));
    }
}

mod authentication {
    use super::*;

    #[tokio::test]
    async fn test_token_sent_as_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/releases"))
            .and(header("Authorization", "Bearer ghp_test"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;
        let dir = create_test_dir();

        let mut config = config_for(&server, &dir);
        config.token = Some("ghp_test".to_string());

        Orchestrator::new(config)
            .unwrap()
            .run_at(now(), false)
            .await
            .unwrap();
    }
}

mod failures {
    use super::*;

    #[tokio::test]
    async fn test_http_error_propagates_without_output() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_string(r#"{"message": "API rate limit exceeded"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;
        let dir = create_test_dir();

        let err = Orchestrator::new(config_for(&server, &dir))
            .unwrap()
            .run_at(now(), false)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Network(_)));
        assert!(err.to_string().contains("API rate limit exceeded"));
        assert!(!dir.path().join("report.md").exists());
        assert!(!dir.path().join("github_output").exists());
    }

    #[tokio::test]
    async fn test_malformed_timestamp_aborts_run() {
        let server = MockServer::start().await;
        mock_releases(
            &server,
            r#"[{"tag_name": "v1", "published_at": "01/19/2024", "prerelease": false, "draft": false}]"#,
        )
        .await;
        let dir = create_test_dir();

        let err = Orchestrator::new(config_for(&server, &dir))
            .unwrap()
            .run_at(now(), false)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Format(_)));
        assert!(err.to_string().contains("01/19/2024"));
        assert!(!dir.path().join("report.md").exists());
    }
}
