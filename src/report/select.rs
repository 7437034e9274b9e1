//! Release selection for the lookback window

use crate::domain::Release;
use crate::error::FormatError;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Which releases make it into the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Lookback window in days
    pub window_days: u32,
    /// Keep prereleases
    pub include_prereleases: bool,
}

impl SelectionPolicy {
    /// Create a new selection policy
    pub fn new(window_days: u32, include_prereleases: bool) -> Self {
        Self {
            window_days,
            include_prereleases,
        }
    }

    /// Oldest publish instant still inside the window
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_signed(Duration::days(i64::from(self.window_days)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// A release that passed selection, with its parsed publish instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedRelease {
    pub release: Release,
    pub published: DateTime<Utc>,
}

/// Filter releases to the window and order them newest first
///
/// Drafts are always dropped, prereleases unless the policy keeps them,
/// and releases carrying neither timestamp. Ordering compares the raw
/// timestamp strings, which is chronological for the API's format.
pub fn select_releases(
    releases: Vec<Release>,
    now: DateTime<Utc>,
    policy: SelectionPolicy,
) -> Result<Vec<SelectedRelease>, FormatError> {
    let cutoff = policy.cutoff(now);
    let mut selected = Vec::new();

    for release in releases {
        if release.draft {
            debug!(tag = release.tag(), "skipping draft");
            continue;
        }
        if release.prerelease && !policy.include_prereleases {
            debug!(tag = release.tag(), "skipping prerelease");
            continue;
        }
        let Some(published) = release.published()? else {
            debug!(tag = release.tag(), "skipping release without timestamp");
            continue;
        };
        if published < cutoff {
            debug!(tag = release.tag(), %published, "outside window");
            continue;
        }
        selected.push(SelectedRelease { release, published });
    }

    selected.sort_by(|a, b| b.release.published_raw().cmp(&a.release.published_raw()));
    Ok(selected)
}
