//! Release record as returned by the GitHub releases API

use crate::error::FormatError;
use crate::timestamp::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// A single release entry
///
/// Fields mirror the API payload; anything the payload omits is `None`
/// (or `false` for the flags, which also read an explicit `null` as `false`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Release {
    /// Tag name (e.g., "v1.2.3")
    #[serde(default)]
    pub tag_name: Option<String>,
    /// Publish timestamp, absent for drafts
    #[serde(default)]
    pub published_at: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Whether the publisher marked this as not production-ready
    #[serde(default, deserialize_with = "null_as_false")]
    pub prerelease: bool,
    /// Whether this is an unpublished draft
    #[serde(default, deserialize_with = "null_as_false")]
    pub draft: bool,
    /// Web page of the release
    #[serde(default)]
    pub html_url: Option<String>,
    /// Release notes (markdown)
    #[serde(default)]
    pub body: Option<String>,
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Release {
    /// Create a published release with the given tag and timestamp
    pub fn new(tag: &str, published_at: &str) -> Self {
        Self {
            tag_name: Some(tag.to_string()),
            published_at: Some(published_at.to_string()),
            ..Self::default()
        }
    }

    /// Mark as prerelease
    pub fn with_prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }

    /// Mark as draft
    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    /// Set the release notes
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Set the release page URL
    pub fn with_html_url(mut self, url: &str) -> Self {
        self.html_url = Some(url.to_string());
        self
    }

    /// Tag name, or "(unknown)" when the payload has none
    pub fn tag(&self) -> &str {
        self.tag_name.as_deref().unwrap_or("(unknown)")
    }

    /// Raw publish timestamp, falling back to the creation timestamp
    pub fn published_raw(&self) -> Option<&str> {
        self.published_at
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.created_at.as_deref().filter(|s| !s.is_empty()))
    }

    /// Parsed publish instant, `None` when neither timestamp is present
    pub fn published(&self) -> Result<Option<DateTime<Utc>>, FormatError> {
        self.published_raw().map(parse_timestamp).transpose()
    }

    /// Release notes, empty when absent
    pub fn notes(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    /// Release-kind word used in report headings
    pub fn kind(&self) -> &'static str {
        if self.prerelease {
            "prerelease"
        } else {
            "release"
        }
    }
}
