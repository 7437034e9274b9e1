//! Changelog categories and the partition produced by classification

use serde::Serialize;

/// Heuristic category of a changelog bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Potentially breaking change
    Breaking,
    /// New feature
    Feature,
    /// Anything else
    Other,
}

impl Category {
    /// Get the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Breaking => "Potential breaking changes (heuristic)",
            Category::Feature => "New features",
            Category::Other => "Other changes",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Breaking => "breaking",
            Category::Feature => "feature",
            Category::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Ordered partition of changelog items into the three categories
///
/// Each list keeps the relative order of the source items, and every
/// item lands in exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Potentially breaking items
    pub breaking: Vec<String>,
    /// New feature items
    pub features: Vec<String>,
    /// Everything else
    pub other: Vec<String>,
}

impl Classification {
    /// Create an empty classification
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the list for its category
    pub fn push(&mut self, category: Category, item: String) {
        match category {
            Category::Breaking => self.breaking.push(item),
            Category::Feature => self.features.push(item),
            Category::Other => self.other.push(item),
        }
    }

    /// Items in the given category
    pub fn items(&self, category: Category) -> &[String] {
        match category {
            Category::Breaking => &self.breaking,
            Category::Feature => &self.features,
            Category::Other => &self.other,
        }
    }

    /// Total number of classified items
    pub fn len(&self) -> usize {
        self.breaking.len() + self.features.len() + self.other.len()
    }

    /// Check if nothing was classified
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
