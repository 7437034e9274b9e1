//! Keyword-based changelog classification
//!
//! Each item is lower-cased and matched by substring against two fixed
//! vocabularies. Breaking keywords are checked first, so an item matching
//! both vocabularies is breaking.

use crate::domain::{Category, Classification};

/// Substrings indicating a potentially breaking change
pub const BREAKING_KEYWORDS: &[&str] = &[
    "breaking",
    "remove",
    "rename",
    "deprecat",
    "schema",
    "openapi",
    "api",
    "tls",
    "https",
    "auth",
    "config",
    "protocol",
    "migration",
];

/// Substrings indicating a new feature
pub const FEATURE_KEYWORDS: &[&str] = &[
    "add ",
    "added",
    "feat",
    "feature",
    "support",
    "introduce",
    "new ",
    "bring back",
    "restore",
];

/// Vocabularies in precedence order
const RULES: &[(Category, &[&str])] = &[
    (Category::Breaking, BREAKING_KEYWORDS),
    (Category::Feature, FEATURE_KEYWORDS),
];

/// Classify a single item
pub fn classify_item(item: &str) -> Category {
    let lower = item.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

/// Partition items into breaking, feature and other lists
pub fn classify<I, S>(items: I) -> Classification
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut classification = Classification::new();
    for item in items {
        let item = item.into();
        classification.push(classify_item(&item), item);
    }
    classification
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_and_add_scenario() {
        let c = classify(["Remove legacy auth flag", "Add retry support"]);
        assert_eq!(c.breaking, vec!["Remove legacy auth flag"]);
        assert_eq!(c.features, vec!["Add retry support"]);
        assert!(c.other.is_empty());
    }

    #[test]
    fn test_breaking_wins_over_feature() {
        assert_eq!(classify_item("add auth support"), Category::Breaking);
        assert_eq!(classify_item("New config option"), Category::Breaking);
        assert_eq!(classify_item("Feature: rename endpoints"), Category::Breaking);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_item("BREAKING: drop v1"), Category::Breaking);
        assert_eq!(classify_item("Introduce Dark Mode"), Category::Feature);
    }

    #[test]
    fn test_substring_matching() {
        // "api" inside "rapid"
        assert_eq!(classify_item("Rapid startup"), Category::Breaking);
        assert_eq!(classify_item("Deprecated the old flag"), Category::Breaking);
        assert_eq!(classify_item("Restored scrolling"), Category::Feature);
    }

    #[test]
    fn test_trailing_space_keywords() {
        // "add " and "new " need the trailing space
        assert_eq!(classify_item("Fix address parsing"), Category::Other);
        assert_eq!(classify_item("Fix newline handling"), Category::Other);
        assert_eq!(classify_item("Add docs"), Category::Feature);
        assert_eq!(classify_item("A new command"), Category::Feature);
    }

    #[test]
    fn test_other_fallback() {
        assert_eq!(classify_item("Fix crash on startup"), Category::Other);
        assert_eq!(classify_item("Bump dependencies"), Category::Other);
    }

    #[test]
    fn test_partition_conserves_items() {
        let items = vec![
            "Fix a",
            "Remove b",
            "Add c",
            "Fix a",
            "Support d",
            "Rename e",
            "Chore f",
        ];
        let c = classify(items.clone());
        assert_eq!(c.len(), items.len());

        let mut all: Vec<String> = c
            .breaking
            .iter()
            .chain(&c.features)
            .chain(&c.other)
            .cloned()
            .collect();
        let mut expected: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        all.sort();
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_partition_preserves_relative_order() {
        let c = classify(["Fix z", "Remove y", "Fix a", "Remove b"]);
        assert_eq!(c.breaking, vec!["Remove y", "Remove b"]);
        assert_eq!(c.other, vec!["Fix z", "Fix a"]);
    }

    #[test]
    fn test_empty_input() {
        let c = classify(Vec::<String>::new());
        assert!(c.is_empty());
    }
}
