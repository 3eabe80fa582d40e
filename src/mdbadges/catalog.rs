//! # Badge Catalog
//!
//! The catalog is the static data set the whole tool is built around:
//! an ordered list of categories, each holding an ordered list of
//! `(badge id, snippet)` pairs. Snippets are pre-rendered Markdown of the form
//! `[![Alt](https://img.shields.io/badge/...)](#)`.
//!
//! The production catalog ships inside the binary (`data/badges.json`) and is
//! loaded once by the CLI. The core never reaches for it on its own: the
//! [`Resolver`](crate::resolve::Resolver) and the suggestion engine take a
//! `&Catalog`, so tests can hand them small synthetic catalogs built with
//! [`Catalog::new`].
//!
//! Order is significant. Categories and badges keep the order of the data file,
//! and that order is the tie-breaker for ranked suggestions.
//!
//! ## Invariants
//!
//! - category ids are unique (case-insensitively) and already canonical
//! - badge ids are unique within their category (case-insensitively)
//! - every snippet decodes into one alt text and one URL
//!
//! They are not re-checked on every load; [`Catalog::validate`] reports
//! violations and is run by the test suite and `mdb doctor`.

use crate::error::{BadgeError, Result};
use crate::normalize::{display_label, normalize_badge, normalize_category};
use crate::snippet::parse_snippet;
use crate::suggest::Candidate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

const BUILTIN_CATALOG: &str = include_str!("../../data/badges.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeEntry {
    pub id: String,
    pub snippet: String,
}

impl BadgeEntry {
    pub fn new(id: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            snippet: snippet.into(),
        }
    }

    pub fn label(&self) -> String {
        display_label(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub badges: Vec<BadgeEntry>,
}

impl Category {
    pub fn new(id: impl Into<String>, badges: Vec<BadgeEntry>) -> Self {
        Self {
            id: id.into(),
            badges,
        }
    }

    pub fn label(&self) -> String {
        display_label(&self.id)
    }

    /// Case-insensitive lookup of a badge inside this category.
    pub fn badge(&self, name: &str) -> Option<&BadgeEntry> {
        let wanted = normalize_badge(name);
        self.badges
            .iter()
            .find(|entry| entry.id.to_lowercase() == wanted)
    }

    /// Suggestion candidates scoped to this category, in catalog order.
    pub fn candidates(&self) -> Vec<Candidate<'_>> {
        self.badges
            .iter()
            .map(|entry| Candidate::new(&self.id, &entry.id, &entry.snippet))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        if catalog.categories.is_empty() {
            return Err(BadgeError::Catalog("catalog has no categories".into()));
        }
        tracing::debug!(
            categories = catalog.categories.len(),
            badges = catalog.badge_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn badge_count(&self) -> usize {
        self.categories.iter().map(|c| c.badges.len()).sum()
    }

    /// Looks up a category by any spelling that normalizes to its id.
    pub fn category(&self, name: &str) -> Option<&Category> {
        let wanted = normalize_category(name);
        self.categories
            .iter()
            .find(|category| category.id.to_lowercase() == wanted)
    }

    /// Every badge in the catalog as a suggestion candidate, flattened in
    /// category order and then badge order.
    pub fn candidates(&self) -> Vec<Candidate<'_>> {
        self.categories
            .iter()
            .flat_map(|category| category.candidates())
            .collect()
    }

    /// Checks the data invariants described in the module docs.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut seen_categories = HashSet::new();

        for category in &self.categories {
            if !seen_categories.insert(category.id.to_lowercase()) {
                issues.push(CatalogIssue::DuplicateCategory(category.id.clone()));
            }
            if normalize_category(&category.id) != category.id {
                issues.push(CatalogIssue::NonCanonicalCategory(category.id.clone()));
            }
            if category.badges.is_empty() {
                issues.push(CatalogIssue::EmptyCategory(category.id.clone()));
            }

            let mut seen_badges = HashSet::new();
            for entry in &category.badges {
                if !seen_badges.insert(entry.id.to_lowercase()) {
                    issues.push(CatalogIssue::DuplicateBadge {
                        category: category.id.clone(),
                        badge: entry.id.clone(),
                    });
                }
                if let Err(err) = parse_snippet(&entry.snippet) {
                    issues.push(CatalogIssue::MalformedSnippet {
                        category: category.id.clone(),
                        badge: entry.id.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        issues
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateCategory(String),
    NonCanonicalCategory(String),
    EmptyCategory(String),
    DuplicateBadge {
        category: String,
        badge: String,
    },
    MalformedSnippet {
        category: String,
        badge: String,
        reason: String,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateCategory(id) => write!(f, "duplicate category '{}'", id),
            CatalogIssue::NonCanonicalCategory(id) => {
                write!(f, "category '{}' is not a canonical kebab-case key", id)
            }
            CatalogIssue::EmptyCategory(id) => write!(f, "category '{}' has no badges", id),
            CatalogIssue::DuplicateBadge { category, badge } => {
                write!(f, "duplicate badge '{}' in '{}'", badge, category)
            }
            CatalogIssue::MalformedSnippet {
                category,
                badge,
                reason,
            } => write!(f, "badge '{}' in '{}': {}", badge, category, reason),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn snippet(alt: &str, slug: &str) -> String {
        format!(
            "[![{}](https://img.shields.io/badge/{}-000000?logo={}&logoColor=white)](#)",
            alt, slug, slug
        )
    }

    /// A small catalog with the shapes the tests care about.
    pub fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Category::new(
                "social-media",
                vec![
                    BadgeEntry::new("discord", snippet("Discord", "Discord")),
                    BadgeEntry::new("reddit", snippet("Reddit", "Reddit")),
                    BadgeEntry::new("twitter", snippet("Twitter", "Twitter")),
                    BadgeEntry::new("discourse", snippet("Discourse", "Discourse")),
                ],
            ),
            Category::new(
                "app-store",
                vec![
                    BadgeEntry::new("app-store", snippet("App Store", "App_Store")),
                    BadgeEntry::new("play-store", snippet("Google Play Store", "Google_Play")),
                ],
            ),
            Category::new(
                "games",
                vec![
                    BadgeEntry::new("playstation", snippet("PlayStation", "PlayStation")),
                    BadgeEntry::new("steam", snippet("Steam", "Steam")),
                ],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.categories().is_empty());
        assert!(catalog.badge_count() > 50);
    }

    #[test]
    fn builtin_catalog_has_no_issues() {
        let catalog = Catalog::builtin().unwrap();
        let issues = catalog.validate();
        assert!(issues.is_empty(), "catalog issues: {:?}", issues);
    }

    #[test]
    fn category_lookup_is_spelling_insensitive() {
        let catalog = sample_catalog();
        assert_eq!(catalog.category("Social Media").unwrap().id, "social-media");
        assert_eq!(catalog.category("SOCIAL-MEDIA").unwrap().id, "social-media");
        assert!(catalog.category("social").is_none());
    }

    #[test]
    fn badge_lookup_is_case_insensitive() {
        let catalog = sample_catalog();
        let social = catalog.category("social-media").unwrap();
        assert_eq!(social.badge("DISCORD").unwrap().id, "discord");
        assert!(social.badge("steam").is_none());
    }

    #[test]
    fn candidates_keep_catalog_order() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog.candidates().iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "discord",
                "reddit",
                "twitter",
                "discourse",
                "app-store",
                "play-store",
                "playstation",
                "steam"
            ]
        );
    }

    #[test]
    fn validate_reports_duplicates_and_bad_snippets() {
        let catalog = Catalog::new(vec![
            Category::new(
                "tools",
                vec![
                    BadgeEntry::new("git", snippet("Git", "Git")),
                    BadgeEntry::new("Git", snippet("Git", "Git")),
                    BadgeEntry::new("broken", "no markdown here"),
                ],
            ),
            Category::new("Tools", vec![BadgeEntry::new("npm", snippet("npm", "npm"))]),
        ]);

        let issues = catalog.validate();
        assert!(issues.contains(&CatalogIssue::DuplicateBadge {
            category: "tools".into(),
            badge: "Git".into()
        }));
        assert!(issues.contains(&CatalogIssue::DuplicateCategory("Tools".into())));
        assert!(issues.contains(&CatalogIssue::NonCanonicalCategory("Tools".into())));
        assert!(issues
            .iter()
            .any(|issue| matches!(issue, CatalogIssue::MalformedSnippet { badge, .. } if badge == "broken")));
    }

    #[test]
    fn empty_catalog_json_is_rejected() {
        let err = Catalog::from_json(r#"{"categories": []}"#).unwrap_err();
        assert!(matches!(err, BadgeError::Catalog(_)));
    }

    #[test]
    fn invalid_catalog_json_is_a_serialization_error() {
        let err = Catalog::from_json("{ nope").unwrap_err();
        assert!(matches!(err, BadgeError::Serialization(_)));
    }
}
