//! # Resolver
//!
//! Maps user-supplied names onto catalog entries.
//!
//! - Categories match by any spelling that normalizes to the category id
//!   (`Social Media`, `social-media`, `SOCIAL-MEDIA`).
//! - Badges match case-insensitively, and only inside the resolved category.
//!
//! Misses are values, not dead ends. A missing category carries a
//! [`CategoryHint`] when one of the requested badges exists under another
//! category (an exact scan, no fuzziness). A missing badge carries suggestions
//! ranked by the suggestion engine over that category's badges.
//!
//! The resolver borrows the catalog; it never copies or mutates it.

use crate::catalog::{BadgeEntry, Catalog, Category};
use crate::error::{BadgeError, CategoryHint, Result};
use crate::normalize::{display_label, normalize_badge, normalize_category};
use crate::snippet::parse_snippet;
use crate::suggest::{suggest, DEFAULT_LIMIT, DEFAULT_THRESHOLD};

/// A resolved category, borrowed from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRef<'a> {
    category: &'a Category,
}

impl<'a> CategoryRef<'a> {
    pub fn id(&self) -> &'a str {
        &self.category.id
    }

    pub fn label(&self) -> String {
        self.category.label()
    }

    pub fn badges(&self) -> &'a [BadgeEntry] {
        &self.category.badges
    }
}

/// A badge found in the catalog, with its snippet already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBadge {
    pub category: String,
    pub id: String,
    pub label: String,
    pub alt: String,
    pub url: String,
    pub snippet: String,
}

pub struct Resolver<'a> {
    catalog: &'a Catalog,
    suggestion_limit: usize,
    suggestion_threshold: f64,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            suggestion_limit: DEFAULT_LIMIT,
            suggestion_threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_suggestions(mut self, limit: usize, threshold: f64) -> Self {
        self.suggestion_limit = limit;
        self.suggestion_threshold = threshold;
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Resolves a category. `badge_names` are only used to build the hint
    /// when the category is missing.
    pub fn resolve_category<S: AsRef<str>>(
        &self,
        name: &str,
        badge_names: &[S],
    ) -> Result<CategoryRef<'a>> {
        match self.catalog.category(name) {
            Some(category) => Ok(CategoryRef { category }),
            None => {
                let hint = badge_names
                    .iter()
                    .find_map(|badge| self.locate_badge(badge.as_ref()));
                tracing::debug!(category = name, ?hint, "category not found");
                Err(BadgeError::CategoryNotFound {
                    category: normalize_category(name),
                    hint,
                })
            }
        }
    }

    /// Resolves a badge inside `category`, suggesting alternatives on a miss.
    pub fn resolve_badge(&self, category: CategoryRef<'a>, name: &str) -> Result<ResolvedBadge> {
        let Some(entry) = category.category.badge(name) else {
            let suggestions = suggest(
                &category.category.candidates(),
                name,
                self.suggestion_limit,
                self.suggestion_threshold,
            );
            return Err(BadgeError::BadgeNotFound {
                category: category.id().to_string(),
                badge: normalize_badge(name),
                suggestions,
            });
        };

        let parsed = parse_snippet(&entry.snippet)?;
        Ok(ResolvedBadge {
            category: category.id().to_string(),
            id: entry.id.clone(),
            label: display_label(&entry.id),
            alt: parsed.alt,
            url: parsed.url,
            snippet: entry.snippet.clone(),
        })
    }

    /// Resolves category and badge in one go.
    pub fn resolve(&self, category: &str, badge: &str) -> Result<ResolvedBadge> {
        let category = self.resolve_category(category, &[badge])?;
        self.resolve_badge(category, badge)
    }

    /// First category, in catalog order, holding a badge with exactly this id
    /// (case-insensitive).
    pub fn locate_badge(&self, name: &str) -> Option<CategoryHint> {
        self.catalog.categories().iter().find_map(|category| {
            category.badge(name).map(|entry| CategoryHint {
                category: category.id.clone(),
                badge: entry.id.clone(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{sample_catalog, snippet};
    use crate::format::format_badge;

    #[test]
    fn resolves_exact_badge() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog);
        let category = resolver
            .resolve_category("social-media", &["discord"])
            .unwrap();
        let badge = resolver.resolve_badge(category, "discord").unwrap();

        assert_eq!(badge.category, "social-media");
        assert_eq!(badge.id, "discord");
        assert_eq!(badge.label, "Discord");
        assert_eq!(badge.alt, "Discord");
        assert!(badge.url.starts_with("https://img.shields.io/badge/"));

        let formatted = format_badge(&badge.snippet, None, None).unwrap();
        assert!(formatted
            .markdown
            .starts_with("[![Discord](https://img.shields.io/badge/"));
        assert!(formatted.markdown.ends_with(")](#)"));
    }

    #[test]
    fn mixed_case_spaced_category_resolves_identically() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog);
        let a = resolver.resolve("social-media", "discord").unwrap();
        let b = resolver.resolve("Social Media", "DISCORD").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn badge_miss_carries_ranked_suggestions() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog);
        let err = resolver.resolve("social-media", "discrod").unwrap_err();

        match err {
            BadgeError::BadgeNotFound {
                category,
                badge,
                suggestions,
            } => {
                assert_eq!(category, "social-media");
                assert_eq!(badge, "discrod");
                assert_eq!(suggestions[0].id, "discord");
                assert!(suggestions.iter().all(|s| s.category == "social-media"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn badge_miss_without_close_match_has_no_suggestions() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog);
        let err = resolver.resolve("social-media", "kubernetes").unwrap_err();
        assert!(matches!(
            err,
            BadgeError::BadgeNotFound { suggestions, .. } if suggestions.is_empty()
        ));
    }

    #[test]
    fn suggestions_stay_inside_category() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog);
        // "steam" lives in games, not social-media
        let err = resolver.resolve("social-media", "steam").unwrap_err();
        if let BadgeError::BadgeNotFound { suggestions, .. } = err {
            assert!(suggestions.iter().all(|s| s.id != "steam"));
        } else {
            panic!("expected BadgeNotFound");
        }
    }

    #[test]
    fn missing_category_hints_at_real_category() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog);
        let err = resolver
            .resolve_category("not-a-category", &["discord"])
            .unwrap_err();

        match err {
            BadgeError::CategoryNotFound { category, hint } => {
                assert_eq!(category, "not-a-category");
                assert_eq!(
                    hint,
                    Some(CategoryHint {
                        category: "social-media".into(),
                        badge: "discord".into()
                    })
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn hint_uses_first_badge_that_exists_anywhere() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog);
        let err = resolver
            .resolve_category("nope", &["nothing", "STEAM", "discord"])
            .unwrap_err();
        assert!(matches!(
            err,
            BadgeError::CategoryNotFound { hint: Some(CategoryHint { ref category, ref badge }), .. }
                if category == "games" && badge == "steam"
        ));
    }

    #[test]
    fn missing_category_without_known_badge_has_no_hint() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog);
        let err = resolver
            .resolve_category("nope", &["nothing"])
            .unwrap_err();
        assert!(matches!(err, BadgeError::CategoryNotFound { hint: None, .. }));
    }

    #[test]
    fn malformed_entry_is_distinct_from_not_found() {
        let catalog = Catalog::new(vec![Category::new(
            "broken",
            vec![
                BadgeEntry::new("bad", "no markup"),
                BadgeEntry::new("good", snippet("Good", "Good")),
            ],
        )]);
        let resolver = Resolver::new(&catalog);

        let err = resolver.resolve("broken", "bad").unwrap_err();
        assert!(matches!(err, BadgeError::MalformedSnippet { .. }));
        assert!(!err.is_not_found());
        assert!(resolver.resolve("broken", "good").is_ok());
    }

    #[test]
    fn suggestion_settings_are_honored() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog).with_suggestions(1, 0.0);
        let err = resolver.resolve("social-media", "disc").unwrap_err();
        assert!(matches!(
            err,
            BadgeError::BadgeNotFound { suggestions, .. } if suggestions.len() == 1
        ));
    }
}
