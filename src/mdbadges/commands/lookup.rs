//! The main `mdb <category> <badge>...` flow.
//!
//! Each badge name is resolved independently: hits are formatted, misses are
//! collected with their suggestions, and one bad name never hides the others.
//! A category that does not exist fails the whole request, since nothing
//! can be resolved without it.

use super::{show, BadgeMiss, CmdMessage, CmdResult, RenderedBadge};
use crate::error::{BadgeError, Result};
use crate::format::format_parsed;
use crate::resolve::Resolver;
use crate::snippet::ParsedSnippet;

#[derive(Debug, Clone, Default)]
pub struct LookupRequest {
    pub category: String,
    pub badges: Vec<String>,
    pub style: Option<String>,
    /// Links pair with `badges` by position; missing entries mean no link.
    pub links: Vec<String>,
}

pub fn run(resolver: &Resolver<'_>, request: &LookupRequest) -> Result<CmdResult> {
    let category = resolver.resolve_category(&request.category, &request.badges)?;

    if request.badges.is_empty() {
        return show::run(resolver, &request.category);
    }

    let mut result = CmdResult::default();
    let mut rendered = Vec::new();

    for (index, name) in request.badges.iter().enumerate() {
        let link = request.links.get(index).map(String::as_str);
        match resolver.resolve_badge(category, name) {
            Ok(badge) => {
                let parsed = ParsedSnippet {
                    alt: badge.alt,
                    url: badge.url,
                };
                let formatted = format_parsed(&parsed, request.style.as_deref(), link);
                for warning in &formatted.warnings {
                    result.add_message(CmdMessage::warning(warning.to_string()));
                }
                rendered.push(RenderedBadge {
                    category: badge.category,
                    id: badge.id,
                    label: badge.label,
                    badge: formatted,
                });
            }
            Err(BadgeError::BadgeNotFound {
                category,
                badge,
                suggestions,
            }) => {
                tracing::debug!(%category, %badge, suggestions = suggestions.len(), "badge miss");
                result
                    .misses
                    .push(BadgeMiss::new(resolver, category, name, suggestions));
            }
            Err(err @ BadgeError::MalformedSnippet { .. }) => {
                tracing::error!(badge = %name, error = %err, "catalog entry is malformed");
                result.add_message(CmdMessage::error(format!(
                    "The catalog entry for '{}' is broken: {}",
                    name, err
                )));
            }
            Err(err) => return Err(err),
        }
    }

    if request.links.len() > request.badges.len() {
        result.add_message(CmdMessage::warning(format!(
            "{} link(s) had no matching badge and were ignored.",
            request.links.len() - request.badges.len()
        )));
    }

    Ok(result.with_badges(rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::sample_catalog;
    use crate::catalog::{BadgeEntry, Catalog, Category};
    use crate::commands::MessageLevel;

    fn request(category: &str, badges: &[&str]) -> LookupRequest {
        LookupRequest {
            category: category.to_string(),
            badges: badges.iter().map(|b| b.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn renders_found_badges_in_order() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog);
        let result = run(&resolver, &request("Social Media", &["reddit", "Discord"])).unwrap();

        let ids: Vec<&str> = result.badges.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["reddit", "discord"]);
        assert!(result.misses.is_empty());
        assert!(result.badges[1]
            .badge
            .markdown
            .starts_with("[![Discord](https://img.shields.io/badge/"));
    }

    #[test]
    fn misses_do_not_stop_other_badges() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog);
        let result = run(&resolver, &request("social-media", &["discrod", "reddit"])).unwrap();

        assert_eq!(result.badges.len(), 1);
        assert_eq!(result.misses.len(), 1);
        assert_eq!(result.misses[0].name, "discrod");
        assert_eq!(result.misses[0].suggestions[0].id, "discord");
        assert_eq!(result.misses[0].elsewhere, None);
    }

    #[test]
    fn miss_points_at_the_category_that_has_it() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog);
        let result = run(&resolver, &request("games", &["discord"])).unwrap();

        assert!(result.badges.is_empty());
        let hint = result.misses[0].elsewhere.as_ref().unwrap();
        assert_eq!(hint.category, "social-media");
        assert_eq!(hint.badge, "discord");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn links_pair_with_badges_by_position() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog);
        let mut req = request("social-media", &["discord", "reddit"]);
        req.links = vec!["https://discord.gg/x".into()];

        let result = run(&resolver, &req).unwrap();
        assert!(result.badges[0].badge.markdown.ends_with("](https://discord.gg/x)"));
        assert!(result.badges[1].badge.markdown.ends_with("](#)"));
        assert!(result.badges[0].badge.html.starts_with("<a href="));
    }

    #[test]
    fn invalid_style_warns_once() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog);
        let mut req = request("social-media", &["discord", "reddit"]);
        req.style = Some("invalid-style".into());

        let result = run(&resolver, &req).unwrap();
        assert_eq!(result.badges.len(), 2);
        assert!(result.badges.iter().all(|b| !b.badge.markdown.contains("&style=")));
        let warnings: Vec<_> = result
            .messages
            .iter()
            .filter(|m| m.level == MessageLevel::Warning)
            .collect();
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn missing_category_is_an_error_with_hint() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog);
        let err = run(&resolver, &request("not-a-category", &["discord"])).unwrap_err();
        assert!(matches!(err, BadgeError::CategoryNotFound { hint: Some(_), .. }));
    }

    #[test]
    fn no_badges_lists_the_category() {
        let catalog = sample_catalog();
        let resolver = Resolver::new(&catalog);
        let result = run(&resolver, &request("games", &[])).unwrap();
        assert_eq!(result.listings.len(), 2);
        assert!(result.badges.is_empty());
    }

    #[test]
    fn malformed_entry_reports_error_and_continues() {
        let catalog = Catalog::new(vec![Category::new(
            "mixed",
            vec![
                BadgeEntry::new("bad", "oops"),
                BadgeEntry::new(
                    "good",
                    "[![Good](https://img.shields.io/badge/Good-000000)](#)",
                ),
            ],
        )]);
        let resolver = Resolver::new(&catalog);
        let result = run(&resolver, &request("mixed", &["bad", "good"])).unwrap();
        assert!(result.has_errors());
        assert_eq!(result.badges.len(), 1);
        assert!(result.misses.is_empty());
    }
}
