use mdbadges::catalog::Catalog;
use mdbadges::format::{escape_html, format_badge};
use mdbadges::normalize::normalize_category;
use mdbadges::resolve::Resolver;
use std::collections::HashSet;

#[test]
fn every_entry_formats_back_to_its_snippet() {
    let catalog = Catalog::builtin().unwrap();
    for category in catalog.categories() {
        for entry in &category.badges {
            let formatted = format_badge(&entry.snippet, None, None).unwrap();
            assert!(
                formatted.markdown.starts_with(&format!("[![{}](", formatted.alt)),
                "{}/{}",
                category.id,
                entry.id
            );
            assert!(formatted.markdown.ends_with(")](#)"));
            assert!(formatted.image_url.starts_with("https://img.shields.io/badge/"));
            assert_eq!(formatted.markdown, entry.snippet);
        }
    }
}

#[test]
fn identifiers_are_unique_and_canonical() {
    let catalog = Catalog::builtin().unwrap();
    let mut categories = HashSet::new();
    for category in catalog.categories() {
        assert!(categories.insert(category.id.to_lowercase()));
        assert_eq!(normalize_category(&category.id), category.id);

        let mut badges = HashSet::new();
        for entry in &category.badges {
            assert!(
                badges.insert(entry.id.to_lowercase()),
                "duplicate {} in {}",
                entry.id,
                category.id
            );
        }
    }
}

#[test]
fn every_badge_resolves_through_the_resolver() {
    let catalog = Catalog::builtin().unwrap();
    let resolver = Resolver::new(&catalog);
    for category in catalog.categories() {
        for entry in &category.badges {
            let resolved = resolver
                .resolve(&category.label(), &entry.id.to_uppercase())
                .unwrap();
            assert_eq!(resolved.id, entry.id);
            assert_eq!(resolved.snippet, entry.snippet);
        }
    }
}

#[test]
fn html_output_never_carries_raw_markup_from_alt_text() {
    let catalog = Catalog::builtin().unwrap();
    for candidate in catalog.candidates() {
        let formatted = format_badge(candidate.value, None, None).unwrap();
        assert!(formatted
            .html
            .contains(&format!("alt=\"{}\"", escape_html(&formatted.alt))));
    }
}
