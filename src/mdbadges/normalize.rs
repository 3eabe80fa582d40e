//! Conversions between what users type and the kebab-case keys the catalog uses.

/// Canonical category key: lowercase, trimmed, whitespace runs become one hyphen.
///
/// `"Social Media"` and `"  social   media "` both become `"social-media"`.
pub fn normalize_category(input: &str) -> String {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Canonical badge key. Badge lookups only fold case.
pub fn normalize_badge(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Human-readable label for a kebab-case identifier (`app-store` -> `App Store`).
///
/// Best-effort inverse of [`normalize_category`]: casing inside a word is not
/// recoverable, so `github-actions` becomes `Github Actions`.
pub fn display_label(identifier: &str) -> String {
    identifier
        .split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
