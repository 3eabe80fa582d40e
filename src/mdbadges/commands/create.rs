//! Custom badges built from scratch rather than taken from the catalog.
//!
//! The image URL follows the Shields.io static badge scheme:
//!
//! ```text
//! https://img.shields.io/badge/<text>-<color>?logo=<logo>&logoColor=<logo color>
//! ```
//!
//! In the text segment `-` and `_` are separators, so literal ones are doubled
//! and spaces become `_` before percent-encoding.

use crate::commands::{CmdMessage, CmdResult, RenderedBadge};
use crate::error::{BadgeError, Result};
use crate::format::{format_parsed, with_query_param};
use crate::snippet::ParsedSnippet;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const SHIELDS_BADGE_URL: &str = "https://img.shields.io/badge";
const DEFAULT_LOGO_COLOR: &str = "white";

/// Characters Shields.io accepts unencoded in a path segment or query value.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'-')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Default)]
pub struct CreateRequest {
    pub text: String,
    pub color: String,
    pub logo: String,
    pub alt: Option<String>,
    pub logo_color: Option<String>,
    pub style: Option<String>,
    pub link: Option<String>,
}

pub fn run(request: &CreateRequest) -> Result<CmdResult> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(BadgeError::InvalidInput("badge text cannot be empty".into()));
    }
    let logo = request.logo.trim();
    if logo.is_empty() {
        return Err(BadgeError::InvalidInput("logo cannot be empty".into()));
    }
    let color = parse_hex_color(&request.color)?;
    let logo_color = match request.logo_color.as_deref().map(str::trim) {
        Some(c) if !c.is_empty() => c.trim_start_matches('#').to_string(),
        _ => DEFAULT_LOGO_COLOR.to_string(),
    };

    let mut url = format!(
        "{}/{}-{}",
        SHIELDS_BADGE_URL,
        encode(&escape_badge_text(text)),
        color
    );
    url = with_query_param(&url, "logo", &encode(logo));
    url = with_query_param(&url, "logoColor", &encode(&logo_color));

    let alt = request
        .alt
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or(text)
        .to_string();

    let parsed = ParsedSnippet { alt, url };
    let badge = format_parsed(&parsed, request.style.as_deref(), request.link.as_deref());

    let mut result = CmdResult::default();
    for warning in &badge.warnings {
        result.add_message(CmdMessage::warning(warning.to_string()));
    }

    Ok(result.with_badges(vec![RenderedBadge {
        category: "custom".into(),
        id: text.to_lowercase(),
        label: text.to_string(),
        badge,
    }]))
}

/// Escapes the separators Shields.io uses in the badge text segment.
pub fn escape_badge_text(text: &str) -> String {
    let doubled = text.replace('_', "__").replace('-', "--");
    doubled.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Accepts `RGB` or `RRGGBB`, with or without a leading `#`.
pub fn parse_hex_color(input: &str) -> Result<String> {
    let hex = input.trim().trim_start_matches('#');
    let valid = matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(hex.to_lowercase())
    } else {
        Err(BadgeError::InvalidInput(format!(
            "'{}' is not a hex color (expected e.g. #ff5733)",
            input
        )))
    }
}

fn encode(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, color: &str, logo: &str) -> CreateRequest {
        CreateRequest {
            text: text.into(),
            color: color.into(),
            logo: logo.into(),
            ..Default::default()
        }
    }

    #[test]
    fn builds_shields_url() {
        let result = run(&request("My Project", "#FF0000", "rust")).unwrap();
        let badge = &result.badges[0].badge;
        assert_eq!(
            badge.image_url,
            "https://img.shields.io/badge/My_Project-ff0000?logo=rust&logoColor=white"
        );
        assert_eq!(
            badge.markdown,
            "[![My Project](https://img.shields.io/badge/My_Project-ff0000?logo=rust&logoColor=white)](#)"
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn optional_fields_are_applied() {
        let req = CreateRequest {
            alt: Some("Built with Rust".into()),
            logo_color: Some("#000".into()),
            style: Some("flat-square".into()),
            link: Some("https://www.rust-lang.org".into()),
            ..request("rust", "dea584", "rust")
        };
        let badge = &run(&req).unwrap().badges[0].badge;
        assert!(badge.image_url.ends_with("logoColor=000&style=flat-square"));
        assert!(badge.markdown.starts_with("[![Built with Rust]("));
        assert!(badge.markdown.ends_with("](https://www.rust-lang.org)"));
        assert!(badge.html.starts_with("<a href=\"https://www.rust-lang.org\">"));
    }

    #[test]
    fn separators_are_escaped() {
        assert_eq!(escape_badge_text("a-b_c d"), "a--b__c_d");
        assert_eq!(escape_badge_text("  spaced   out "), "spaced_out");
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let badge = &run(&request("100% C#", "333", "c sharp")).unwrap().badges[0].badge;
        assert!(badge.image_url.contains("/badge/100%25_C%23-333?"));
        assert!(badge.image_url.contains("logo=c%20sharp"));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            run(&request("", "fff", "rust")),
            Err(BadgeError::InvalidInput(_))
        ));
        assert!(matches!(
            run(&request("ok", "red", "rust")),
            Err(BadgeError::InvalidInput(_))
        ));
        assert!(matches!(
            run(&request("ok", "fff", " ")),
            Err(BadgeError::InvalidInput(_))
        ));
    }

    #[test]
    fn invalid_style_is_a_warning() {
        let req = CreateRequest {
            style: Some("glossy".into()),
            ..request("ok", "fff", "rust")
        };
        let result = run(&req).unwrap();
        assert!(!result.badges[0].badge.image_url.contains("style="));
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex_color("#ABC").unwrap(), "abc");
        assert_eq!(parse_hex_color("00ff00").unwrap(), "00ff00");
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("zzzzzz").is_err());
    }
}
