//! # Badge Formatter
//!
//! Turns a catalog snippet into the two outputs users paste into READMEs:
//!
//! ```text
//! Markdown: [![Discord](https://img.shields.io/badge/...&style=flat)](https://discord.gg/x)
//! HTML:     <a href="https://discord.gg/x">
//!             <img src="https://img.shields.io/badge/...&amp;style=flat" alt="Discord">
//!           </a>
//! ```
//!
//! Bad options never abort formatting. An unknown style is dropped, and a link
//! that is not an absolute URL is left out of the HTML. Both come back as
//! [`FormatWarning`]s next to the output. The only hard failure is a snippet
//! that cannot be decoded, which points at bad catalog data.

use crate::error::{BadgeError, Result};
use crate::snippet::{parse_snippet, ParsedSnippet};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Styles Shields.io understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeStyle {
    Flat,
    FlatSquare,
    Plastic,
    Social,
    ForTheBadge,
}

impl BadgeStyle {
    pub const ALL: [BadgeStyle; 5] = [
        BadgeStyle::Flat,
        BadgeStyle::FlatSquare,
        BadgeStyle::Plastic,
        BadgeStyle::Social,
        BadgeStyle::ForTheBadge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeStyle::Flat => "flat",
            BadgeStyle::FlatSquare => "flat-square",
            BadgeStyle::Plastic => "plastic",
            BadgeStyle::Social => "social",
            BadgeStyle::ForTheBadge => "for-the-badge",
        }
    }
}

impl fmt::Display for BadgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeStyle {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        BadgeStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == wanted)
            .ok_or_else(|| BadgeError::InvalidStyle(s.to_string()))
    }
}

/// Advisory signals returned with an otherwise successful format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatWarning {
    InvalidStyle(String),
    InvalidLink(String),
}

impl fmt::Display for FormatWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatWarning::InvalidStyle(style) => write!(
                f,
                "An invalid style '{}' was ignored. Available styles are {}",
                style,
                BadgeStyle::ALL.map(|s| s.as_str()).join(", ")
            ),
            FormatWarning::InvalidLink(link) => write!(
                f,
                "'{}' is not a valid link and was left out of the HTML",
                link
            ),
        }
    }
}

/// What the caller wants rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub style: Option<String>,
    pub link: Option<String>,
    pub html: bool,
}

impl FormatOptions {
    pub fn render(&self, parsed: &ParsedSnippet) -> FormattedBadge {
        format_parsed(parsed, self.style.as_deref(), self.link.as_deref())
    }

    /// The text for the selected mode.
    pub fn select<'b>(&self, badge: &'b FormattedBadge) -> &'b str {
        badge.output(self.html)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedBadge {
    pub alt: String,
    /// Image URL including the style parameter, if one was applied.
    pub image_url: String,
    pub markdown: String,
    pub html: String,
    #[serde(skip)]
    pub warnings: Vec<FormatWarning>,
}

impl FormattedBadge {
    /// The representation selected by `html`.
    pub fn output(&self, html: bool) -> &str {
        if html {
            &self.html
        } else {
            &self.markdown
        }
    }
}

/// Decodes `snippet` and renders it. Empty `style`/`link` count as absent.
pub fn format_badge(
    snippet: &str,
    style: Option<&str>,
    link: Option<&str>,
) -> Result<FormattedBadge> {
    let parsed = parse_snippet(snippet)?;
    Ok(format_parsed(&parsed, style, link))
}

/// Renders an already-decoded badge.
pub fn format_parsed(
    parsed: &ParsedSnippet,
    style: Option<&str>,
    link: Option<&str>,
) -> FormattedBadge {
    let mut warnings = Vec::new();

    let style = match non_empty(style) {
        Some(raw) => match raw.parse::<BadgeStyle>() {
            Ok(style) => Some(style),
            Err(_) => {
                warnings.push(FormatWarning::InvalidStyle(raw.to_string()));
                None
            }
        },
        None => None,
    };

    let image_url = match style {
        Some(style) => with_query_param(&parsed.url, "style", style.as_str()),
        None => parsed.url.clone(),
    };

    let link = non_empty(link);
    let markdown = format!(
        "[![{}]({})]({})",
        parsed.alt,
        image_url,
        link.unwrap_or("#")
    );

    let img = format!(
        "<img src=\"{}\" alt=\"{}\">",
        escape_html(&image_url),
        escape_html(&parsed.alt)
    );
    let html = match link {
        Some(link) if is_valid_link(link) => {
            format!("<a href=\"{}\">\n  {}\n</a>", escape_html(link), img)
        }
        Some(link) => {
            warnings.push(FormatWarning::InvalidLink(link.to_string()));
            img
        }
        None => img,
    };

    FormattedBadge {
        alt: parsed.alt.clone(),
        image_url,
        markdown,
        html,
        warnings,
    }
}

/// Escapes text for use inside an HTML attribute value.
pub fn escape_html(unsafe_text: &str) -> String {
    let mut escaped = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Appends `key=value` to a URL, starting a query string if there is none.
pub fn with_query_param(url: &str, key: &str, value: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", url, separator, key, value)
}

/// True for absolute URLs (`https://...`, `mailto:...`).
pub fn is_valid_link(link: &str) -> bool {
    url::Url::parse(link).is_ok()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
