//! Structural decoding of catalog snippets.
//!
//! A snippet is CommonMark: usually an image wrapped in a link,
//! `[![Alt](image-url)](#)`. It is read with a real Markdown parser so that
//! nothing else in the crate has to scan raw snippet text.

use crate::error::{BadgeError, Result};
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use std::ops::Range;

/// The two pieces of a snippet every renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSnippet {
    pub alt: String,
    pub url: String,
}

/// Destination of an image or link plus the source span of its bracketed text.
struct Found {
    url: String,
    text: Option<Range<usize>>,
}

impl Found {
    fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            text: None,
        }
    }

    fn widen(&mut self, range: Range<usize>) {
        self.text = Some(match self.text.take() {
            Some(text) => text.start.min(range.start)..text.end.max(range.end),
            None => range,
        });
    }

    fn into_parsed(self, source: &str) -> ParsedSnippet {
        let alt = self
            .text
            .and_then(|range| source.get(range))
            .unwrap_or_default()
            .to_string();
        ParsedSnippet { alt, url: self.url }
    }
}

/// Extracts alt text and image URL from a snippet.
///
/// The image inside the snippet wins. A snippet that is a plain link
/// (`[Alt](url)`) falls back to the link text and destination, with a leading
/// `!` dropped from the text. Alt text is taken verbatim from between the
/// brackets, so `[![*nix*](url)](#)` keeps its asterisks.
pub fn parse_snippet(snippet: &str) -> Result<ParsedSnippet> {
    let mut image: Option<Found> = None;
    let mut link: Option<Found> = None;
    let mut in_image = false;
    let mut in_link = false;

    for (event, range) in Parser::new(snippet).into_offset_iter() {
        match event {
            Event::Start(Tag::Image { dest_url, .. }) => {
                if image.is_some() {
                    return Err(malformed(snippet, "more than one image"));
                }
                image = Some(Found::new(&dest_url));
                in_image = true;
            }
            Event::End(TagEnd::Image) => in_image = false,
            Event::Start(Tag::Link { dest_url, .. }) if link.is_none() => {
                link = Some(Found::new(&dest_url));
                in_link = true;
            }
            Event::End(TagEnd::Link) => in_link = false,
            _ if in_image => {
                if let Some(img) = image.as_mut() {
                    img.widen(range);
                }
            }
            _ if in_link => {
                if let Some(lnk) = link.as_mut() {
                    lnk.widen(range);
                }
            }
            _ => {}
        }
    }

    let parsed = match (image, link) {
        (Some(img), _) => img.into_parsed(snippet),
        (None, Some(lnk)) => {
            let mut parsed = lnk.into_parsed(snippet);
            parsed.alt = parsed.alt.trim_start_matches('!').to_string();
            parsed
        }
        (None, None) => return Err(malformed(snippet, "no [alt](url) construct")),
    };

    if parsed.alt.trim().is_empty() {
        return Err(malformed(snippet, "empty alt text"));
    }
    if parsed.url.trim().is_empty() {
        return Err(malformed(snippet, "empty url"));
    }
    Ok(parsed)
}

fn malformed(snippet: &str, reason: &str) -> BadgeError {
    BadgeError::MalformedSnippet {
        snippet: snippet.to_string(),
        reason: reason.to_string(),
    }
}
