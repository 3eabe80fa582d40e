use crate::commands::{BadgeMiss, CmdMessage, CmdResult, RenderedBadge};
use crate::error::{BadgeError, Result};
use crate::format::FormatOptions;
use crate::resolve::Resolver;
use crate::snippet::ParsedSnippet;

#[derive(Debug, Clone, Default)]
pub struct CopyRequest {
    pub category: String,
    pub badge: String,
    pub style: Option<String>,
    pub link: Option<String>,
    pub html: bool,
}

/// Resolves one badge and hands its text to `sink`, normally the system
/// clipboard. A miss never reaches the sink.
pub fn run<F>(resolver: &Resolver<'_>, request: &CopyRequest, sink: F) -> Result<CmdResult>
where
    F: FnOnce(&str) -> Result<()>,
{
    let category = resolver.resolve_category(&request.category, &[&request.badge])?;
    let mut result = CmdResult::default();

    let resolved = match resolver.resolve_badge(category, &request.badge) {
        Ok(resolved) => resolved,
        Err(BadgeError::BadgeNotFound {
            category,
            suggestions,
            ..
        }) => {
            result.misses.push(BadgeMiss::new(
                resolver,
                category,
                &request.badge,
                suggestions,
            ));
            return Ok(result);
        }
        Err(err) => return Err(err),
    };

    let parsed = ParsedSnippet {
        alt: resolved.alt,
        url: resolved.url,
    };
    let options = FormatOptions {
        style: request.style.clone(),
        link: request.link.clone(),
        html: request.html,
    };
    let badge = options.render(&parsed);
    for warning in &badge.warnings {
        result.add_message(CmdMessage::warning(warning.to_string()));
    }

    sink(options.select(&badge))?;
    result.add_message(CmdMessage::success(format!(
        "Copied the {} badge to the clipboard.",
        resolved.label
    )));

    Ok(result.with_badges(vec![RenderedBadge {
        category: resolved.category,
        id: resolved.id,
        label: resolved.label,
        badge,
    }]))
}
