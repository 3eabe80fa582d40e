use crate::commands::{BadgeMiss, CmdMessage, CmdResult, RenderedBadge};
use crate::error::{BadgeError, Result};
use crate::format::FormatOptions;
use crate::resolve::Resolver;
use crate::snippet::ParsedSnippet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct AddRequest {
    pub category: String,
    pub badge: String,
    pub style: Option<String>,
    pub link: Option<String>,
    pub html: bool,
}

/// Appends a badge to an existing file, on a line of its own.
///
/// The file must already exist; nothing is created. A badge miss writes
/// nothing and comes back as a miss with suggestions.
pub fn run(resolver: &Resolver<'_>, request: &AddRequest, file: &Path) -> Result<CmdResult> {
    if !file.is_file() {
        return Err(BadgeError::InvalidInput(format!(
            "'{}' does not exist or is not a file",
            file.display()
        )));
    }

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

    let mut handle = OpenOptions::new().append(true).open(file)?;
    write!(handle, "\n{}", options.select(&badge))?;
    tracing::debug!(file = %file.display(), badge = %resolved.id, "badge appended");

    result.add_message(CmdMessage::success(format!(
        "Added the {} badge to {}",
        resolved.label,
        file.display()
    )));

    Ok(result.with_badges(vec![RenderedBadge {
        category: resolved.category,
        id: resolved.id,
        label: resolved.label,
        badge,
    }]))
}
