//! Free-text search across the whole catalog.
//!
//! Unlike a lookup there is no category to resolve first: every badge is a
//! candidate and the keyword is matched against badge identifiers. Substring
//! hits always make the list, ranked by how much of the identifier they cover;
//! near-misses come from edit distance.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::suggest::suggest;

pub fn run(catalog: &Catalog, keyword: &str, limit: usize, threshold: f64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if keyword.trim().is_empty() {
        result.add_message(CmdMessage::warning("Search keyword is empty."));
        return Ok(result);
    }

    let matches = suggest(&catalog.candidates(), keyword, limit, threshold);
    tracing::debug!(keyword, matches = matches.len(), "search finished");

    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No badges found for '{}'.",
            keyword.trim()
        )));
    }

    Ok(result.with_suggestions(matches))
}
