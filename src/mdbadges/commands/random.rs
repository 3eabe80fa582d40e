use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, RenderedBadge};
use crate::error::{BadgeError, Result};
use crate::format::format_badge;
use crate::normalize::display_label;
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks one badge uniformly from the whole catalog.
pub fn run<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
    style: Option<&str>,
) -> Result<CmdResult> {
    let candidates = catalog.candidates();
    let picked = candidates
        .choose(rng)
        .ok_or_else(|| BadgeError::Catalog("catalog has no badges".into()))?;

    tracing::debug!(category = picked.category, badge = picked.id, "random pick");

    let badge = format_badge(picked.value, style, None)?;
    let mut result = CmdResult::default();
    for warning in &badge.warnings {
        result.add_message(CmdMessage::warning(warning.to_string()));
    }

    Ok(result.with_badges(vec![RenderedBadge {
        category: picked.category.to_string(),
        id: picked.id.to_string(),
        label: display_label(picked.id),
        badge,
    }]))
}
