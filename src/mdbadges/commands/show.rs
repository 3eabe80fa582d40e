use crate::commands::{BadgeListing, CmdMessage, CmdResult};
use crate::error::Result;
use crate::resolve::Resolver;

/// Lists the badges available in one category.
pub fn run(resolver: &Resolver<'_>, category: &str) -> Result<CmdResult> {
    let category = resolver.resolve_category::<&str>(category, &[])?;

    let listings: Vec<BadgeListing> = category
        .badges()
        .iter()
        .map(|entry| BadgeListing {
            category: category.id().to_string(),
            id: entry.id.clone(),
            label: entry.label(),
        })
        .collect();

    let mut result = CmdResult::default();
    if listings.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No badges in '{}'.",
            category.label()
        )));
    }
    Ok(result.with_listings(listings))
}
