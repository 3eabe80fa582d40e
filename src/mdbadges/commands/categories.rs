use crate::catalog::Catalog;
use crate::commands::{CategorySummary, CmdResult};
use crate::error::Result;

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let categories = catalog
        .categories()
        .iter()
        .map(|category| CategorySummary {
            id: category.id.clone(),
            label: category.label(),
            badge_count: category.badges.len(),
        })
        .collect();

    Ok(CmdResult::default().with_categories(categories))
}
