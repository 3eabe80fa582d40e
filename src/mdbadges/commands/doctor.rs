use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let issues = catalog.validate();
    let mut result = CmdResult::default();

    if issues.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "Catalog OK: {} categories, {} badges.",
            catalog.categories().len(),
            catalog.badge_count()
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Found {} catalog problem(s):",
            issues.len()
        )));
        for issue in issues {
            result.add_message(CmdMessage::error(format!("  - {}", issue)));
        }
    }

    Ok(result)
}
