//! CLI command for the audit history

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    count: usize,
) -> BudgetResult<()> {
    let entries = storage.audit().read_recent(count)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable(&settings.currency_symbol));
    }

    Ok(())
}
