//! YAML export
//!
//! Same snapshot as the JSON export, in a form that is easier to read.

use std::io::Write;

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::json::SnapshotExport;
use crate::store::ExpenseStore;

/// Export a snapshot to YAML with a short header comment
pub fn export_snapshot_yaml<W: Write>(
    store: &ExpenseStore,
    settings: &Settings,
    writer: &mut W,
) -> BudgetResult<()> {
    let export = SnapshotExport::from_store(store, settings);
    let io_err = |e: std::io::Error| BudgetError::Export(e.to_string());

    writeln!(writer, "# Project budget export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDraft;
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let mut store = ExpenseStore::new();
        store.set_budget("200");
        store
            .add_expense_on(&ExpenseDraft::new("Studio day", "Location & Studio", "120"), today)
            .unwrap();

        let mut output = Vec::new();
        export_snapshot_yaml(&store, &Settings::default(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Project budget export"));
        assert!(text.contains("name: Studio day"));
        assert!(text.contains("Location & Studio"));

        let body: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(body["budget"].as_f64(), Some(200.0));
        assert_eq!(body["summary"]["expense_count"].as_u64(), Some(1));
    }
}
