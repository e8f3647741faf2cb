//! JSON export
//!
//! A snapshot of the whole store plus its derived figures, versioned so a
//! reader can tell which layout it is looking at.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{money, Expense, Money};
use crate::reports::{Aggregator, BudgetSummary, CategoryAggregate, MonthlyAggregate};
use crate::store::ExpenseStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full snapshot of budget data
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub currency_symbol: String,

    #[serde(with = "money::units")]
    pub budget: Money,

    /// All expenses in insertion order
    pub expenses: Vec<Expense>,

    pub summary: BudgetSummary,

    /// Spending per category (fixed category order, zero totals omitted)
    pub categories: Vec<CategoryAggregate>,

    /// Spending per month, in the configured order
    pub months: Vec<MonthlyAggregate>,
}

impl SnapshotExport {
    /// Build a snapshot of the current store
    pub fn from_store(store: &ExpenseStore, settings: &Settings) -> Self {
        let aggregator = Aggregator::new(store)
            .with_month_order(settings.month_order)
            .with_warning_threshold(settings.warning_threshold_percent);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency_symbol: settings.currency_symbol.clone(),
            budget: store.budget(),
            expenses: store.expenses().to_vec(),
            summary: aggregator.summary(),
            categories: aggregator.by_category(),
            months: aggregator.by_month(),
        }
    }
}

/// Export a snapshot to JSON
pub fn export_snapshot_json<W: Write>(
    store: &ExpenseStore,
    settings: &Settings,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    let export = SnapshotExport::from_store(store, settings);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
