//! Aggregation over the expense store
//!
//! Everything here is derived on demand from a borrowed [`ExpenseStore`]
//! and never stored. No operation can fail; an empty store yields zeros.
//!
//! # Example
//!
//! ```
//! use project_budget::models::ExpenseDraft;
//! use project_budget::reports::Aggregator;
//! use project_budget::store::ExpenseStore;
//!
//! let mut store = ExpenseStore::new();
//! store.set_budget("1000");
//! store.add_expense(&ExpenseDraft::new("Logo design", "Creative Services", "500"));
//!
//! let agg = Aggregator::new(&store);
//! assert_eq!(agg.budget_variance().to_string(), "500.00");
//! ```

pub mod category;
pub mod monthly;
pub mod summary;

pub use category::{aggregate_by_category, export_category_csv, CategoryAggregate};
pub use monthly::{aggregate_by_month, export_monthly_csv, month_label, MonthOrder, MonthlyAggregate};
pub use summary::{BudgetSummary, UsageStatus, DEFAULT_WARNING_THRESHOLD_PERCENT};

use crate::models::Money;
use crate::store::ExpenseStore;

/// Read-only view that derives totals from a store snapshot
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    store: &'a ExpenseStore,
    month_order: MonthOrder,
    warning_threshold_percent: u8,
}

impl<'a> Aggregator<'a> {
    pub fn new(store: &'a ExpenseStore) -> Self {
        Self {
            store,
            month_order: MonthOrder::default(),
            warning_threshold_percent: DEFAULT_WARNING_THRESHOLD_PERCENT,
        }
    }

    /// Use a different default ordering for [`Aggregator::by_month`]
    pub fn with_month_order(mut self, order: MonthOrder) -> Self {
        self.month_order = order;
        self
    }

    /// Use a different warning threshold for [`Aggregator::summary`]
    pub fn with_warning_threshold(mut self, percent: u8) -> Self {
        self.warning_threshold_percent = percent;
        self
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        self.store.expenses().iter().map(|e| e.amount).sum()
    }

    /// Budget minus total expenses; positive means under budget
    pub fn budget_variance(&self) -> Money {
        self.store.budget() - self.total_expenses()
    }

    /// Variance as a percentage of the budget, 0 when there is no budget
    pub fn budget_variance_percent(&self) -> f64 {
        self.budget_variance()
            .ratio_of(self.store.budget())
            .map(|r| r * 100.0)
            .unwrap_or(0.0)
    }

    /// Total expenses divided by the budget, 0 when there is no budget
    ///
    /// Not clamped: spending past the budget gives a ratio above 1.
    pub fn budget_usage_ratio(&self) -> f64 {
        self.total_expenses()
            .ratio_of(self.store.budget())
            .unwrap_or(0.0)
    }

    /// Per-category totals in the fixed category order, zero totals omitted
    pub fn by_category(&self) -> Vec<CategoryAggregate> {
        aggregate_by_category(self.store.expenses())
    }

    /// Per-month totals in the configured order
    pub fn by_month(&self) -> Vec<MonthlyAggregate> {
        self.by_month_ordered(self.month_order)
    }

    /// Per-month totals in an explicit order
    pub fn by_month_ordered(&self, order: MonthOrder) -> Vec<MonthlyAggregate> {
        aggregate_by_month(self.store.expenses(), order)
    }

    /// All headline numbers at once
    pub fn summary(&self) -> BudgetSummary {
        let budget = self.store.budget();
        let usage_ratio = self.budget_usage_ratio();
        BudgetSummary {
            budget,
            total_expenses: self.total_expenses(),
            variance: self.budget_variance(),
            variance_percent: self.budget_variance_percent(),
            usage_ratio,
            usage_status: UsageStatus::classify(budget, usage_ratio, self.warning_threshold_percent),
            expense_count: self.store.len(),
        }
    }
}
