//! Spending by category
//!
//! One row per category that has a non-zero total, in the fixed category
//! order rather than insertion order.

use serde::Serialize;
use std::io::Write;

use crate::error::BudgetResult;
use crate::models::{money, Expense, ExpenseCategory, Money};

/// Total and count of the expenses sharing one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAggregate {
    pub category: ExpenseCategory,
    #[serde(with = "money::units")]
    pub total: Money,
    pub count: usize,
}

impl CategoryAggregate {
    /// Share of the given overall total, in percent
    pub fn percent_of(&self, overall: Money) -> f64 {
        self.total.ratio_of(overall).map(|r| r * 100.0).unwrap_or(0.0)
    }
}

/// Group expenses by category, omitting zero totals
pub fn aggregate_by_category(expenses: &[Expense]) -> Vec<CategoryAggregate> {
    ExpenseCategory::ALL
        .iter()
        .map(|&category| {
            let (total, count) = expenses
                .iter()
                .filter(|e| e.category == category)
                .fold((Money::zero(), 0), |(total, count), e| {
                    (total + e.amount, count + 1)
                });
            CategoryAggregate {
                category,
                total,
                count,
            }
        })
        .filter(|agg| !agg.total.is_zero())
        .collect()
}

/// Write category aggregates as CSV
pub fn export_category_csv<W: Write>(rows: &[CategoryAggregate], writer: W) -> BudgetResult<()> {
    let overall: Money = rows.iter().map(|r| r.total).sum();
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Category", "Total", "Count", "Percent"])?;
    for row in rows {
        csv.write_record([
            row.category.label().to_string(),
            row.total.to_string(),
            row.count.to_string(),
            format!("{:.1}", row.percent_of(overall)),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
