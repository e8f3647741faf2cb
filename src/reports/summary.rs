//! Budget summary
//!
//! The headline numbers: budget, total spent, variance and how much of the
//! budget is used.

use serde::Serialize;
use std::io::Write;

use crate::error::BudgetResult;
use crate::models::{money, Money};

/// Default usage percentage at which a budget is flagged as nearly spent
pub const DEFAULT_WARNING_THRESHOLD_PERCENT: u8 = 80;

/// How the spending compares to the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageStatus {
    /// No budget set, so usage is undefined
    NoBudget,
    /// At or below the warning threshold
    OnTrack,
    /// Above the threshold but not over budget
    Warning,
    /// Spending exceeds the budget
    OverBudget,
}

impl UsageStatus {
    /// Classify a usage ratio (spent / budget)
    pub fn classify(budget: Money, ratio: f64, warning_threshold_percent: u8) -> Self {
        if budget.cents() <= 0 {
            Self::NoBudget
        } else if ratio > 1.0 {
            Self::OverBudget
        } else if ratio * 100.0 > f64::from(warning_threshold_percent) {
            Self::Warning
        } else {
            Self::OnTrack
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoBudget => "No budget set",
            Self::OnTrack => "On track",
            Self::Warning => "Nearly spent",
            Self::OverBudget => "Over budget",
        }
    }
}

/// Derived totals for the whole store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    #[serde(with = "money::units")]
    pub budget: Money,
    #[serde(with = "money::units")]
    pub total_expenses: Money,
    /// Budget minus total; positive means under budget
    #[serde(with = "money::units")]
    pub variance: Money,
    pub variance_percent: f64,
    /// Spent / budget, may exceed 1.0
    pub usage_ratio: f64,
    pub usage_status: UsageStatus,
    pub expense_count: usize,
}

impl BudgetSummary {
    /// Usage as a percentage clamped to 100, for progress bars
    pub fn usage_percent_clamped(&self) -> f64 {
        (self.usage_ratio * 100.0).min(100.0)
    }

    pub fn is_over_budget(&self) -> bool {
        self.variance.is_negative()
    }

    /// Write the summary as two-column CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> BudgetResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Metric", "Value"])?;
        csv.write_record(["Budget", self.budget.to_string().as_str()])?;
        csv.write_record(["Total Expenses", self.total_expenses.to_string().as_str()])?;
        csv.write_record(["Variance", self.variance.to_string().as_str()])?;
        csv.write_record(["Variance %", format!("{:.2}", self.variance_percent).as_str()])?;
        csv.write_record(["Usage %", format!("{:.2}", self.usage_ratio * 100.0).as_str()])?;
        csv.write_record(["Status", self.usage_status.label()])?;
        csv.write_record(["Expenses", self.expense_count.to_string().as_str()])?;
        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let budget = Money::from_cents(100000);
        assert_eq!(UsageStatus::classify(Money::zero(), 5.0, 80), UsageStatus::NoBudget);
        assert_eq!(UsageStatus::classify(budget, 0.0, 80), UsageStatus::OnTrack);
        assert_eq!(UsageStatus::classify(budget, 0.75, 80), UsageStatus::OnTrack);
        assert_eq!(UsageStatus::classify(budget, 0.81, 80), UsageStatus::Warning);
        assert_eq!(UsageStatus::classify(budget, 1.0, 80), UsageStatus::Warning);
        assert_eq!(UsageStatus::classify(budget, 1.01, 80), UsageStatus::OverBudget);
    }

    #[test]
    fn test_usage_clamp() {
        let summary = BudgetSummary {
            budget: Money::from_cents(10000),
            total_expenses: Money::from_cents(25000),
            variance: Money::from_cents(-15000),
            variance_percent: -150.0,
            usage_ratio: 2.5,
            usage_status: UsageStatus::OverBudget,
            expense_count: 3,
        };
        assert_eq!(summary.usage_percent_clamped(), 100.0);
        assert!(summary.is_over_budget());
    }
}
