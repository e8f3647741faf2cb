//! Audit entry data structures
//!
//! Each line of the audit log is one [`AuditEntry`]: a UTC timestamp and the
//! [`Change`] it records. Expense changes carry the whole expense, full UUID
//! included, so a deleted expense can be reconstructed from the log alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::money;
use crate::models::{Expense, Money};

/// A recorded change to the tracker's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Change {
    ExpenseAdded {
        expense: Expense,
    },
    ExpenseDeleted {
        expense: Expense,
    },
    BudgetSet {
        #[serde(with = "money::units")]
        before: Money,
        #[serde(with = "money::units")]
        after: Money,
    },
}

impl Change {
    /// Short upper-case label for history output
    pub fn action(&self) -> &'static str {
        match self {
            Change::ExpenseAdded { .. } => "ADDED",
            Change::ExpenseDeleted { .. } => "DELETED",
            Change::BudgetSet { .. } => "BUDGET",
        }
    }

    /// The expense involved, if any
    pub fn expense(&self) -> Option<&Expense> {
        match self {
            Change::ExpenseAdded { expense } | Change::ExpenseDeleted { expense } => Some(expense),
            Change::BudgetSet { .. } => None,
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub change: Change,
}

impl AuditEntry {
    pub fn new(change: Change) -> Self {
        Self {
            timestamp: Utc::now(),
            change,
        }
    }

    pub fn expense_added(expense: &Expense) -> Self {
        Self::new(Change::ExpenseAdded {
            expense: expense.clone(),
        })
    }

    pub fn expense_deleted(expense: &Expense) -> Self {
        Self::new(Change::ExpenseDeleted {
            expense: expense.clone(),
        })
    }

    pub fn budget_set(before: Money, after: Money) -> Self {
        Self::new(Change::BudgetSet { before, after })
    }

    /// One line for the history command
    pub fn format_human_readable(&self, symbol: &str) -> String {
        let detail = match &self.change {
            Change::ExpenseAdded { expense } | Change::ExpenseDeleted { expense } => format!(
                "{} \"{}\" {} {}",
                expense.id.as_uuid(),
                expense.name,
                expense.category,
                expense.amount.format_with_symbol(symbol)
            ),
            Change::BudgetSet { before, after } => format!(
                "{} -> {}",
                before.format_with_symbol(symbol),
                after.format_with_symbol(symbol)
            ),
        };

        format!(
            "[{}] {:<7} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.change.action(),
            detail
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDraft;
    use crate::store::ExpenseStore;
    use chrono::NaiveDate;

    fn sample_expense() -> Expense {
        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        ExpenseStore::new()
            .add_expense_on(
                &ExpenseDraft::new("Camera rental", "Equipment Rental", "250.50"),
                today,
            )
            .unwrap()
    }

    #[test]
    fn test_actions() {
        let expense = sample_expense();
        assert_eq!(AuditEntry::expense_added(&expense).change.action(), "ADDED");
        assert_eq!(AuditEntry::expense_deleted(&expense).change.action(), "DELETED");
        assert_eq!(
            AuditEntry::budget_set(Money::zero(), Money::from_cents(100)).change.action(),
            "BUDGET"
        );
    }

    #[test]
    fn test_expense_line_shows_full_id() {
        let expense = sample_expense();
        let line = AuditEntry::expense_added(&expense).format_human_readable("₪");

        assert!(line.contains("ADDED"));
        assert!(line.contains(&expense.id.as_uuid().to_string()));
        assert!(line.contains("\"Camera rental\""));
        assert!(line.contains("Equipment Rental"));
        assert!(line.contains("₪250.50"));
    }

    #[test]
    fn test_budget_line() {
        let entry = AuditEntry::budget_set(Money::zero(), Money::from_cents(100000));
        let line = entry.format_human_readable("$");
        assert!(line.contains("BUDGET"));
        assert!(line.ends_with("$0.00 -> $1000.00"));
        assert!(entry.change.expense().is_none());
    }

    #[test]
    fn test_serialization() {
        let expense = sample_expense();
        let entry = AuditEntry::expense_deleted(&expense);
        let line = serde_json::to_string(&entry).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(raw["change"]["event"], "expense_deleted");
        assert_eq!(
            raw["change"]["expense"]["id"],
            expense.id.as_uuid().to_string()
        );
        assert_eq!(raw["change"]["expense"]["amount"], 250.5);

        let back: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(back, entry);

        let budget = serde_json::to_value(AuditEntry::budget_set(
            Money::from_cents(5000),
            Money::zero(),
        ))
        .unwrap();
        assert_eq!(budget["change"]["event"], "budget_set");
        assert_eq!(budget["change"]["before"], 50.0);
        assert_eq!(budget["change"]["after"], 0.0);
    }
}
