//! Spending by calendar month
//!
//! Groups expenses by the year and month of their own date (not when they
//! were recorded) and labels each group like "Mar 2024".

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;

use crate::error::BudgetResult;
use crate::models::{money, Expense, Money};

/// Label format for month groups: abbreviated month name and year
pub const MONTH_LABEL_FORMAT: &str = "%b %Y";

/// Ordering of monthly aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MonthOrder {
    /// Oldest month first
    #[default]
    Chronological,
    /// In the order each month first appears in the expense list
    FirstSeen,
}

/// Total spent in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyAggregate {
    pub year: i32,
    pub month: u32,
    pub label: String,
    #[serde(with = "money::units")]
    pub total: Money,
    pub count: usize,
}

/// Group expenses by month
pub fn aggregate_by_month(expenses: &[Expense], order: MonthOrder) -> Vec<MonthlyAggregate> {
    let mut rows: Vec<MonthlyAggregate> = Vec::new();
    let mut index: HashMap<(i32, u32), usize> = HashMap::new();

    for expense in expenses {
        let key = expense.year_month();
        let slot = *index.entry(key).or_insert_with(|| {
            rows.push(MonthlyAggregate {
                year: key.0,
                month: key.1,
                label: month_label(key.0, key.1),
                total: Money::zero(),
                count: 0,
            });
            rows.len() - 1
        });
        rows[slot].total += expense.amount;
        rows[slot].count += 1;
    }

    if order == MonthOrder::Chronological {
        rows.sort_by_key(|r| (r.year, r.month));
    }
    rows
}

/// "Mar 2024" style label for a year and month
pub fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format(MONTH_LABEL_FORMAT).to_string())
        .unwrap_or_else(|| format!("{:04}-{:02}", year, month))
}

/// Write monthly aggregates as CSV
pub fn export_monthly_csv<W: Write>(rows: &[MonthlyAggregate], writer: W) -> BudgetResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Month", "Total", "Count"])?;
    for row in rows {
        csv.write_record([row.label.clone(), row.total.to_string(), row.count.to_string()])?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDraft;

    fn expense(date: &str, amount: &str) -> Expense {
        ExpenseDraft::new("x", "Other", amount)
            .with_date(date)
            .validate(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
            .unwrap()
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(2024, 3), "Mar 2024");
        assert_eq!(month_label(2023, 12), "Dec 2023");
    }

    #[test]
    fn test_groups_by_month_and_year() {
        let expenses = vec![
            expense("2024-03-01", "250.50"),
            expense("2024-03-15", "500"),
            expense("2023-03-15", "1"),
        ];
        let rows = aggregate_by_month(&expenses, MonthOrder::FirstSeen);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Mar 2024");
        assert_eq!(rows[0].total, Money::from_cents(75050));
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[1].label, "Mar 2023");
    }

    #[test]
    fn test_first_seen_order() {
        let expenses = vec![
            expense("2024-05-02", "1"),
            expense("2024-01-10", "2"),
            expense("2024-05-20", "3"),
        ];
        let labels: Vec<_> = aggregate_by_month(&expenses, MonthOrder::FirstSeen)
            .into_iter()
            .map(|r| r.label)
            .collect();
        assert_eq!(labels, ["May 2024", "Jan 2024"]);
    }

    #[test]
    fn test_chronological_order() {
        let expenses = vec![
            expense("2024-05-02", "1"),
            expense("2023-11-10", "2"),
            expense("2024-01-20", "3"),
        ];
        let labels: Vec<_> = aggregate_by_month(&expenses, MonthOrder::Chronological)
            .into_iter()
            .map(|r| r.label)
            .collect();
        assert_eq!(labels, ["Nov 2023", "Jan 2024", "May 2024"]);
    }

    #[test]
    fn test_month_order_serde() {
        assert_eq!(
            serde_json::to_string(&MonthOrder::FirstSeen).unwrap(),
            r#""first-seen""#
        );
        let parsed: MonthOrder = serde_json::from_str(r#""chronological""#).unwrap();
        assert_eq!(parsed, MonthOrder::Chronological);
    }

    #[test]
    fn test_csv_export() {
        let rows = aggregate_by_month(&[expense("2024-03-01", "12.5")], MonthOrder::default());
        let mut out = Vec::new();
        export_monthly_csv(&rows, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Month,Total,Count\nMar 2024,12.50,1\n"
        );
    }
}
