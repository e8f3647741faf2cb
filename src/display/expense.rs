//! Expense display formatting
//!
//! Table output for expense lists (via `tabled`) and detail views.

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, ExpenseCategory, Money};

use super::report::truncate;

const NAME_WIDTH: usize = 32;
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a date, falling back to ISO form if the pattern cannot be rendered
pub fn format_date(date: NaiveDate, fmt: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(fmt)).is_err() {
        out.clear();
        let _ = write!(out, "{}", date.format(FALLBACK_DATE_FORMAT));
    }
    out
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table with a total line
pub fn format_expense_table(expenses: &[Expense], symbol: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: format_date(e.date, date_format),
        name: truncate(&e.name, NAME_WIDTH),
        category: e.category.label(),
        amount: e.amount.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    format!(
        "{}\n{} expense(s), total {}\n",
        table,
        expenses.len(),
        total.format_with_symbol(symbol)
    )
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("Name:     {}\n", expense.name));
    output.push_str(&format!("Category: {}\n", expense.category));
    output.push_str(&format!("Amount:   {}\n", expense.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Date:     {}\n", expense.date.format("%Y-%m-%d")));

    output
}

/// List the fixed categories
pub fn format_category_list() -> String {
    ExpenseCategory::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:>2}. {}\n", i + 1, c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDraft;
    use crate::store::ExpenseStore;
    use chrono::NaiveDate;

    fn sample_store() -> ExpenseStore {
        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let mut store = ExpenseStore::new();
        store
            .add_expense_on(
                &ExpenseDraft::new("Camera rental", "Equipment Rental", "250.50")
                    .with_date("2024-03-01"),
                today,
            )
            .unwrap();
        store
            .add_expense_on(&ExpenseDraft::new("Logo design", "Creative Services", "500"), today)
            .unwrap();
        store
    }

    #[test]
    fn test_expense_table() {
        let store = sample_store();
        let table = format_expense_table(store.expenses(), "₪", "%Y-%m-%d");

        assert!(table.contains("Camera rental"));
        assert!(table.contains("Equipment Rental"));
        assert!(table.contains("₪250.50"));
        assert!(table.contains("2024-03-01"));
        assert!(table.contains(&store.expenses()[0].id.to_string()));
        assert!(table.contains("2 expense(s), total ₪750.50"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "₪", "%Y-%m-%d"), "No expenses found.\n");
    }

    #[test]
    fn test_expense_details() {
        let store = sample_store();
        let details = format_expense_details(&store.expenses()[1], "$");

        assert!(details.contains("Name:     Logo design"));
        assert!(details.contains("Category: Creative Services"));
        assert!(details.contains("Amount:   $500.00"));
        assert!(details.contains("Date:     2024-03-20"));
    }

    #[test]
    fn test_unrenderable_date_format_falls_back() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_date(date, "%d/%m/%Y"), "01/03/2024");
        assert_eq!(format_date(date, "%Q"), "2024-03-01");

        let store = sample_store();
        let table = format_expense_table(store.expenses(), "₪", "%Q");
        assert!(table.contains("2024-03-01"));
    }

    #[test]
    fn test_category_list() {
        let list = format_category_list();
        assert_eq!(list.lines().count(), 11);
        assert!(list.starts_with(" 1. Video Production"));
        assert!(list.contains("11. Other"));
    }
}
