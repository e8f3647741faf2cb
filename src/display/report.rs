//! Report formatting for terminal output
//!
//! Text renderings of the budget summary and the category and monthly
//! breakdowns, plus the small helpers they share.

use crate::models::Money;
use crate::reports::{BudgetSummary, CategoryAggregate, MonthlyAggregate, UsageStatus};

const REPORT_WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct.abs() < 0.1 && pct != 0.0 {
        format!("{:.2}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Right-align text in a field of given width
pub fn right_align(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Left-align text in a field of given width
pub fn left_align(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Status marker shown next to the usage line
fn status_marker(status: UsageStatus) -> &'static str {
    match status {
        UsageStatus::NoBudget => "-",
        UsageStatus::OnTrack => "✓",
        UsageStatus::Warning => "!",
        UsageStatus::OverBudget => "✗",
    }
}

/// Format the financial summary
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let money = |m: Money| right_align(&m.format_with_symbol(symbol), 16);
    let mut output = String::new();

    output.push_str("Financial Summary\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    output.push_str(&format!("{}{}\n", left_align("Budget", 20), money(summary.budget)));
    output.push_str(&format!(
        "{}{}\n",
        left_align("Total Expenses", 20),
        money(summary.total_expenses)
    ));
    output.push_str(&format!(
        "{}{}  ({})\n",
        left_align("Remaining", 20),
        money(summary.variance),
        format_percentage(summary.variance_percent)
    ));
    output.push_str(&format!(
        "{}{}\n",
        left_align("Expenses", 20),
        right_align(&summary.expense_count.to_string(), 16)
    ));

    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    let used = summary.usage_ratio * 100.0;
    output.push_str(&format!(
        "Budget Usage  {} {} {} {}\n",
        format_bar(summary.usage_percent_clamped(), 100.0, BAR_WIDTH),
        right_align(&format_percentage(used), 7),
        status_marker(summary.usage_status),
        summary.usage_status.label()
    ));

    output
}

/// Format spending by category with bars scaled to the largest category
pub fn format_category_breakdown(rows: &[CategoryAggregate], symbol: &str) -> String {
    if rows.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let overall: Money = rows.iter().map(|r| r.total).sum();
    let max = rows.iter().map(|r| r.total.to_f64()).fold(0.0, f64::max);
    let mut output = String::new();

    output.push_str("Spending by Category\n");
    output.push_str(&separator(REPORT_WIDTH + 16));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{} {} {} {} {:>3}x\n",
            left_align(&truncate(row.category.label(), 24), 24),
            format_bar(row.total.to_f64(), max, BAR_WIDTH),
            right_align(&row.total.format_with_symbol(symbol), 14),
            right_align(&format_percentage(row.percent_of(overall)), 7),
            row.count
        ));
    }

    output.push_str(&separator(REPORT_WIDTH + 16));
    output.push('\n');
    output.push_str(&format!(
        "{} {} {}\n",
        left_align("Total", 24),
        " ".repeat(BAR_WIDTH),
        right_align(&overall.format_with_symbol(symbol), 14)
    ));

    output
}

/// Format spending by month with bars scaled to the largest month
pub fn format_monthly_breakdown(rows: &[MonthlyAggregate], symbol: &str) -> String {
    if rows.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let max = rows.iter().map(|r| r.total.to_f64()).fold(0.0, f64::max);
    let mut output = String::new();

    output.push_str("Monthly Spending\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{} {} {} {:>3}x\n",
            left_align(&row.label, 10),
            format_bar(row.total.to_f64(), max, BAR_WIDTH),
            right_align(&row.total.format_with_symbol(symbol), 14),
            row.count
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;
    use crate::reports::UsageStatus;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(24.96), "25.0%");
        assert_eq!(format_percentage(-150.0), "-150.0%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "░░░░");
        assert_eq!(format_bar(300.0, 100.0, 4), "████");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("מצלמה להשכרה", 6), "מצל...");
    }

    #[test]
    fn test_alignment() {
        assert_eq!(right_align("abc", 5), "  abc");
        assert_eq!(left_align("abc", 5), "abc  ");
        assert_eq!(left_align("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_format_summary() {
        let summary = BudgetSummary {
            budget: Money::from_cents(100000),
            total_expenses: Money::from_cents(75050),
            variance: Money::from_cents(24950),
            variance_percent: 24.95,
            usage_ratio: 0.7505,
            usage_status: UsageStatus::OnTrack,
            expense_count: 2,
        };

        let text = format_summary(&summary, "₪");
        assert!(text.contains("₪1000.00"));
        assert!(text.contains("₪750.50"));
        assert!(text.contains("₪249.50"));
        assert!(text.contains("On track"));
    }

    #[test]
    fn test_format_category_breakdown() {
        let rows = vec![
            CategoryAggregate {
                category: ExpenseCategory::CreativeServices,
                total: Money::from_cents(50000),
                count: 1,
            },
            CategoryAggregate {
                category: ExpenseCategory::EquipmentRental,
                total: Money::from_cents(25050),
                count: 1,
            },
        ];

        let text = format_category_breakdown(&rows, "$");
        let creative = text.find("Creative Services").unwrap();
        let equipment = text.find("Equipment Rental").unwrap();
        assert!(creative < equipment);
        assert!(text.contains("$750.50"));
        assert_eq!(format_category_breakdown(&[], "$"), "No expenses recorded.\n");
    }

    #[test]
    fn test_format_monthly_breakdown() {
        let rows = vec![MonthlyAggregate {
            year: 2024,
            month: 3,
            label: "Mar 2024".into(),
            total: Money::from_cents(75050),
            count: 2,
        }];

        let text = format_monthly_breakdown(&rows, "₪");
        assert!(text.contains("Mar 2024"));
        assert!(text.contains("₪750.50"));
    }
}
