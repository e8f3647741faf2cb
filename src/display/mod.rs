//! Display formatting for terminal output
//!
//! Plain-text renderings used by the CLI: expense tables and report views.

pub mod expense;
pub mod report;

pub use expense::{
    format_category_list, format_date, format_expense_details, format_expense_table,
};
pub use report::{format_category_breakdown, format_monthly_breakdown, format_summary};
