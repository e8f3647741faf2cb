//! CSV export of expense rows

use std::io::Write;

use crate::error::BudgetResult;
use crate::models::Expense;

/// Export expenses to CSV in insertion order
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> BudgetResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Name", "Category", "Amount"])?;

    for expense in expenses {
        csv.write_record([
            expense.id.as_uuid().to_string(),
            expense.date.to_string(),
            expense.name.clone(),
            expense.category.label().to_string(),
            expense.amount.to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}
