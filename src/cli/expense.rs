//! CLI commands for expenses

use chrono::{Datelike, Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_category_list, format_expense_details, format_expense_table};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, ExpenseCategory, ExpenseDraft};
use crate::services::TrackerService;
use crate::storage::Storage;
use crate::store::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        name: String,

        /// Amount (e.g. 250.50)
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Category (e.g. "Equipment Rental" or equipment-rental)
        #[arg(short, long)]
        category: String,

        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense by id
    #[command(alias = "rm")]
    Delete {
        /// Expense id: full UUID, short form (exp-1a2b3c4d) or a unique prefix
        id: String,
    },

    /// List expenses
    #[command(alias = "ls")]
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only show this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List the available categories
    Categories,
}

/// Handle expense commands
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    store: &mut ExpenseStore,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let service = TrackerService::new(storage, settings);

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            date,
        } => {
            let mut draft = ExpenseDraft::new(name, resolve_category(&category), amount);
            draft.date = date;

            let today = Local::now().date_naive();
            match service.add_expense_on(store, &draft, today) {
                Some(expense) => {
                    println!("Added expense:");
                    print!("{}", format_expense_details(&expense, &settings.currency_symbol));
                }
                None => {
                    let reason = draft
                        .check(today)
                        .err()
                        .map(|r| r.to_string())
                        .unwrap_or_else(|| "rejected".to_string());
                    println!("Expense not added: {}", reason);
                }
            }
        }

        ExpenseCommands::Delete { id } => match store.resolve_id(&id)? {
            Some(expense_id) => {
                if let Some(expense) = service.delete_expense(store, expense_id) {
                    println!(
                        "Deleted expense {} ({}, {})",
                        expense.id,
                        expense.name,
                        expense.amount.format_with_symbol(&settings.currency_symbol)
                    );
                }
            }
            None => println!("No expense matches '{}'; nothing deleted.", id.trim()),
        },

        ExpenseCommands::List { category, month } => {
            let category = category
                .as_deref()
                .map(|c| {
                    resolve_category(c)
                        .parse::<ExpenseCategory>()
                        .map_err(|e| BudgetError::Validation(e.to_string()))
                })
                .transpose()?;
            let month = month.as_deref().map(parse_month).transpose()?;

            let expenses: Vec<Expense> = store
                .expenses()
                .iter()
                .filter(|e| category.map_or(true, |c| e.category == c))
                .filter(|e| month.map_or(true, |m| e.year_month() == m))
                .cloned()
                .collect();

            print!(
                "{}",
                format_expense_table(&expenses, &settings.currency_symbol, &settings.date_format)
            );
        }

        ExpenseCommands::Categories => {
            print!("{}", format_category_list());
        }
    }

    Ok(())
}

/// Map shorthand such as `equipment-rental` or `video production` to the
/// category label. Input that matches no category is returned unchanged so
/// validation can reject it.
fn resolve_category(input: &str) -> String {
    let key = |s: &str| -> String {
        s.chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect()
    };
    let wanted = key(input);

    ExpenseCategory::ALL
        .iter()
        .find(|c| !wanted.is_empty() && key(c.label()) == wanted)
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| input.to_string())
}

/// Parse `YYYY-MM` into a (year, month) key
fn parse_month(text: &str) -> BudgetResult<(i32, u32)> {
    NaiveDate::parse_from_str(&format!("{}-01", text.trim()), "%Y-%m-%d")
        .map(|d| (d.year(), d.month()))
        .map_err(|_| {
            BudgetError::Validation(format!(
                "Invalid month '{}'. Use YYYY-MM (e.g., 2024-03)",
                text
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn add(name: &str, amount: &str, category: &str) -> ExpenseCommands {
        ExpenseCommands::Add {
            name: name.into(),
            amount: amount.into(),
            category: category.into(),
            date: Some("2024-03-01".into()),
        }
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-03").unwrap(), (2024, 3));
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("March").is_err());
    }

    #[test]
    fn test_resolve_category() {
        assert_eq!(resolve_category("equipment-rental"), "Equipment Rental");
        assert_eq!(resolve_category("VIDEO PRODUCTION"), "Video Production");
        assert_eq!(resolve_category("other"), "Other");
        assert_eq!(resolve_category("Creative Services"), "Creative Services");
        assert_eq!(resolve_category("Snacks"), "Snacks");
        assert_eq!(resolve_category("--"), "--");
    }

    #[test]
    fn test_add_and_delete() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut store = storage.load();

        handle_expense_command(&storage, &settings, &mut store, add("Gimbal", "45", "equipment-rental"))
            .unwrap();
        assert_eq!(store.len(), 1);

        let short_id = store.expenses()[0].id.to_string();
        handle_expense_command(
            &storage,
            &settings,
            &mut store,
            ExpenseCommands::Delete { id: short_id },
        )
        .unwrap();
        assert!(store.is_empty());
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_rejected_add_is_not_an_error() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut store = storage.load();

        handle_expense_command(&storage, &settings, &mut store, add("  ", "45", "Other")).unwrap();
        handle_expense_command(&storage, &settings, &mut store, add("Ads", "abc", "Other")).unwrap();
        handle_expense_command(&storage, &settings, &mut store, add("Ads", "5", "Snacks")).unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut store = storage.load();
        handle_expense_command(&storage, &settings, &mut store, add("Ads", "5", "Other")).unwrap();

        handle_expense_command(
            &storage,
            &settings,
            &mut store,
            ExpenseCommands::Delete {
                id: "00000000-0000-0000-0000-000000000000".into(),
            },
        )
        .unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_rejects_unknown_filters() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut store = storage.load();

        let err = handle_expense_command(
            &storage,
            &settings,
            &mut store,
            ExpenseCommands::List {
                category: Some("Snacks".into()),
                month: None,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
