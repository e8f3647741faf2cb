//! Storage layer for the budget tracker
//!
//! Two slots under `data/`: the expense list as JSON and the budget as a
//! plain decimal string. Both are read once at startup and rewritten
//! atomically whenever they change. The audit log lives next to them.

pub mod file_io;

pub use file_io::{read_json, read_text, write_json_atomic, write_text_atomic};

use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger, Change};
use crate::config::paths::BudgetPaths;
use crate::error::BudgetResult;
use crate::models::{Expense, Money};
use crate::store::ExpenseStore;

/// Main storage coordinator
pub struct Storage {
    paths: BudgetPaths,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load both slots into a fresh store
    ///
    /// Never fails. A missing or malformed slot yields its default: no
    /// expenses, zero budget.
    pub fn load(&self) -> ExpenseStore {
        let expenses = self.load_expenses();
        let budget = self.load_budget();

        match ExpenseStore::restore(expenses, budget) {
            Ok(store) => {
                debug!(
                    expenses = store.len(),
                    budget = %store.budget(),
                    "loaded budget data"
                );
                store
            }
            Err(e) => {
                warn!(error = %e, "ignoring saved expenses");
                let mut store = ExpenseStore::new();
                store.set_budget(budget);
                store
            }
        }
    }

    /// Read the expense slot; empty if missing or unreadable
    pub fn load_expenses(&self) -> Vec<Expense> {
        let path = self.paths.expenses_file();
        match read_json::<Vec<Expense>, _>(&path) {
            Ok(expenses) => expenses.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "ignoring malformed expense slot");
                Vec::new()
            }
        }
    }

    /// Read the budget slot; zero if missing or not a number
    pub fn load_budget(&self) -> Money {
        let path = self.paths.budget_file();
        let text = match read_text(&path) {
            Ok(Some(text)) => text,
            Ok(None) => return Money::zero(),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable budget slot");
                return Money::zero();
            }
        };

        match Money::parse(&text) {
            Ok(budget) if budget.is_storable() => budget,
            Ok(_) => Money::zero(),
            Err(e) => {
                warn!(error = %e, value = text.trim(), "ignoring malformed budget slot");
                Money::zero()
            }
        }
    }

    /// Write the expense slot
    pub fn save_expenses(&self, expenses: &[Expense]) -> BudgetResult<()> {
        write_json_atomic(self.paths.expenses_file(), &expenses)
    }

    /// Write the budget slot as a decimal string (e.g. `1000.00`)
    pub fn save_budget(&self, budget: Money) -> BudgetResult<()> {
        write_text_atomic(self.paths.budget_file(), &budget.to_string())
    }

    /// Write both slots
    pub fn save(&self, store: &ExpenseStore) -> BudgetResult<()> {
        self.save_expenses(store.expenses())?;
        self.save_budget(store.budget())
    }

    /// Append a change to the audit log
    pub fn record(&self, change: Change) -> BudgetResult<()> {
        self.audit.log(&AuditEntry::new(change))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDraft;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_test_storage();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.paths().is_initialized());
    }

    #[test]
    fn test_fresh_storage_loads_defaults() {
        let (_temp, storage) = create_test_storage();

        let store = storage.load();
        assert!(store.is_empty());
        assert_eq!(store.budget(), Money::zero());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp, storage) = create_test_storage();

        let mut store = ExpenseStore::new();
        store.set_budget("1000");
        store
            .add_expense_on(
                &ExpenseDraft::new("Camera rental", "Equipment Rental", "250.50")
                    .with_date("2024-03-01"),
                today(),
            )
            .unwrap();
        store
            .add_expense_on(
                &ExpenseDraft::new("Logo design", "Creative Services", 500.0),
                today(),
            )
            .unwrap();

        storage.save(&store).unwrap();

        let reloaded = storage.load();
        assert_eq!(reloaded, store);
    }

    #[test]
    fn test_budget_slot_format() {
        let (_temp, storage) = create_test_storage();

        storage.save_budget(Money::from_cents(100000)).unwrap();

        let raw = std::fs::read_to_string(storage.paths().budget_file()).unwrap();
        assert_eq!(raw, "1000.00");
    }

    #[test]
    fn test_expense_slot_format() {
        let (_temp, storage) = create_test_storage();

        let mut store = ExpenseStore::new();
        store
            .add_expense_on(
                &ExpenseDraft::new("Camera rental", "Equipment Rental", "250.50")
                    .with_date("2024-03-01"),
                today(),
            )
            .unwrap();
        storage.save_expenses(store.expenses()).unwrap();

        let raw: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(storage.paths().expenses_file()).unwrap(),
        )
        .unwrap();
        let record = &raw[0];
        assert_eq!(record["name"], "Camera rental");
        assert_eq!(record["category"], "Equipment Rental");
        assert_eq!(record["amount"], 250.5);
        assert_eq!(record["date"], "2024-03-01");
    }

    #[test]
    fn test_malformed_slots_are_absent() {
        let (_temp, storage) = create_test_storage();
        let paths = storage.paths();

        std::fs::write(paths.expenses_file(), "[{not json").unwrap();
        std::fs::write(paths.budget_file(), "lots").unwrap();

        let store = storage.load();
        assert!(store.is_empty());
        assert_eq!(store.budget(), Money::zero());
    }

    #[test]
    fn test_malformed_expenses_keep_budget() {
        let (_temp, storage) = create_test_storage();
        let paths = storage.paths();

        std::fs::write(
            paths.expenses_file(),
            r#"[{"id":"x","name":"a","category":"Nope","amount":1,"date":"2024-01-01"}]"#,
        )
        .unwrap();
        storage.save_budget(Money::from_cents(5000)).unwrap();

        let store = storage.load();
        assert!(store.is_empty());
        assert_eq!(store.budget(), Money::from_cents(5000));
    }

    #[test]
    fn test_duplicate_ids_are_absent() {
        let (_temp, storage) = create_test_storage();

        let mut store = ExpenseStore::new();
        let expense = store
            .add_expense_on(&ExpenseDraft::new("Gaffer", "Talent & Crew", "300"), today())
            .unwrap();
        storage
            .save_expenses(&[expense.clone(), expense])
            .unwrap();
        storage.save_budget(Money::from_cents(100)).unwrap();

        let loaded = storage.load();
        assert!(loaded.is_empty());
        assert_eq!(loaded.budget(), Money::from_cents(100));
    }

    #[test]
    fn test_invalid_amounts_load_as_zero() {
        let (_temp, storage) = create_test_storage();
        let paths = storage.paths();

        std::fs::write(
            paths.expenses_file(),
            r#"[
                {"id":"6f1c2b0e-8a9d-4c3b-9e2f-1a2b3c4d5e6f","name":"a","category":"Other","amount":"abc","date":"2024-01-01"},
                {"id":"7f1c2b0e-8a9d-4c3b-9e2f-1a2b3c4d5e6f","name":"b","category":"Other","amount":-5,"date":"2024-01-02"}
            ]"#,
        )
        .unwrap();
        std::fs::write(paths.budget_file(), "-50").unwrap();

        let store = storage.load();
        assert_eq!(store.len(), 2);
        assert!(store.expenses().iter().all(|e| e.amount.is_zero()));
        assert_eq!(store.budget(), Money::zero());
    }

    #[test]
    fn test_record_change() {
        let (_temp, storage) = create_test_storage();

        let change = Change::BudgetSet {
            before: Money::zero(),
            after: Money::from_cents(100000),
        };
        storage.record(change.clone()).unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].change, change);
    }
}
