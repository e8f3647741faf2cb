//! Tracker service
//!
//! Applies store mutations and writes the result through to storage and the
//! audit log. Persistence is best effort: a failed write is logged and the
//! in-memory change stands.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::audit::Change;
use crate::config::settings::Settings;
use crate::models::{AmountInput, Expense, ExpenseDraft, ExpenseId, Money};
use crate::reports::Aggregator;
use crate::storage::Storage;
use crate::store::ExpenseStore;

/// Service for expense and budget changes
pub struct TrackerService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> TrackerService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Aggregator configured from the user's settings
    pub fn aggregator<'s>(&self, store: &'s ExpenseStore) -> Aggregator<'s> {
        Aggregator::new(store)
            .with_month_order(self.settings.month_order)
            .with_warning_threshold(self.settings.warning_threshold_percent)
    }

    /// Add an expense dated today when the draft has no date
    pub fn add_expense(&self, store: &mut ExpenseStore, draft: &ExpenseDraft) -> Option<Expense> {
        self.add_expense_on(store, draft, chrono::Local::now().date_naive())
    }

    /// Add an expense with an explicit "today"
    pub fn add_expense_on(
        &self,
        store: &mut ExpenseStore,
        draft: &ExpenseDraft,
        today: NaiveDate,
    ) -> Option<Expense> {
        let expense = store.add_expense_on(draft, today)?;
        info!(id = %expense.id, amount = %expense.amount, "expense added");

        self.persist_expenses(store);
        self.audit(Change::ExpenseAdded {
            expense: expense.clone(),
        });

        Some(expense)
    }

    /// Delete an expense; unknown ids are a no-op returning `None`
    pub fn delete_expense(&self, store: &mut ExpenseStore, id: ExpenseId) -> Option<Expense> {
        let expense = store.delete_expense(id)?;
        info!(id = %expense.id, "expense deleted");

        self.persist_expenses(store);
        self.audit(Change::ExpenseDeleted {
            expense: expense.clone(),
        });

        Some(expense)
    }

    /// Set the budget; invalid or negative input stores zero
    pub fn set_budget(&self, store: &mut ExpenseStore, input: impl Into<AmountInput>) -> Money {
        let before = store.budget();
        let after = store.set_budget(input);
        info!(budget = %after, "budget set");

        if let Err(e) = self.storage.save_budget(after) {
            warn!(error = %e, "failed to save budget");
        }

        if before != after {
            self.audit(Change::BudgetSet { before, after });
        }

        after
    }

    fn persist_expenses(&self, store: &ExpenseStore) {
        if let Err(e) = self.storage.save_expenses(store.expenses()) {
            warn!(error = %e, "failed to save expenses");
        }
    }

    fn audit(&self, change: Change) {
        if !self.settings.audit_enabled {
            return;
        }
        if let Err(e) = self.storage.record(change) {
            warn!(error = %e, "failed to write audit entry");
        }
    }
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

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    #[test]
    fn test_add_writes_through() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let service = TrackerService::new(&storage, &settings);
        let mut store = storage.load();

        let expense = service
            .add_expense_on(
                &mut store,
                &ExpenseDraft::new("Camera rental", "Equipment Rental", "250.50"),
                today(),
            )
            .unwrap();

        assert_eq!(expense.date, today());
        let reloaded = storage.load();
        assert_eq!(reloaded.expenses(), store.expenses());

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].change,
            Change::ExpenseAdded {
                expense: expense.clone()
            }
        );

        let raw = std::fs::read_to_string(storage.paths().audit_log()).unwrap();
        assert!(raw.contains(&expense.id.as_uuid().to_string()));
    }

    #[test]
    fn test_rejected_add_writes_nothing() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let service = TrackerService::new(&storage, &settings);
        let mut store = storage.load();

        let result = service.add_expense_on(
            &mut store,
            &ExpenseDraft::new("", "Other", "10"),
            today(),
        );

        assert!(result.is_none());
        assert!(store.is_empty());
        assert!(!storage.paths().expenses_file().exists());
        assert!(!storage.audit().exists());
    }

    #[test]
    fn test_delete_writes_through() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let service = TrackerService::new(&storage, &settings);
        let mut store = storage.load();

        let expense = service
            .add_expense_on(&mut store, &ExpenseDraft::new("Drone", "Equipment Rental", "90"), today())
            .unwrap();

        assert!(service.delete_expense(&mut store, expense.id).is_some());
        assert!(service.delete_expense(&mut store, expense.id).is_none());

        assert!(storage.load().is_empty());
        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].change.action(), "DELETED");
        assert_eq!(
            entries[1].change.expense().map(|e| e.id.as_uuid()),
            Some(expense.id.as_uuid())
        );
    }

    #[test]
    fn test_set_budget() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let service = TrackerService::new(&storage, &settings);
        let mut store = storage.load();

        assert_eq!(service.set_budget(&mut store, "1000"), Money::from_cents(100000));
        assert_eq!(storage.load().budget(), Money::from_cents(100000));

        assert_eq!(service.set_budget(&mut store, "-50"), Money::zero());
        assert_eq!(storage.load().budget(), Money::zero());

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[1].change,
            Change::BudgetSet {
                before: Money::from_cents(100000),
                after: Money::zero(),
            }
        );
    }

    #[test]
    fn test_audit_disabled() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let service = TrackerService::new(&storage, &settings);
        let mut store = storage.load();

        service.set_budget(&mut store, 500.0);
        service.add_expense_on(&mut store, &ExpenseDraft::new("Ads", "Other", "5"), today());

        assert!(!storage.audit().exists());
        assert_eq!(storage.load().len(), 1);
    }
}
