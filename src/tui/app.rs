//! Application state for the TUI
//!
//! The App struct owns the expense store for the session and holds all state
//! needed for rendering and handling events.

use crate::config::settings::Settings;
use crate::models::{Expense, ExpenseId};
use crate::reports::Aggregator;
use crate::services::TrackerService;
use crate::storage::Storage;
use crate::store::ExpenseStore;

use super::dialogs::budget::BudgetFormState;
use super::dialogs::expense::ExpenseFormState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    SetBudget,
    ConfirmDelete(ExpenseId),
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Canonical budget state for this session
    pub store: ExpenseStore,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the expense list
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add-expense form state
    pub expense_form: ExpenseFormState,

    /// Set-budget form state
    pub budget_form: BudgetFormState,
}

impl<'a> App<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, store: ExpenseStore) -> Self {
        Self {
            storage,
            settings,
            store,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            status_message: None,
            expense_form: ExpenseFormState::new(),
            budget_form: BudgetFormState::new(),
        }
    }

    /// Service that writes changes through to storage
    pub fn service(&self) -> TrackerService<'a> {
        TrackerService::new(self.storage, self.settings)
    }

    /// Aggregator over the current store
    pub fn aggregator(&self) -> Aggregator<'_> {
        self.service().aggregator(&self.store)
    }

    /// Format an amount with the configured currency symbol
    pub fn money(&self, amount: crate::models::Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Open a dialog, resetting its form
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddExpense => self.expense_form = ExpenseFormState::new(),
            ActiveDialog::SetBudget => {
                self.budget_form = BudgetFormState::with_budget(self.store.budget())
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the list after it shrinks
    pub fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.store.len().saturating_sub(1));
    }

    /// The expense under the cursor
    pub fn selected_expense(&self) -> Option<&Expense> {
        self.store.expenses().get(self.selected_index)
    }
}
