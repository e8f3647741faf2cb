//! The expense store: canonical, owned budget state
//!
//! Holds the ordered expense list and the budget. Everything else reads it
//! through shared references; the only mutations are [`ExpenseStore::add_expense`],
//! [`ExpenseStore::delete_expense`] and [`ExpenseStore::set_budget`].
//! Invalid input never raises: a rejected draft leaves the store unchanged and
//! an invalid budget becomes zero.

use std::collections::HashSet;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{AmountInput, Expense, ExpenseDraft, ExpenseId, Money};

/// Ordered expenses plus the budget scalar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    budget: Money,
}

impl ExpenseStore {
    /// Create an empty store with a zero budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously saved parts
    ///
    /// Fails if two expenses share an id. Amounts and a budget outside
    /// `0..=Money::MAX` are coerced to zero.
    pub fn restore(expenses: Vec<Expense>, budget: Money) -> BudgetResult<Self> {
        let mut seen = HashSet::with_capacity(expenses.len());
        for expense in &expenses {
            if !seen.insert(expense.id) {
                return Err(BudgetError::duplicate_expense(expense.id.to_string()));
            }
        }

        let expenses = expenses
            .into_iter()
            .map(|mut e| {
                e.amount = storable(e.amount);
                e
            })
            .collect();

        Ok(Self {
            expenses,
            budget: storable(budget),
        })
    }

    /// Add an expense from a draft, dating it today if the draft has no date
    ///
    /// Returns the created expense, or `None` (store untouched) when the
    /// draft is rejected.
    pub fn add_expense(&mut self, draft: &ExpenseDraft) -> Option<Expense> {
        self.add_expense_on(draft, Local::now().date_naive())
    }

    /// Same as [`ExpenseStore::add_expense`] with an explicit "today"
    pub fn add_expense_on(&mut self, draft: &ExpenseDraft, today: NaiveDate) -> Option<Expense> {
        let mut expense = match draft.validate(today) {
            Ok(expense) => expense,
            Err(reason) => {
                debug!(%reason, "expense draft rejected");
                return None;
            }
        };

        while self.contains(expense.id) {
            expense.id = ExpenseId::new();
        }

        self.expenses.push(expense.clone());
        Some(expense)
    }

    /// Remove the expense with this id; `None` if there was none
    pub fn delete_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(index))
    }

    /// Set the budget, coercing non-numeric, negative or oversized input to zero
    ///
    /// Returns the value actually stored.
    pub fn set_budget(&mut self, input: impl Into<AmountInput>) -> Money {
        let input = input.into();
        self.budget = input.to_money().map(storable).unwrap_or_default();
        self.budget
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The current budget
    pub fn budget(&self) -> Money {
        self.budget
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Look up an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Whether an expense with this id exists
    pub fn contains(&self, id: ExpenseId) -> bool {
        self.get(id).is_some()
    }

    /// Expenses whose id starts with the given text (`exp-` prefix optional)
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.id.matches_prefix(prefix))
            .collect()
    }

    /// Resolve user-supplied id text to a single expense id
    ///
    /// Accepts a full UUID (with or without `exp-`), the short display form
    /// or any unambiguous prefix. Unknown ids resolve to `None`.
    pub fn resolve_id(&self, text: &str) -> BudgetResult<Option<ExpenseId>> {
        if let Ok(id) = ExpenseId::parse(text) {
            return Ok(self.contains(id).then_some(id));
        }

        match self.find_by_prefix(text).as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(only.id)),
            many => Err(BudgetError::Validation(format!(
                "'{}' matches {} expenses; use a longer id",
                text.trim(),
                many.len()
            ))),
        }
    }
}

fn storable(amount: Money) -> Money {
    if amount.is_storable() {
        amount
    } else {
        Money::zero()
    }
}
