//! Core data models for the budget tracker
//!
//! Expenses, their fixed categories, money and identifiers.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{ExpenseCategory, UnknownCategory};
pub use expense::{AmountInput, DraftRejection, Expense, ExpenseDraft, DATE_INPUT_FORMAT};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
