//! Expense records and the drafts they are created from
//!
//! An expense is immutable once created. The only way in is a draft that
//! passes the presence checks in [`ExpenseDraft::validate`]; the only way out
//! is deletion by id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::{self, Money};

/// Date format accepted for draft dates
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// A single recorded cost entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, never reused
    pub id: ExpenseId,

    /// Display name (never empty)
    pub name: String,

    /// One of the fixed categories
    pub category: ExpenseCategory,

    /// Non-negative amount
    #[serde(default, with = "money::units")]
    pub amount: Money,

    /// Calendar date the cost belongs to
    pub date: NaiveDate,
}

impl Expense {
    /// Month key used for monthly grouping
    pub fn year_month(&self) -> (i32, u32) {
        use chrono::Datelike;
        (self.date.year(), self.date.month())
    }
}

/// An amount as entered: free text from a form field or a numeric value
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    Text(String),
    Number(f64),
}

impl AmountInput {
    /// Whether nothing was entered
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }

    /// Parse into money; `None` when blank, non-numeric or not finite
    pub fn to_money(&self) -> Option<Money> {
        match self {
            Self::Text(s) => Money::parse(s).ok(),
            Self::Number(n) => Money::from_f64(*n),
        }
    }
}

impl Default for AmountInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for AmountInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for AmountInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Money> for AmountInput {
    fn from(m: Money) -> Self {
        Self::Number(m.to_f64())
    }
}

/// Why a draft was not turned into an expense
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftRejection {
    #[error("expense name is required")]
    EmptyName,

    #[error("category is required")]
    MissingCategory,

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("amount is required")]
    MissingAmount,

    #[error("amount is not a number: {0}")]
    InvalidAmount(String),

    #[error("amount cannot be negative")]
    NegativeAmount,

    #[error("amount exceeds the limit of {}", Money::MAX)]
    AmountTooLarge,

    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}

/// User-entered fields for a new expense
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub name: String,
    pub category: String,
    pub amount: AmountInput,
    /// `None` or blank means today
    pub date: Option<String>,
}

impl ExpenseDraft {
    /// Create a draft dated today
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<AmountInput>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            amount: amount.into(),
            date: None,
        }
    }

    /// Set the draft date (YYYY-MM-DD)
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Check the draft without creating anything
    pub fn check(&self, today: NaiveDate) -> Result<(), DraftRejection> {
        self.validate(today).map(|_| ())
    }

    /// Validate the draft and build a new expense with a fresh id
    pub fn validate(&self, today: NaiveDate) -> Result<Expense, DraftRejection> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftRejection::EmptyName);
        }

        if self.category.trim().is_empty() {
            return Err(DraftRejection::MissingCategory);
        }
        let category: ExpenseCategory = self
            .category
            .parse()
            .map_err(|_| DraftRejection::UnknownCategory(self.category.clone()))?;

        if self.amount.is_blank() {
            return Err(DraftRejection::MissingAmount);
        }
        let amount = self.amount.to_money().ok_or_else(|| {
            DraftRejection::InvalidAmount(match &self.amount {
                AmountInput::Text(s) => s.clone(),
                AmountInput::Number(n) => n.to_string(),
            })
        })?;
        if amount.is_negative() {
            return Err(DraftRejection::NegativeAmount);
        }
        if !amount.is_storable() {
            return Err(DraftRejection::AmountTooLarge);
        }

        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT)
                .map_err(|_| DraftRejection::InvalidDate(raw.to_string()))?,
        };

        Ok(Expense {
            id: ExpenseId::new(),
            name: name.to_string(),
            category,
            amount,
            date,
        })
    }
}
