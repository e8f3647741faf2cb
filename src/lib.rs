//! Project Budget - a terminal budget tracker for creative projects
//!
//! Tracks the expenses of one project or campaign against a single budget.
//! Expenses belong to a fixed set of creative-industry categories and are
//! summarized by category and by month.
//!
//! # Architecture
//!
//! - `models`: money, expense categories, expenses and expense drafts
//! - `store`: the canonical expense list and budget
//! - `reports`: totals, variance and breakdowns derived from the store
//! - `storage`: the two persisted slots (expenses and budget)
//! - `services`: write-through mutations with audit logging
//! - `audit`: append-only change log
//! - `config`: path resolution and user settings
//! - `display`, `export`, `cli`, `tui`: the outer surfaces
//!
//! # Example
//!
//! ```rust,ignore
//! use project_budget::config::{paths::BudgetPaths, settings::Settings};
//! use project_budget::storage::Storage;
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let store = storage.load();
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod store;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
