//! Terminal User Interface module
//!
//! A single dashboard built on ratatui: the expense list, a financial summary
//! with a usage gauge, category and monthly charts, and dialogs for adding
//! expenses, setting the budget and confirming deletes.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
