//! Views for the TUI
//!
//! Renders the dashboard and, on top of it, whichever dialog is open.

pub mod charts;
pub mod expense_list;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    expense_list::render(frame, app, layout.expenses);
    summary::render(frame, app, layout.summary);
    charts::render_categories(frame, app, layout.categories);
    charts::render_months(frame, app, layout.months);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::SetBudget => dialogs::budget::render(frame, app),
        ActiveDialog::ConfirmDelete(id) => dialogs::confirm::render(frame, app, id),
        ActiveDialog::Help => dialogs::help::render(frame),
    }
}
