//! Event handler for the TUI
//!
//! Routes keyboard events to the dashboard or to the open dialog. Every
//! change to the expenses or the budget goes through the tracker service.

use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::dialogs::expense::ExpenseField;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match app.active_dialog {
        ActiveDialog::None => handle_dashboard_key(app, key),
        ActiveDialog::AddExpense => handle_expense_form_key(app, key),
        ActiveDialog::SetBudget => handle_budget_form_key(app, key),
        ActiveDialog::ConfirmDelete(_) => handle_confirm_key(app, key),
        ActiveDialog::Help => {
            app.close_dialog();
            Ok(())
        }
    }
}

/// Handle keys on the dashboard
fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_index = app.store.len().saturating_sub(1)
        }

        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::AddExpense);
        }
        KeyCode::Char('b') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::SetBudget);
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_expense().map(|e| e.id) {
                app.open_dialog(ActiveDialog::ConfirmDelete(id));
            }
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys in the add-expense dialog
fn handle_expense_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return Ok(());
        }
        KeyCode::Enter => {
            submit_expense(app);
            return Ok(());
        }
        KeyCode::Tab => {
            app.expense_form.next_field();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.expense_form.prev_field();
            return Ok(());
        }
        _ => {}
    }

    let form = &mut app.expense_form;
    if form.focused_field == ExpenseField::Category {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
                form.prev_category()
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
                form.next_category()
            }
            _ => {}
        }
        return Ok(());
    }

    if let Some(input) = form.focused_input_mut() {
        match key.code {
            KeyCode::Char(c) => input.insert(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
    }
    form.error_message = None;

    Ok(())
}

/// Try to add the expense in the form; keep the dialog open on rejection
fn submit_expense(app: &mut App) {
    let draft = app.expense_form.to_draft();
    let today = Local::now().date_naive();

    if let Err(reason) = draft.check(today) {
        app.expense_form.error_message = Some(capitalize(&reason.to_string()));
        return;
    }

    let service = app.service();
    if let Some(expense) = service.add_expense_on(&mut app.store, &draft, today) {
        app.selected_index = app.store.len().saturating_sub(1);
        let message = format!("Added {} ({})", expense.name, app.money(expense.amount));
        app.set_status(message);
        app.close_dialog();
    }
}

/// Handle keys in the set-budget dialog
fn handle_budget_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let input = &mut app.budget_form.amount_input;
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            let text = input.value().to_string();
            let service = app.service();
            let budget = service.set_budget(&mut app.store, text);
            let message = format!("Budget set to {}", app.money(budget));
            app.set_status(message);
            app.close_dialog();
        }
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }

    Ok(())
}

/// Handle keys in the delete confirmation
fn handle_confirm_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let ActiveDialog::ConfirmDelete(id) = app.active_dialog else {
        return Ok(());
    };

    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            let service = app.service();
            if let Some(expense) = service.delete_expense(&mut app.store, id) {
                app.set_status(format!("Deleted {}", expense.name));
            }
            app.clamp_selection();
            app.close_dialog();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }

    Ok(())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
