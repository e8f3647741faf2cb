//! Set-budget dialog

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// State for the set-budget dialog
#[derive(Debug, Clone)]
pub struct BudgetFormState {
    pub amount_input: TextInput,
}

impl Default for BudgetFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetFormState {
    pub fn new() -> Self {
        Self {
            amount_input: TextInput::new().label("Budget").placeholder("0.00"),
        }
    }

    /// Form prefilled with the current budget (blank when zero)
    pub fn with_budget(budget: Money) -> Self {
        let mut state = Self::new();
        if !budget.is_zero() {
            state.amount_input.set_content(budget.to_string());
        }
        state
    }
}

/// Render the set-budget dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(46, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    frame.render_widget(app.budget_form.amount_input.clone().focused(true), chunks[0]);

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefill() {
        let state = BudgetFormState::with_budget(Money::from_cents(150000));
        assert_eq!(state.amount_input.value(), "1500.00");

        let state = BudgetFormState::with_budget(Money::zero());
        assert_eq!(state.amount_input.value(), "");
    }
}
