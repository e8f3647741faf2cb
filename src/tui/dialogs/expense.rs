//! Add-expense dialog
//!
//! Modal form with name, category, amount and date fields. The category is
//! picked from the fixed list with left/right; the date starts as today.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{ExpenseCategory, ExpenseDraft, DATE_INPUT_FORMAT};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Name,
    Category,
    Amount,
    Date,
}

impl ExpenseField {
    /// Next field (Tab)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Name,
        }
    }

    /// Previous field (Shift+Tab)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Date,
            Self::Category => Self::Name,
            Self::Amount => Self::Category,
            Self::Date => Self::Amount,
        }
    }
}

/// State for the add-expense dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub name_input: TextInput,
    pub category: ExpenseCategory,
    pub amount_input: TextInput,
    pub date_input: TextInput,
    /// Why the last submit was refused
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Empty form dated today
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            focused_field: ExpenseField::Name,
            name_input: TextInput::new().label("Name").placeholder("e.g. Camera rental"),
            category: ExpenseCategory::ALL[0],
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format(DATE_INPUT_FORMAT).to_string()),
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The text input with focus, `None` on the category picker
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Name => Some(&mut self.name_input),
            ExpenseField::Category => None,
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Date => Some(&mut self.date_input),
        }
    }

    pub fn next_category(&mut self) {
        self.category = self.category.next();
    }

    pub fn prev_category(&mut self) {
        self.category = self.category.previous();
    }

    /// Draft built from the current field values
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft::new(
            self.name_input.value(),
            self.category.label(),
            self.amount_input.value(),
        )
        .with_date(self.date_input.value())
    }
}

/// Render the add-expense dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(60, 13, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
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
            Constraint::Length(1), // Name
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Date
            Constraint::Length(1),
            Constraint::Length(1), // Error
            Constraint::Min(1),    // Hints
        ])
        .split(inner);

    let form = &app.expense_form;
    let focused = form.focused_field;

    frame.render_widget(
        form.name_input.clone().focused(focused == ExpenseField::Name),
        chunks[0],
    );

    let picker_style = if focused == ExpenseField::Category {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let category_line = Line::from(vec![
        Span::styled("Category", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled(format!("◀ {} ▶", form.category), picker_style),
    ]);
    frame.render_widget(Paragraph::new(category_line), chunks[1]);

    frame.render_widget(
        form.amount_input.clone().focused(focused == ExpenseField::Amount),
        chunks[2],
    );
    frame.render_widget(
        form.date_input.clone().focused(focused == ExpenseField::Date),
        chunks[3],
    );

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[5],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Cyan)),
        Span::raw(" Category  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}
