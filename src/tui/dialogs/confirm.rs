//! Confirmation dialog
//!
//! Yes/no prompt before deleting an expense

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::display::format_date;
use crate::models::ExpenseId;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the delete confirmation for an expense
pub fn render(frame: &mut Frame, app: &App, id: ExpenseId) {
    let area = centered_rect_fixed(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let detail = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", label), Style::default().fg(Color::Cyan)),
            Span::raw(value),
        ])
    };

    let mut lines = vec![Line::from(Span::styled(
        " Delete this expense?",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    match app.store.get(id) {
        Some(expense) => {
            lines.push(detail("Name", expense.name.clone()));
            lines.push(detail("Category", expense.category.label().to_string()));
            lines.push(detail("Amount", app.money(expense.amount)));
            lines.push(detail(
                "Date",
                format_date(expense.date, &app.settings.date_format),
            ));
        }
        None => lines.push(detail("Id", id.to_string())),
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" y", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" delete   "),
        Span::styled("n/Esc", Style::default().fg(Color::Green)),
        Span::raw(" keep"),
    ]));

    let block = Block::default()
        .title(" Delete Expense ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
