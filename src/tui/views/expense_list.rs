//! Expense list view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::display::format_date;
use crate::display::report::truncate;
use crate::tui::app::App;

/// Render the expense list
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!(" Expenses ({}) ", app.store.len()))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.store.is_empty() {
        let empty = ratatui::widgets::Paragraph::new(vec![
            Line::from(""),
            Line::from("  No expenses yet."),
            Line::from("  Press 'a' to add one."),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let date_format = app.settings.date_format.as_str();
    let rows: Vec<Row> = app
        .store
        .expenses()
        .iter()
        .map(|e| {
            Row::new(vec![
                Cell::from(format_date(e.date, date_format)),
                Cell::from(truncate(&e.name, 28)),
                Cell::from(e.category.label()).style(Style::default().fg(Color::Cyan)),
                Cell::from(Line::from(app.money(e.amount)).right_aligned()),
            ])
        })
        .collect();

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Name"),
        Cell::from("Category"),
        Cell::from(Line::from("Amount").right_aligned()),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let widths = [
        Constraint::Length(10),
        Constraint::Min(12),
        Constraint::Length(24),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}
