//! Bar charts for spending by category and by month

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

fn render_empty(frame: &mut Frame, block: Block, area: Rect) {
    let paragraph = Paragraph::new(Line::from(" No data"))
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Bar value in cents; amounts are never negative
fn bar_value(amount: Money) -> u64 {
    u64::try_from(amount.cents()).unwrap_or(0)
}

/// Render spending by category as horizontal bars
pub fn render_categories(frame: &mut Frame, app: &mut App, area: Rect) {
    let rows = app.aggregator().by_category();
    let block = chart_block(" Spending by Category ");

    if rows.is_empty() {
        render_empty(frame, block, area);
        return;
    }

    let bars: Vec<Bar> = rows
        .iter()
        .map(|row| {
            Bar::default()
                .value(bar_value(row.total))
                .label(Line::from(row.category.label()))
                .text_value(app.money(row.total))
                .style(Style::default().fg(Color::Magenta))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .value_style(Style::default().fg(Color::White))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Render spending by month as vertical bars
pub fn render_months(frame: &mut Frame, app: &mut App, area: Rect) {
    let rows = app.aggregator().by_month();
    let block = chart_block(" Monthly Spending ");

    if rows.is_empty() {
        render_empty(frame, block, area);
        return;
    }

    let bars: Vec<Bar> = rows
        .iter()
        .map(|row| {
            Bar::default()
                .value(bar_value(row.total))
                .label(Line::from(row.label.clone()))
                .text_value(row.total.units().to_string())
                .style(Style::default().fg(Color::Blue))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(8)
        .bar_gap(1)
        .value_style(Style::default().fg(Color::White).bg(Color::Blue))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_value() {
        assert_eq!(bar_value(Money::from_cents(25050)), 25050);
        assert_eq!(bar_value(Money::from_cents(-5)), 0);
    }
}
