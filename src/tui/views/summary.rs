//! Financial summary panel
//!
//! Budget, total, remaining and a usage gauge coloured by how close the
//! spending is to the budget.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::display::report::format_percentage;
use crate::reports::UsageStatus;
use crate::tui::app::App;

/// Gauge colour for a usage status
pub fn usage_color(status: UsageStatus) -> Color {
    match status {
        UsageStatus::OverBudget => Color::Red,
        UsageStatus::Warning => Color::Yellow,
        UsageStatus::OnTrack => Color::Green,
        UsageStatus::NoBudget => Color::DarkGray,
    }
}

/// Render the summary panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let summary = app.aggregator().summary();

    let block = Block::default()
        .title(" Financial Summary ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Figures
            Constraint::Length(1),
            Constraint::Length(1), // Gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let variance_color = if summary.is_over_budget() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        figure_line("Budget", app.money(summary.budget), Color::White),
        figure_line("Total Expenses", app.money(summary.total_expenses), Color::White),
        figure_line(
            "Remaining",
            format!(
                "{} ({})",
                app.money(summary.variance),
                format_percentage(summary.variance_percent)
            ),
            variance_color,
        ),
        figure_line("Expenses", summary.expense_count.to_string(), Color::White),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let label = match summary.usage_status {
        UsageStatus::NoBudget => summary.usage_status.label().to_string(),
        status => format!(
            "{} used · {}",
            format_percentage(summary.usage_ratio * 100.0),
            status.label()
        ),
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(usage_color(summary.usage_status)))
        .ratio(summary.usage_percent_clamped() / 100.0)
        .label(label);
    frame.render_widget(gauge, chunks[2]);
}

fn figure_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<16}", label), Style::default().fg(Color::Cyan)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_color() {
        assert_eq!(usage_color(UsageStatus::OverBudget), Color::Red);
        assert_eq!(usage_color(UsageStatus::Warning), Color::Yellow);
        assert_eq!(usage_color(UsageStatus::OnTrack), Color::Green);
    }
}
