//! Layout definitions for the TUI
//!
//! Dashboard: expense list on the left; summary, category chart and monthly
//! chart stacked on the right; status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard
pub struct AppLayout {
    /// Expense list
    pub expenses: Rect,
    /// Financial summary with usage gauge
    pub summary: Rect,
    /// Spending by category
    pub categories: Rect,
    /// Spending by month
    pub months: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(vertical[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9),      // Summary + gauge
                Constraint::Percentage(55), // Categories
                Constraint::Min(6),         // Months
            ])
            .split(horizontal[1]);

        Self {
            expenses: horizontal[0],
            summary: right[0],
            categories: right[1],
            months: right[2],
            status_bar: vertical[1],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
