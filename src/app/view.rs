use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::state::AppState;
use crate::ui::widgets;

pub fn render(f: &mut Frame, state: &AppState) {
    // Input bar, body, status bar
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let input_area = vertical[0];
    let summary_area = vertical[1];
    let body_area = vertical[2];
    let status_area = vertical[3];

    // Body: weekly metrics + issue list
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(body_area);

    widgets::render_input_bar(f, input_area, state);
    widgets::render_summary(f, summary_area, state);
    widgets::render_weekly_table(f, horizontal[0], state);
    widgets::render_issue_table(f, horizontal[1], state);
    widgets::render_status_bar(f, status_area, state);

    if state.error_message.is_some() {
        widgets::render_error_modal(f, f.area(), state);
    }
}
