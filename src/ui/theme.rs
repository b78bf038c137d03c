use ratatui::style::{Color, Modifier, Style};

pub const HIGHLIGHT: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

pub const HEADER: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const DIM: Style = Style::new().fg(Color::DarkGray);

pub const ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

pub const INFO: Style = Style::new().fg(Color::Yellow);

pub const BORDER_FOCUSED: Style = Style::new().fg(Color::Cyan);

pub const BORDER_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

pub const INPUT: Style = Style::new().fg(Color::White);

pub const ISSUE_NUMBER: Style = Style::new().fg(Color::Cyan);

pub const ISSUE_OPEN: Style = Style::new().fg(Color::Green);

pub const ISSUE_CLOSED: Style = Style::new().fg(Color::Magenta);

pub const RATE_HIGH: Style = Style::new().fg(Color::Green);

pub const RATE_MID: Style = Style::new().fg(Color::Yellow);

pub const RATE_LOW: Style = Style::new().fg(Color::Red);

/// Colour for a closure-rate percentage.
pub fn rate_style(rate: f64) -> Style {
    if rate >= 50.0 {
        RATE_HIGH
    } else if rate >= 20.0 {
        RATE_MID
    } else {
        RATE_LOW
    }
}
