use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
};

use crate::app::state::{AppState, FocusedPane};
use crate::github::models::IssueState;
use crate::ui::theme;
use crate::util::time::relative_time;

fn border_for(state: &AppState, pane: FocusedPane) -> Style {
    if state.focused_pane == pane {
        theme::BORDER_FOCUSED
    } else {
        theme::BORDER_UNFOCUSED
    }
}

pub fn render_input_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Repository (owner/name) ")
        .borders(Borders::ALL)
        .border_style(border_for(state, FocusedPane::Input));

    let mut spans = vec![Span::styled(state.input.as_str(), theme::INPUT)];
    if state.focused_pane == FocusedPane::Input {
        spans.push(Span::styled("█", theme::BORDER_FOCUSED));
    }
    if state.input.is_empty() && state.focused_pane != FocusedPane::Input {
        spans.push(Span::styled("e.g. rust-lang/rust", theme::DIM));
    }

    let para = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(para, area);
}

pub fn render_summary(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(theme::BORDER_UNFOCUSED);

    let lines = if state.loading {
        let repo = state
            .last_repo
            .as_ref()
            .map(|r| r.full_name())
            .unwrap_or_default();
        let progress = state
            .progress
            .map(|p| format!(" {} issues (page {})", p.issues, p.page))
            .unwrap_or_default();
        vec![Line::from(Span::styled(
            format!("Fetching issues for {}...{}", repo, progress),
            theme::DIM,
        ))]
    } else if let Some(ref msg) = state.info_message {
        vec![Line::from(Span::styled(msg.as_str(), theme::INFO))]
    } else if let Some(ref analysis) = state.analysis {
        let result = &analysis.result;
        vec![
            Line::from(vec![
                Span::styled(result.repo.full_name(), theme::HEADER),
                Span::styled(
                    format!("  fetched {}", relative_time(&analysis.fetched_at)),
                    theme::DIM,
                ),
            ]),
            Line::from(vec![
                Span::styled(format!("Open: {}", result.status.open), theme::ISSUE_OPEN),
                Span::raw("  "),
                Span::styled(
                    format!("Closed: {}", result.status.closed),
                    theme::ISSUE_CLOSED,
                ),
                Span::raw(format!("  Total: {}", result.status.total)),
            ]),
            Line::from(vec![
                Span::raw(format!(
                    "Average closure rate ({} weeks): ",
                    result.weeks.len()
                )),
                Span::styled(
                    format!("{:.1}%", result.average_closure_rate),
                    theme::rate_style(result.average_closure_rate),
                ),
            ]),
        ]
    } else {
        vec![Line::from(Span::styled(
            "Enter a repository and press Enter to analyze its issues",
            theme::DIM,
        ))]
    };

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, area);
}

pub fn render_weekly_table(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Weekly metrics ")
        .borders(Borders::ALL)
        .border_style(theme::BORDER_UNFOCUSED);

    let Some(ref analysis) = state.analysis else {
        let msg = if state.loading { "Loading..." } else { "No analysis yet" };
        let para = Paragraph::new(msg).style(theme::DIM).block(block);
        f.render_widget(para, area);
        return;
    };

    let header = Row::new(vec![
        Cell::from("Week").style(theme::HEADER),
        Cell::from("New").style(theme::HEADER),
        Cell::from("Closed").style(theme::HEADER),
        Cell::from("Open at start").style(theme::HEADER),
        Cell::from("Closure").style(theme::HEADER),
        Cell::from("New:Closed").style(theme::HEADER),
    ])
    .height(1);

    let rows: Vec<Row> = analysis
        .result
        .weeks
        .iter()
        .map(|week| {
            Row::new(vec![
                Cell::from(week.label.as_str()),
                Cell::from(week.new_count.to_string()),
                Cell::from(week.closed_count.to_string()),
                Cell::from(week.open_at_start.to_string()),
                Cell::from(format!("{:.1}%", week.closure_rate))
                    .style(theme::rate_style(week.closure_rate)),
                Cell::from(week.ratio.to_string()),
            ])
            .height(1)
        })
        .collect();

    let widths = [
        Constraint::Min(36),
        Constraint::Length(5),
        Constraint::Length(7),
        Constraint::Length(14),
        Constraint::Length(8),
        Constraint::Length(11),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

pub fn render_issue_table(f: &mut Frame, area: Rect, state: &AppState) {
    let issues = state.issues();
    let focused = state.focused_pane == FocusedPane::Issues;

    let block = Block::default()
        .title(format!(" Issues ({}) ", issues.len()))
        .borders(Borders::ALL)
        .border_style(border_for(state, FocusedPane::Issues));

    if issues.is_empty() {
        let msg = if state.loading { "Loading..." } else { "No issues" };
        let para = Paragraph::new(msg).style(theme::DIM).block(block);
        f.render_widget(para, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("#").style(theme::HEADER),
        Cell::from("State").style(theme::HEADER),
        Cell::from("Title").style(theme::HEADER),
        Cell::from("Updated").style(theme::HEADER),
    ])
    .height(1);

    let rows: Vec<Row> = issues
        .iter()
        .map(|issue| {
            let state_style = match issue.state {
                IssueState::Open => theme::ISSUE_OPEN,
                IssueState::Closed => theme::ISSUE_CLOSED,
            };
            Row::new(vec![
                Cell::from(format!("#{}", issue.number)).style(theme::ISSUE_NUMBER),
                Cell::from(issue.state.as_str()).style(state_style),
                Cell::from(issue.title.as_str()),
                Cell::from(relative_time(&issue.updated_at)).style(theme::DIM),
            ])
            .height(1)
        })
        .collect();

    let widths = [
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Min(20),
        Constraint::Length(9),
    ];

    let mut table = Table::new(rows, widths).header(header).block(block);
    if focused {
        table = table.row_highlight_style(theme::HIGHLIGHT);
    }

    let mut table_state = TableState::default().with_selected(Some(state.issue_cursor));
    f.render_stateful_widget(table, area, &mut table_state);
}

pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let key_hints = match state.focused_pane {
        FocusedPane::Input => "Enter: analyze | Esc: clear | Tab: issues | Ctrl-C: quit",
        FocusedPane::Issues => "j/k: nav | o: open | r: re-run | Tab: input | q: quit",
    };

    let status = if state.loading {
        match state.progress {
            Some(p) => format!("Fetching... {} issues", p.issues),
            None => "Fetching...".to_string(),
        }
    } else if let Some(ref err) = state.error_message {
        format!("Error: {} (Esc to dismiss)", err)
    } else {
        String::new()
    };

    let total_width = area.width as usize;
    let center_width = total_width.saturating_sub(key_hints.chars().count() + 2);
    let status_truncated: String = if status.chars().count() > center_width {
        let keep = center_width.saturating_sub(3);
        format!("{}...", status.chars().take(keep).collect::<String>())
    } else {
        status
    };

    let line = Line::from(vec![
        Span::styled(key_hints, theme::STATUS_BAR),
        Span::styled("  ", theme::STATUS_BAR),
        Span::styled(
            status_truncated,
            if state.error_message.is_some() {
                theme::ERROR.bg(Color::DarkGray)
            } else {
                theme::STATUS_BAR
            },
        ),
    ]);

    let bar = Paragraph::new(line).style(theme::STATUS_BAR);
    f.render_widget(bar, area);
}

pub fn render_error_modal(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(ref msg) = state.error_message else {
        return;
    };

    let modal_width = (area.width / 2).max(40).min(area.width.saturating_sub(4));
    // Wrapped message lines with one spare for word breaks, plus 4 rows of chrome
    let inner_width = (modal_width.saturating_sub(2) as usize).max(1);
    let msg_lines = msg.chars().count().div_ceil(inner_width) + 1;
    let modal_height = u16::try_from(msg_lines + 4)
        .unwrap_or(u16::MAX)
        .min(area.height);
    let x = (area.width.saturating_sub(modal_width)) / 2;
    let y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect {
        x,
        y,
        width: modal_width,
        height: modal_height,
    };

    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(theme::ERROR);

    let text = vec![
        Line::from(Span::styled(msg.as_str(), theme::ERROR)),
        Line::from(""),
        Line::from(Span::styled("Press Esc to dismiss", theme::DIM)),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, modal_area);
}
