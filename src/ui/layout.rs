//! Screen layout: header, form body and status bar

use crate::app::App;
use crate::state::SubmissionState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows used by the countdown strip
const COUNTDOWN_HEIGHT: u16 = 4;

/// Split the screen into (header, body, status bar)
pub fn create_layout(area: Rect, with_countdown: bool) -> (Rect, Rect, Rect) {
    let header_height = if with_countdown {
        3 + COUNTDOWN_HEIGHT
    } else {
        3
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draw title, subtitle and, on the landing page, the countdown
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let text_area = Rect {
        height: area.height.min(3),
        ..area
    };
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            form.title.as_str(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            form.subtitle.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .centered();
    frame.render_widget(header, text_area);

    if let Some(countdown) = &app.state.countdown {
        let countdown_area = Rect {
            y: area.y + 3,
            height: area.height.saturating_sub(3),
            ..area
        };
        super::countdown::draw(frame, countdown_area, countdown);
    }
}

/// Draw the status bar with state and key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (label, color) = match app.submission.state() {
        SubmissionState::Idle => ("READY", Color::Blue),
        SubmissionState::Submitting => ("SUBMITTING", Color::Yellow),
        SubmissionState::Success(_) => ("SUBMITTED", Color::Green),
        SubmissionState::Error(_) => ("FAILED", Color::Red),
    };

    let spans = vec![
        Span::styled(
            format!(" {label} "),
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::raw(view_hints(app)),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current state
fn view_hints(app: &App) -> &'static str {
    if app.is_success_dialog_open() || app.state.show_error_dialog {
        "Enter/Esc:close  ^C:quit"
    } else if app
        .state
        .form
        .active_field()
        .is_some_and(|f| f.is_select())
    {
        "Tab/↑↓:move  ←→/Space:choose  ^S:submit  ^C:quit"
    } else {
        "Tab/↑↓:move  Enter:next  ^S:submit  ^C:quit"
    }
}
