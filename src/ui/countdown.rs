//! Countdown rendering for the landing page

use crate::state::Countdown;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of one unit box
const UNIT_WIDTH: u16 = 11;

/// Draw the four countdown units side by side, centered
pub fn draw(frame: &mut Frame, area: Rect, countdown: &Countdown) {
    let units = countdown.units();
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .spacing(1)
        .constraints(units.iter().map(|_| Constraint::Length(UNIT_WIDTH)))
        .split(area);

    for (rect, (value, label)) in boxes.iter().zip(units) {
        let content = vec![
            Line::from(format_unit(value)).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(label).style(Style::default().fg(Color::DarkGray)),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        frame.render_widget(Paragraph::new(content).centered().block(block), *rect);
    }
}

/// Two-digit, zero-padded unit value
pub fn format_unit(value: u32) -> String {
    format!("{value:02}")
}
