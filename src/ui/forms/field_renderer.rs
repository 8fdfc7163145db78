//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus a note line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field: bordered input, then its inline error or help text
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };

    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = if field.rule.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(input_line(field, is_active)).block(block),
        input_area,
    );

    if area.height > 3 {
        let note_area = Rect {
            y: area.y + 3,
            height: 1,
            ..area
        };
        if let Some(note) = note_line(field) {
            frame.render_widget(Paragraph::new(note), note_area);
        }
    }
}

/// Content of the input box
fn input_line(field: &FormField, is_active: bool) -> Line<'static> {
    let value = field.display_value();
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let shown = if value.is_empty() {
        Span::styled(field.placeholder.clone(), placeholder_style)
    } else {
        Span::styled(value, text_style)
    };

    match &field.kind {
        FieldKind::Select(_) => {
            let arrow_style = if is_active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled("◀ ", arrow_style),
                shown,
                Span::styled(" ▶", arrow_style),
            ])
        }
        FieldKind::Text | FieldKind::Phone => {
            let cursor = if is_active { "▌" } else { "" };
            if field.value.is_empty() && is_active {
                Line::from(vec![
                    Span::styled(cursor, Style::default().fg(Color::Cyan)),
                    shown,
                ])
            } else {
                Line::from(vec![
                    shown,
                    Span::styled(cursor, Style::default().fg(Color::Cyan)),
                ])
            }
        }
    }
}

/// Inline error takes precedence over help text
fn note_line(field: &FormField) -> Option<Line<'static>> {
    if let Some(error) = &field.error {
        return Some(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )));
    }
    field.help_text.as_ref().map(|help| {
        Line::from(Span::styled(
            format!(" {help}"),
            Style::default().fg(Color::DarkGray),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ValidationRule;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_field_shows_placeholder() {
        let field = FormField::text("school_name", "School Name", "Enter school name", ValidationRule::required());
        assert_eq!(line_text(&input_line(&field, false)), "Enter school name");
    }

    #[test]
    fn test_active_field_shows_cursor_after_value() {
        let mut field = FormField::text("school_name", "School Name", "", ValidationRule::required());
        field.value = "Lincoln".to_string();
        assert_eq!(line_text(&input_line(&field, true)), "Lincoln▌");
    }

    #[test]
    fn test_error_replaces_help_text() {
        let mut field = FormField::text("special_code", "Discount Code", "", ValidationRule::required())
            .with_help("Early-access members get a discount at launch");
        assert_eq!(
            line_text(&note_line(&field).unwrap()),
            " Early-access members get a discount at launch"
        );

        field.validate();
        assert_eq!(
            line_text(&note_line(&field).unwrap()),
            " Discount Code is required."
        );
    }

    #[test]
    fn test_no_note_without_error_or_help() {
        let field = FormField::text("name", "Name", "", ValidationRule::required());
        assert!(note_line(&field).is_none());
    }
}
