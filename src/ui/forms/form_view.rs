//! Form rendering: sections in a two-column grid, submit button and the
//! inline submission error

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FormState, Section};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Sections per grid row
const COLUMNS: usize = 2;

/// Height of a section box holding `fields` fields
fn section_height(fields: usize) -> u16 {
    fields as u16 * FIELD_HEIGHT + 2
}

/// Row heights of the section grid
pub fn grid_row_heights(sections: &[Section]) -> Vec<u16> {
    sections
        .chunks(COLUMNS)
        .map(|row| {
            row.iter()
                .map(|s| section_height(s.fields.len()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Draw the whole form
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let rows = grid_row_heights(&form.sections);
    let grid_height: u16 = rows.iter().sum();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(grid_height),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    draw_sections(frame, chunks[0], form, &rows);

    render_button(
        frame,
        chunks[1],
        app.submit_label(),
        form.is_submit_active(),
        !app.submission.is_submitting(),
    );

    if let Some(error) = app.submission.error() {
        let line = Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(error, Style::default().fg(Color::Red)),
        ]);
        frame.render_widget(Paragraph::new(line).centered(), chunks[2]);
    }
}

fn draw_sections(frame: &mut Frame, area: Rect, form: &FormState, rows: &[u16]) {
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows.iter().map(|h| Constraint::Length(*h)))
        .split(area);

    for (row_area, row) in row_areas.iter().zip(form.sections.chunks(COLUMNS)) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(*row_area);

        for (column, section) in columns.iter().zip(row) {
            draw_section(frame, *column, form, section);
        }
    }
}

fn draw_section(frame: &mut Frame, area: Rect, form: &FormState, section: &Section) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", section.title),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(section.fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)))
        .split(inner);

    for (field_area, name) in field_areas.iter().zip(&section.fields) {
        let Some(index) = form.fields.get_index_of(name) else {
            continue;
        };
        let field = &form.fields[index];
        draw_field(frame, *field_area, field, form.active_field_index == index);
    }
}
