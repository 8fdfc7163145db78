//! UI module for rendering the TUI

mod components;
mod countdown;
mod forms;
mod layout;

use crate::app::App;
use crate::state::SubmissionState;
use components::{render_success_dialog, render_validation_dialog};
use ratatui::{layout::Rect, Frame};

/// Widest the form grows on large terminals
const MAX_FORM_WIDTH: u16 = 110;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header_area, body_area, status_area) =
        layout::create_layout(area, app.state.countdown.is_some());

    layout::draw_header(frame, header_area, app);
    forms::draw_form(frame, centered(body_area, MAX_FORM_WIDTH), app);
    layout::draw_status_bar(frame, status_area, app);

    // Dialog overlays
    if let SubmissionState::Success(submitted) = app.submission.state() {
        render_success_dialog(
            frame,
            submitted.record.name(),
            &app.state.form.grade_word,
            submitted.record.grade(),
        );
    } else if app.state.show_error_dialog {
        render_validation_dialog(frame, &app.state.validation_errors);
    }
}

/// Limit `area` to `max_width` columns, centered
fn centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
