//! Validation error dialog component

use super::base::{key_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render the dialog listing every failing field message
pub fn render_validation_dialog(frame: &mut Frame, errors: &[String]) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Please Fix the Following Errors:",
            accent: Color::Red,
            bullets: errors,
            hint: Some(key_hint("Enter", "try again")),
            ..Default::default()
        },
    );
}
