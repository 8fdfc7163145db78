//! Success dialog component

use super::base::{key_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Acknowledgement text naming the submitter and their grade or class
pub fn success_message(name: &str, grade_word: &str, grade: &str) -> String {
    format!(
        "Thank you, {name}! Your {grade_word} {grade} registration has been successfully submitted.\n\n\
         Our team will review your details and contact you shortly on the number you provided."
    )
}

/// Render the registration-complete dialog
pub fn render_success_dialog(frame: &mut Frame, name: &str, grade_word: &str, grade: &str) {
    let message = success_message(name, grade_word, grade);
    render_dialog(
        frame,
        DialogConfig {
            title: "Registration Complete!",
            accent: Color::Green,
            message: &message,
            hint: Some(key_hint("Enter", "complete")),
            ..Default::default()
        },
    );
}
