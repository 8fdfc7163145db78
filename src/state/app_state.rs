//! Application state definitions

use super::countdown::Countdown;
use super::forms::{FormState, FormVariant};

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: FormState,
    /// Present only on the landing page
    pub countdown: Option<Countdown>,
    /// Messages listed in the validation error dialog
    pub validation_errors: Vec<String>,
    pub show_error_dialog: bool,
}

impl AppState {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            form: FormState::for_variant(variant),
            countdown: matches!(variant, FormVariant::Landing).then(Countdown::default),
            validation_errors: Vec::new(),
            show_error_dialog: false,
        }
    }

    /// Open the validation error dialog with the given messages
    pub fn show_validation_errors(&mut self, errors: Vec<String>) {
        self.validation_errors = errors;
        self.show_error_dialog = true;
    }

    /// Close the validation error dialog. Inline field errors stay.
    pub fn dismiss_error_dialog(&mut self) {
        self.show_error_dialog = false;
    }

    /// Advance the countdown, if any. Returns whether it changed.
    pub fn tick_countdown(&mut self) -> bool {
        self.countdown.as_mut().is_some_and(Countdown::tick)
    }
}
