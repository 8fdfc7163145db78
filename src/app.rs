//! Application state and core logic

use crate::events::{AppEvent, Ticker};
use crate::state::{AppState, FormVariant, SubmissionAdapter, SubmissionState};
use crate::store::RecordStore;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Submission adapter wrapping the injected store
    pub submission: SubmissionAdapter,
    /// Sender handed to background tasks
    events_tx: UnboundedSender<AppEvent>,
    /// Background events waiting to be applied
    events_rx: UnboundedReceiver<AppEvent>,
    /// Countdown ticker, landing page only. Only held so dropping the app
    /// stops the ticks.
    #[allow(dead_code)]
    ticker: Option<Ticker>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App for `variant`.
    ///
    /// The landing page spawns its countdown ticker, so this must run inside a
    /// tokio runtime for that variant.
    pub fn new(variant: FormVariant, store: Arc<dyn RecordStore>) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        let state = AppState::new(variant);
        let ticker = state
            .countdown
            .is_some()
            .then(|| Ticker::spawn(events_tx.clone()));

        Self {
            state,
            submission: SubmissionAdapter::new(store),
            events_tx,
            events_rx,
            ticker,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The success dialog is shown for as long as the last submit succeeded
    pub fn is_success_dialog_open(&self) -> bool {
        self.submission.is_success()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        // Success dialog (modal)
        if self.is_success_dialog_open() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.close_success_dialog();
            }
            return;
        }

        // Validation error dialog (modal)
        if self.state.show_error_dialog {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error_dialog();
            }
            return;
        }

        let on_submit_row = key.code == KeyCode::Enter && self.state.form.is_submit_active();
        if on_submit_row || (ctrl && key.code == KeyCode::Char('s')) {
            self.submit();
            return;
        }

        let form = &mut self.state.form;
        let on_select = form.active_field().is_some_and(|f| f.is_select());
        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left => form.select_prev(),
            KeyCode::Right => form.select_next(),
            KeyCode::Char(' ') if on_select => form.select_next(),
            KeyCode::Char(c) if !ctrl => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    /// Validate the form and, if it passes, start one insert in the
    /// background. Ignored while an insert is in flight.
    pub fn submit(&mut self) {
        if self.submission.is_submitting() {
            debug!("submit ignored, insert already in flight");
            return;
        }

        let record = match self.state.form.validate_all() {
            Ok(record) => record,
            Err(errors) => {
                debug!(count = errors.len(), "form has validation errors");
                let first_invalid = self
                    .state
                    .form
                    .invalid_fields()
                    .first()
                    .map(|n| n.to_string());
                if let Some(name) = first_invalid {
                    self.state.form.focus(&name);
                }
                self.state.show_validation_errors(errors);
                return;
            }
        };

        match self.submission.begin(record) {
            Ok(insert) => {
                let events = self.events_tx.clone();
                tokio::spawn(async move {
                    let outcome = insert.await;
                    // The receiver is gone only when the app is shutting down.
                    let _ = events.send(AppEvent::SubmissionFinished(outcome));
                });
            }
            Err(err) => debug!(%err, "submit refused"),
        }
    }

    /// Dismiss the success dialog and start a fresh form
    pub fn close_success_dialog(&mut self) {
        self.submission.reset();
        self.state.form.reset();
    }

    /// Apply one background event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {
                self.state.tick_countdown();
            }
            AppEvent::SubmissionFinished(outcome) => {
                if let Err(err) = &outcome.result {
                    warn!(%err, "submission failed");
                }
                self.submission.complete(outcome);
                if let SubmissionState::Success(submitted) = self.submission.state() {
                    info!(
                        table = submitted.record.table(),
                        id = ?submitted.receipt.id,
                        created_at = ?submitted.receipt.created_at,
                        "record inserted"
                    );
                }
            }
        }
    }

    /// Apply every pending background event without waiting
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Label for the submit button
    pub fn submit_label(&self) -> &str {
        match self.submission.state() {
            SubmissionState::Submitting => "Submitting...",
            _ => &self.state.form.submit_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Receipt, Record, StudentRegistration};
    use crate::store::{MockRecordStore, StoreError};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn fill_registration(app: &mut App) {
        let form = &mut app.state.form;
        form.set_value("student_name", "Asha Rao");
        form.set_value("contact_number", "1234567890");
        form.set_value("school_name", "Springfield High");
        form.set_value("school_address", "12 Elm Street");
        form.set_value("grade", "10");
    }

    fn expected_record() -> Record {
        Record::Student(StudentRegistration {
            student_name: "Asha Rao".to_string(),
            contact_number: "1234567890".to_string(),
            school_name: "Springfield High".to_string(),
            school_address: "12 Elm Street".to_string(),
            grade: "10".to_string(),
            special_code: String::new(),
        })
    }

    /// Wait for the next background event and apply it
    async fn settle(app: &mut App) {
        let event = app.events_rx.recv().await.expect("event channel open");
        app.handle_event(event);
    }

    mod submit_flow {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_form_never_contacts_store() {
            let mut store = MockRecordStore::new();
            store.expect_insert().never();
            let mut app = App::new(FormVariant::Registration, Arc::new(store));

            app.submit();

            assert!(app.state.show_error_dialog);
            assert_eq!(app.state.validation_errors.len(), 5);
            assert_eq!(app.submission.state(), &SubmissionState::Idle);
        }

        #[tokio::test]
        async fn test_valid_form_inserts_exact_record_once() {
            let mut store = MockRecordStore::new();
            store
                .expect_insert()
                .withf(|table, record| table == "students" && *record == expected_record())
                .times(1)
                .returning(|_, _| Ok(Receipt::default()));
            let mut app = App::new(FormVariant::Registration, Arc::new(store));
            fill_registration(&mut app);

            app.submit();
            assert!(app.submission.is_submitting());
            assert_eq!(app.submit_label(), "Submitting...");

            settle(&mut app).await;
            assert!(app.is_success_dialog_open());
            match app.submission.state() {
                SubmissionState::Success(submitted) => {
                    assert_eq!(submitted.record.name(), "Asha Rao");
                    assert_eq!(submitted.record.grade(), "10");
                }
                other => panic!("unexpected state {other:?}"),
            }
        }

        #[tokio::test]
        async fn test_closing_success_dialog_resets_form() {
            let mut store = MockRecordStore::new();
            store
                .expect_insert()
                .returning(|_, _| Ok(Receipt::default()));
            let mut app = App::new(FormVariant::Registration, Arc::new(store));
            fill_registration(&mut app);

            app.submit();
            settle(&mut app).await;
            app.handle_key(key(KeyCode::Enter));

            assert!(!app.is_success_dialog_open());
            assert_eq!(app.submission.state(), &SubmissionState::Idle);
            assert!(app.state.form.fields.values().all(|f| f.value.is_empty()));
        }

        #[tokio::test]
        async fn test_failure_keeps_values_and_shows_message() {
            let mut store = MockRecordStore::new();
            store.expect_insert().times(1).returning(|_, _| {
                Err(StoreError::Rejected {
                    status: 401,
                    message: "Invalid API key".to_string(),
                })
            });
            let mut app = App::new(FormVariant::Registration, Arc::new(store));
            fill_registration(&mut app);

            app.submit();
            settle(&mut app).await;

            assert_eq!(app.submission.error(), Some("Invalid API key"));
            assert_eq!(app.state.form.value("student_name"), "Asha Rao");
            assert_eq!(app.state.form.value("grade"), "10");
            assert_eq!(app.submit_label(), "Complete Registration");
        }

        #[tokio::test]
        async fn test_rapid_double_submit_issues_one_insert() {
            let mut store = MockRecordStore::new();
            store
                .expect_insert()
                .times(1)
                .returning(|_, _| Ok(Receipt::default()));
            let mut app = App::new(FormVariant::Registration, Arc::new(store));
            fill_registration(&mut app);

            app.submit();
            app.handle_key(ctrl('s'));
            settle(&mut app).await;

            assert!(app.is_success_dialog_open());
            assert!(app.events_rx.try_recv().is_err());
        }
    }

    mod keys {
        use super::*;
        use pretty_assertions::assert_eq;

        fn app() -> App {
            App::new(FormVariant::Registration, Arc::new(MockRecordStore::new()))
        }

        #[tokio::test]
        async fn test_typing_fills_focused_field() {
            let mut app = app();
            type_text(&mut app, "Asha");
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, "123");
            app.handle_key(key(KeyCode::Backspace));

            assert_eq!(app.state.form.value("student_name"), "Asha");
            assert_eq!(app.state.form.value("contact_number"), "12");
        }

        #[tokio::test]
        async fn test_arrows_choose_grade() {
            let mut app = app();
            app.state.form.focus("grade");
            app.handle_key(key(KeyCode::Right));
            app.handle_key(key(KeyCode::Char(' ')));
            assert_eq!(app.state.form.value("grade"), "9");
            app.handle_key(key(KeyCode::Left));
            assert_eq!(app.state.form.value("grade"), "8");
        }

        #[tokio::test]
        async fn test_failed_submit_focuses_first_invalid_field() {
            let mut app = app();
            app.state.form.set_value("student_name", "Asha Rao");
            app.state.form.set_value("contact_number", "123");
            app.handle_key(ctrl('s'));

            let focused = app.state.form.active_field().unwrap();
            assert_eq!(focused.name, "contact_number");
        }

        #[tokio::test]
        async fn test_enter_on_submit_row_validates() {
            let mut app = app();
            app.handle_key(key(KeyCode::BackTab));
            assert!(app.state.form.is_submit_active());
            app.handle_key(key(KeyCode::Enter));
            assert!(app.state.show_error_dialog);
        }

        #[tokio::test]
        async fn test_enter_on_field_moves_focus() {
            let mut app = app();
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.form.active_field_index, 1);
            assert!(!app.state.show_error_dialog);
        }

        #[tokio::test]
        async fn test_error_dialog_swallows_keys_until_dismissed() {
            let mut app = app();
            app.submit();
            type_text(&mut app, "x");
            assert_eq!(app.state.form.value("student_name"), "");

            app.handle_key(key(KeyCode::Esc));
            assert!(!app.state.show_error_dialog);
            assert!(app.state.form.field("student_name").unwrap().error.is_some());
        }

        #[tokio::test]
        async fn test_ctrl_c_quits() {
            let mut app = app();
            assert!(!app.should_quit());
            app.handle_key(ctrl('c'));
            assert!(app.should_quit());
        }
    }

    mod countdown {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_registration_has_no_ticker() {
            let app = App::new(FormVariant::Registration, Arc::new(MockRecordStore::new()));
            assert!(app.ticker.is_none());
        }

        #[tokio::test(start_paused = true)]
        async fn test_landing_ticks_once_per_second() {
            let mut app = App::new(FormVariant::Landing, Arc::new(MockRecordStore::new()));
            assert!(app.ticker.is_some());

            settle(&mut app).await;
            let countdown = app.state.countdown.unwrap();
            assert_eq!(countdown.seconds, 10);
            assert_eq!(countdown.minutes, 54);
        }
    }
}
