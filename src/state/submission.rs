//! Submission adapter: one remote insert per valid submit
//!
//! The adapter owns the idle/submitting/success/error state and enforces that
//! at most one insert is in flight. The insert itself is handed back to the
//! caller as a future so the event loop can run it in the background and feed
//! the outcome back through [`SubmissionAdapter::complete`].

use crate::state::{Receipt, Record};
use crate::store::{RecordStore, StoreError};
use std::future::Future;
use std::sync::Arc;

/// Shown when the store fails without saying why
pub const FALLBACK_ERROR: &str = "An unknown error occurred";

/// A record the store acknowledged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub record: Record,
    pub receipt: Receipt,
}

/// Observable outcome of the latest submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success(Submitted),
    Error(String),
}

/// Result of a finished insert, delivered back to the adapter
#[derive(Debug)]
pub struct InsertOutcome {
    pub record: Record,
    pub result: Result<Receipt, StoreError>,
}

/// Why a submission could not be started
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
}

/// Issues inserts against an injected store and tracks their outcome
pub struct SubmissionAdapter {
    store: Arc<dyn RecordStore>,
    state: SubmissionState,
}

impl SubmissionAdapter {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self.state, SubmissionState::Success(_))
    }

    /// Error message of the last failed submission
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Start an insert. Clears any previous error and moves to `Submitting`;
    /// the returned future performs exactly one store call.
    pub fn begin(
        &mut self,
        record: Record,
    ) -> Result<impl Future<Output = InsertOutcome> + Send + 'static, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        self.state = SubmissionState::Submitting;

        let store = Arc::clone(&self.store);
        Ok(async move {
            let result = store.insert(record.table(), &record).await;
            InsertOutcome { record, result }
        })
    }

    /// Record the outcome of an insert started by [`begin`](Self::begin)
    pub fn complete(&mut self, outcome: InsertOutcome) {
        self.state = match outcome.result {
            Ok(receipt) => SubmissionState::Success(Submitted {
                record: outcome.record,
                receipt,
            }),
            Err(err) => SubmissionState::Error(err.message().unwrap_or(FALLBACK_ERROR).to_string()),
        };
    }

    /// Return to `Idle`, dropping any success or error
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
    }
}
