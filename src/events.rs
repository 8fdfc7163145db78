//! Background events fed into the main loop
//!
//! Everything that happens off the key-event path (countdown ticks, finished
//! inserts) is sent over one unbounded channel and applied by the `App` one
//! event at a time.

use crate::state::InsertOutcome;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// An event produced by a background task
#[derive(Debug)]
pub enum AppEvent {
    /// One second elapsed on the countdown clock
    Tick,
    /// A store insert finished
    SubmissionFinished(InsertOutcome),
}

/// One-second ticker task. Aborted when dropped so a torn-down app never
/// receives stale ticks.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    pub const PERIOD: Duration = Duration::from_secs(1);

    /// Spawn the ticker on the current tokio runtime
    pub fn spawn(events: UnboundedSender<AppEvent>) -> Self {
        Self::spawn_with_period(events, Self::PERIOD)
    }

    pub fn spawn_with_period(events: UnboundedSender<AppEvent>, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick of an interval completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if events.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
