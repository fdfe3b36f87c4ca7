//! Daily delivery state machine.
//!
//! Each wake-up classifies the current instant into exactly one [`DayPhase`]
//! and derives the action plus the next sleep. Sleeps are capped at the
//! re-check interval so the loop periodically re-evaluates instead of
//! trusting one long sleep across clock anomalies.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::countdown::days_remaining;
use crate::message;
use crate::sink::DeliverySink;

/// The daily time-of-day interval during which a send counts as on time.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryWindow {
    /// Inclusive start.
    pub start: NaiveTime,
    /// Exclusive end.
    pub end: NaiveTime,
}

impl DeliveryWindow {
    pub fn contains(&self, t: NaiveTime) -> bool {
        self.start <= t && t < self.end
    }
}

/// Where a wake-up lands relative to today's window and send state.
///
/// The four phases are mutually exclusive and cover the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    /// Too early; wait for the window to open.
    BeforeWindow,
    /// Inside the window with today's send still owed.
    InWindowPending,
    /// Today's send already succeeded; nothing until tomorrow.
    AlreadySentToday,
    /// Window closed without a send; the day is forfeit, no catch-up.
    MissedWindow,
}

/// Classify an instant against the window and the last successful send date.
pub fn classify(
    now: NaiveDateTime,
    window: &DeliveryWindow,
    last_sent: Option<NaiveDate>,
) -> DayPhase {
    if last_sent == Some(now.date()) {
        return DayPhase::AlreadySentToday;
    }
    let t = now.time();
    if t < window.start {
        DayPhase::BeforeWindow
    } else if window.contains(t) {
        DayPhase::InWindowPending
    } else {
        DayPhase::MissedWindow
    }
}

/// Result of one delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The sink accepted the message.
    Delivered { days_left: i64 },
    /// No destination configured; nothing was sent.
    Skipped { days_left: i64 },
}

impl SendOutcome {
    pub fn days_left(&self) -> i64 {
        match self {
            SendOutcome::Delivered { days_left } | SendOutcome::Skipped { days_left } => *days_left,
        }
    }
}

struct SchedulerState {
    // Date of the last successful delivery. Never moves backward; in-process
    // only, so a restart forgets it and the window rules decide afresh.
    last_sent: Option<NaiveDate>,
}

/// Owns the countdown delivery: target date, window, destination, and the
/// once-per-day send state.
///
/// The state mutex also serializes the manual send path against the daily
/// loop, so two sends can never interleave.
pub struct Notifier {
    target: NaiveDate,
    window: DeliveryWindow,
    recheck: Duration,
    destination: Option<String>,
    sink: Arc<dyn DeliverySink>,
    state: Mutex<SchedulerState>,
}

impl Notifier {
    pub fn new(
        target: NaiveDate,
        window: DeliveryWindow,
        recheck: Duration,
        destination: Option<String>,
        sink: Arc<dyn DeliverySink>,
    ) -> Self {
        Self {
            target,
            window,
            recheck,
            destination,
            sink,
            state: Mutex::new(SchedulerState { last_sent: None }),
        }
    }

    /// One scheduler iteration: classify, act, return the next sleep.
    ///
    /// Infallible on purpose — delivery errors are logged and leave state
    /// untouched, so no single iteration can take the loop down.
    pub async fn tick(&self, now: NaiveDateTime) -> Duration {
        let mut state = self.state.lock().await;
        match classify(now, &self.window, state.last_sent) {
            DayPhase::BeforeWindow => {
                self.capped_wait(now, now.date().and_time(self.window.start))
            }
            DayPhase::AlreadySentToday | DayPhase::MissedWindow => {
                let tomorrow = now.date() + Days::new(1);
                self.capped_wait(now, tomorrow.and_time(self.window.start))
            }
            DayPhase::InWindowPending => {
                match self.push(now).await {
                    Ok(SendOutcome::Delivered { days_left }) => {
                        state.last_sent = Some(now.date());
                        info!(days_left, "daily countdown delivered");
                    }
                    Ok(SendOutcome::Skipped { .. }) => {}
                    Err(e) => {
                        warn!("daily countdown delivery failed: {e}");
                    }
                }
                // Re-check after the cap: retries while the window is still
                // open, lands on AlreadySentToday/MissedWindow otherwise.
                self.recheck
            }
        }
    }

    /// Manual send path (the `/test` endpoint and the CLI).
    ///
    /// Holds the state lock so it cannot interleave with the daily loop's
    /// own attempt, but does not mark the day as sent — a manual push is an
    /// operational test, not the scheduled delivery.
    pub async fn send_now(&self, now: NaiveDateTime) -> anyhow::Result<SendOutcome> {
        let _state = self.state.lock().await;
        self.push(now).await
    }

    /// Date of the last successful scheduled delivery, if any.
    pub async fn last_sent(&self) -> Option<NaiveDate> {
        self.state.lock().await.last_sent
    }

    async fn push(&self, now: NaiveDateTime) -> anyhow::Result<SendOutcome> {
        let days_left = days_remaining(self.target, now);
        let Some(to) = &self.destination else {
            info!("no destination configured, countdown push skipped");
            return Ok(SendOutcome::Skipped { days_left });
        };
        let text = message::daily_countdown(days_left, self.target);
        self.sink.deliver(to, &text).await?;
        Ok(SendOutcome::Delivered { days_left })
    }

    fn capped_wait(&self, now: NaiveDateTime, until: NaiveDateTime) -> Duration {
        let remaining = (until - now).to_std().unwrap_or(Duration::ZERO);
        remaining.min(self.recheck)
    }
}
