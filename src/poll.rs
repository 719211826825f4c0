//! Polling of restart events
//!
//! [`ScanApi`] calls are single round trips. This module composes them into
//! the restart → poll status → fetch summary workflow, with an explicit
//! interval and attempt limit.

use std::time::Duration;

use crate::client::{Event, JobPhase, Scan, ScanApi};
use crate::error::{ApiError, Result};

/// Default delay between status checks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Polling cadence and limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    /// Delay between two status checks
    pub interval: Duration,

    /// Give up after this many status checks; `None` polls until a terminal state
    pub max_attempts: Option<u32>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: None,
        }
    }
}

impl PollOptions {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }
}

/// Poll an event until it finishes or fails.
///
/// Returns the finished event. Fails with [`ApiError::ScanFailed`] when the
/// event reports failure and [`ApiError::PollTimeout`] when `max_attempts`
/// checks pass without a terminal state. Errors from the status call are
/// returned as-is.
pub async fn wait_for_event(
    api: &dyn ScanApi,
    event_id: &str,
    options: PollOptions,
) -> Result<Event> {
    let mut attempts: u32 = 0;
    let mut last_phase: Option<JobPhase> = None;

    loop {
        let event = api.get_scan_status(event_id).await?;
        attempts += 1;

        let phase = event.phase();
        log::debug!(
            "Event {} check {}: phase={}, active={}",
            event_id,
            attempts,
            phase,
            event.active
        );
        if last_phase != Some(phase) {
            log::info!("Event {} is {}", event_id, phase);
            last_phase = Some(phase);
        }

        if event.is_failed() {
            log::warn!("Event {} failed: {}", event_id, event.message);
            return Err(ApiError::ScanFailed {
                event_id: event_id.to_string(),
                message: event.message,
            }
            .into());
        }
        if event.is_finished() {
            return Ok(event);
        }

        if options.max_attempts.is_some_and(|max| attempts >= max) {
            return Err(ApiError::PollTimeout {
                event_id: event_id.to_string(),
                attempts,
            }
            .into());
        }

        tokio::time::sleep(options.interval).await;
    }
}

/// Restart a scan, wait for it to finish, and fetch its summary.
pub async fn restart_and_wait(
    api: &dyn ScanApi,
    scan_id: &str,
    options: PollOptions,
) -> Result<Scan> {
    let event_id = api.restart_scan(scan_id).await?;
    log::info!("Scan {} restarted, tracking event {}", scan_id, event_id);

    let event = wait_for_event(api, &event_id, options).await?;

    // A finished event normally points at the new scan
    let summary_id = if event.scan_id.is_empty() {
        scan_id
    } else {
        event.scan_id.as_str()
    };
    api.get_scan_summary(summary_id).await
}
