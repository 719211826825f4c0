//! Mock Kondukto API client for testing
//!
//! Provides a mock implementation of [`ScanApi`] for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::ScanApi;
use super::models::{Event, Scan};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockScanApi::new()
///     .with_restart_event("ev-1")
///     .await
///     .with_events(vec![running, finished])
///     .await;
/// ```
#[derive(Default)]
pub struct MockScanApi {
    /// Scans to return from list_scans
    scans: Arc<Mutex<Vec<Scan>>>,
    /// Event ID to return from restart_scan
    restart_event: Arc<Mutex<Option<String>>>,
    /// Events returned in order from get_scan_status; the last one repeats
    events: Arc<Mutex<VecDeque<Event>>>,
    /// Summaries keyed by scan ID
    summaries: Arc<Mutex<HashMap<String, Scan>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CallCounts {
    pub list_scans: usize,
    pub restart_scan: usize,
    pub get_scan_status: usize,
    pub get_scan_summary: usize,
}

impl MockScanApi {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure scans to return from list_scans.
    pub async fn with_scans(self, scans: Vec<Scan>) -> Self {
        *self.scans.lock().await = scans;
        self
    }

    /// Configure the event ID returned from restart_scan.
    pub async fn with_restart_event(self, event_id: &str) -> Self {
        *self.restart_event.lock().await = Some(event_id.to_string());
        self
    }

    /// Configure the sequence of events returned from get_scan_status.
    pub async fn with_events(self, events: Vec<Event>) -> Self {
        *self.events.lock().await = events.into();
        self
    }

    /// Configure the summary returned for a scan ID.
    pub async fn with_summary(self, scan: Scan) -> Self {
        self.summaries.lock().await.insert(scan.id.clone(), scan);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl ScanApi for MockScanApi {
    async fn list_scans(&self, _project: &str) -> Result<Vec<Scan>> {
        self.call_count.lock().await.list_scans += 1;
        self.check_error().await?;

        Ok(self.scans.lock().await.clone())
    }

    async fn restart_scan(&self, _scan_id: &str) -> Result<String> {
        self.call_count.lock().await.restart_scan += 1;
        self.check_error().await?;

        self.restart_event
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::EmptyResult("restart response carried no event id").into())
    }

    async fn get_scan_status(&self, event_id: &str) -> Result<Event> {
        self.call_count.lock().await.get_scan_status += 1;
        self.check_error().await?;

        let mut events = self.events.lock().await;
        let event = if events.len() > 1 {
            events.pop_front()
        } else {
            events.front().cloned()
        };
        let mut event = event.ok_or(ApiError::UnexpectedStatus {
            expected: 200,
            status: 404,
        })?;
        if event.id.is_empty() {
            event.id = event_id.to_string();
        }
        Ok(event)
    }

    async fn get_scan_summary(&self, scan_id: &str) -> Result<Scan> {
        self.call_count.lock().await.get_scan_summary += 1;
        self.check_error().await?;

        self.summaries
            .lock()
            .await
            .get(scan_id)
            .cloned()
            .ok_or_else(|| {
                ApiError::UnexpectedStatus {
                    expected: 200,
                    status: 404,
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockScanApi::new();

        let scans = mock.list_scans("p1").await.unwrap();
        assert!(scans.is_empty());

        let restart = mock.restart_scan("s1").await;
        assert!(matches!(
            restart,
            Err(Error::Api(ApiError::EmptyResult(_)))
        ));
    }

    #[tokio::test]
    async fn test_mock_client_with_scans() {
        let mock = MockScanApi::new()
            .with_scans(vec![Scan {
                id: "s1".to_string(),
                score: 55,
                ..Scan::default()
            }])
            .await;

        let scans = mock.list_scans("p1").await.unwrap();
        assert_eq!(scans.len(), 1);
        assert_eq!(scans[0].score, 55);
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockScanApi::new()
            .with_error(ApiError::UnexpectedStatus {
                expected: 200,
                status: 503,
            })
            .await;

        assert!(mock.list_scans("p1").await.is_err());

        // Error is consumed, next call succeeds
        assert!(mock.list_scans("p1").await.is_ok());
        assert_eq!(mock.call_counts().await.list_scans, 2);
    }

    #[tokio::test]
    async fn test_mock_events_last_one_repeats() {
        let mock = MockScanApi::new()
            .with_events(vec![
                Event {
                    status: 1,
                    active: 1,
                    ..Event::default()
                },
                Event {
                    status: 4,
                    active: 0,
                    ..Event::default()
                },
            ])
            .await;

        assert_eq!(mock.get_scan_status("ev").await.unwrap().status, 1);
        assert_eq!(mock.get_scan_status("ev").await.unwrap().status, 4);
        let repeated = mock.get_scan_status("ev").await.unwrap();
        assert_eq!(repeated.status, 4);
        assert_eq!(repeated.id, "ev");
    }
}
