//! Scan API trait

use async_trait::async_trait;

use crate::client::models::{Event, Scan};
use crate::error::Result;

/// Scan operations for the Kondukto API
///
/// Each method performs exactly one HTTP round trip. Nothing here retries
/// or polls; compose the calls with [`crate::poll`] or your own loop.
#[async_trait]
pub trait ScanApi: Send + Sync {
    /// List all scans of a project
    ///
    /// Returns an empty vector when the project has no scans.
    async fn list_scans(&self, project: &str) -> Result<Vec<Scan>>;

    /// Restart a scan and return the ID of the event tracking it
    ///
    /// Fails with [`ApiError::EmptyResult`](crate::error::ApiError::EmptyResult)
    /// when the server accepts the restart without creating an event.
    async fn restart_scan(&self, scan_id: &str) -> Result<String>;

    /// Get the current state of a restart event
    async fn get_scan_status(&self, event_id: &str) -> Result<Event>;

    /// Get a scan with its severity summary
    async fn get_scan_summary(&self, scan_id: &str) -> Result<Scan>;
}
