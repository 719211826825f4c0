//! Scan endpoints of the Kondukto API

use async_trait::async_trait;
use reqwest::{Method, StatusCode};

use super::api::ScanApi;
use super::kondukto::KonduktoClient;
use super::models::{Event, RestartScanResponse, Scan, ScanListResponse};
use crate::error::{ApiError, Result};

/// Reject identifiers that would produce a different path than intended
fn path_segment<'a>(kind: &str, id: &'a str) -> Result<&'a str> {
    if id.is_empty() {
        return Err(ApiError::InvalidRequest(format!("{} must not be empty", kind)).into());
    }
    if id == "." || id == ".." {
        return Err(
            ApiError::InvalidRequest(format!("{} `{}` is a relative path segment", kind, id))
                .into(),
        );
    }
    if id.contains('/') {
        return Err(
            ApiError::InvalidRequest(format!("{} `{}` must not contain '/'", kind, id)).into(),
        );
    }
    Ok(id)
}

fn project_scans_path(project: &str) -> Result<String> {
    let project = path_segment("project identifier", project)?;
    Ok(format!("/api/v1/projects/{}/scans", project))
}

fn restart_path(scan_id: &str) -> Result<String> {
    let scan_id = path_segment("scan identifier", scan_id)?;
    Ok(format!("/api/v1/scans/{}/restart", scan_id))
}

fn event_status_path(event_id: &str) -> Result<String> {
    let event_id = path_segment("event identifier", event_id)?;
    Ok(format!("/api/v1/events/{}/status", event_id))
}

fn summary_path(scan_id: &str) -> Result<String> {
    let scan_id = path_segment("scan identifier", scan_id)?;
    Ok(format!("/api/v1/scans/{}/summary", scan_id))
}

#[async_trait]
impl ScanApi for KonduktoClient {
    async fn list_scans(&self, project: &str) -> Result<Vec<Scan>> {
        let path = project_scans_path(project)?;
        let request = self.new_request::<()>(Method::GET, &path, None)?;

        let response = self.execute(request).await?;
        response.expect_status(StatusCode::OK)?;
        let envelope: ScanListResponse = response.decode()?;

        log::debug!(
            "Fetched {} scans for project {} (total {})",
            envelope.scans.len(),
            project,
            envelope.total
        );
        Ok(envelope.scans)
    }

    async fn restart_scan(&self, scan_id: &str) -> Result<String> {
        let path = restart_path(scan_id)?;
        let request = self.new_request::<()>(Method::GET, &path, None)?;

        let response = self.execute(request).await?;
        response.expect_status(StatusCode::CREATED)?;
        let restart: RestartScanResponse = response.decode()?;

        if restart.event.is_empty() {
            log::warn!(
                "Restart of scan {} returned no event: {}",
                scan_id,
                restart.message
            );
            return Err(ApiError::EmptyResult("restart response carried no event id").into());
        }

        log::debug!("Scan {} restarted as event {}", scan_id, restart.event);
        Ok(restart.event)
    }

    async fn get_scan_status(&self, event_id: &str) -> Result<Event> {
        let path = event_status_path(event_id)?;
        let request = self.new_request::<()>(Method::GET, &path, None)?;

        let response = self.execute(request).await?;
        response.expect_status(StatusCode::OK)?;
        response.decode()
    }

    async fn get_scan_summary(&self, scan_id: &str) -> Result<Scan> {
        let path = summary_path(scan_id)?;
        let request = self.new_request::<()>(Method::GET, &path, None)?;

        let response = self.execute(request).await?;
        response.expect_status(StatusCode::OK)?;
        response.decode()
    }
}
