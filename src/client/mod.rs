//! Kondukto API client

pub mod api;
pub mod kondukto;
#[cfg(test)]
pub mod mock;
pub mod models;
mod scans;

pub use api::ScanApi;
pub use kondukto::{ApiResponse, KonduktoClient};
#[cfg(test)]
pub use mock::MockScanApi;
pub use models::{Event, EventActivity, JobPhase, Scan, Summary};
