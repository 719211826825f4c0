//! Client library for the Kondukto scan management API.
//!
//! Lists the scans of a project, restarts scans, polls the events a
//! restart creates, and fetches scan summaries.
//!
//! # Quick Start
//!
//! ```no_run
//! use kdt_client::{Config, KonduktoClient, ScanApi};
//!
//! #[tokio::main]
//! async fn main() -> kdt_client::Result<()> {
//!     // Reads KONDUKTO_HOST and KONDUKTO_TOKEN
//!     let client = KonduktoClient::new(&Config::from_env())?;
//!
//!     for scan in client.list_scans("my-project").await? {
//!         println!("{} {} score={}", scan.id, scan.tool, scan.score);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Every [`ScanApi`] call is a single request. Waiting for a restarted scan
//! is done by [`poll::restart_and_wait`] or [`poll::wait_for_event`].
//!
//! # Configuration
//!
//! [`Config`] is read from `~/.kdt/config.yaml` and/or the environment:
//!
//! - `KONDUKTO_HOST` - Base URL of the Kondukto instance
//! - `KONDUKTO_TOKEN` - API token
//! - `KONDUKTO_INSECURE` - Skip TLS verification when `true`

pub mod client;
pub mod config;
pub mod error;
pub mod poll;

pub use client::{
    ApiResponse, Event, EventActivity, JobPhase, KonduktoClient, Scan, ScanApi, Summary,
};
pub use config::Config;
pub use error::{ApiError, ConfigError, Error, Result};
pub use poll::PollOptions;
