//! Kondukto API data models
//!
//! Domain types decoded from Kondukto responses, plus the private
//! envelopes that wrap them on the wire.

mod event;
mod scan;

pub use event::{Event, EventActivity, JobPhase};
pub use scan::{Scan, Summary};

pub(crate) use event::RestartScanResponse;
pub(crate) use scan::ScanListResponse;
