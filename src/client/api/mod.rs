//! API trait definitions
//!
//! - [`ScanApi`] - Scan listing, restart and status operations

mod scan;

pub use scan::ScanApi;
