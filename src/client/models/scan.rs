//! Scan models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single security scan run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scan {
    /// Scan ID
    #[serde(default)]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Free-form metadata attached when the scan was created
    #[serde(default)]
    pub meta_data: String,

    /// Scanner tool name (e.g. `semgrep`, `zap`)
    #[serde(default)]
    pub tool: String,

    /// When the scan ran; `None` when the server sends `null` or omits it
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    /// Kondukto score
    #[serde(default)]
    pub score: i64,

    /// Finding counts by severity
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: Summary,
}

/// Finding counts by severity tier
///
/// Counts are taken from the server unchecked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub critical: i64,
    #[serde(default)]
    pub high: i64,
    #[serde(default)]
    pub medium: i64,
    #[serde(default)]
    pub low: i64,
    #[serde(default)]
    pub info: i64,
}

impl Summary {
    /// Total number of findings across all tiers
    pub fn total(&self) -> i64 {
        self.critical + self.high + self.medium + self.low + self.info
    }
}

/// Envelope returned by the project scan listing
#[derive(Debug, Deserialize)]
pub(crate) struct ScanListResponse {
    #[serde(default, rename = "data", deserialize_with = "null_as_default")]
    pub scans: Vec<Scan>,

    /// Informational only; the listing is not paginated
    #[serde(default)]
    pub total: i64,
}

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
