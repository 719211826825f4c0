//! Event models
//!
//! Restarting a scan creates an event that Kondukto processes
//! asynchronously. The raw `status` and `active` integers map onto
//! [`JobPhase`] and [`EventActivity`].

use serde::{Deserialize, Serialize};

/// Asynchronous job record created by a scan restart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event ID
    #[serde(default)]
    pub id: String,

    /// Raw job phase, see [`Event::phase`]
    #[serde(default)]
    pub status: i32,

    /// Raw activity flag, see [`Event::activity`]
    #[serde(default)]
    pub active: i32,

    /// Scan the event belongs to
    #[serde(default)]
    pub scan_id: String,

    /// Server-provided message
    #[serde(default)]
    pub message: String,
}

impl Event {
    pub fn phase(&self) -> JobPhase {
        JobPhase::from(self.status)
    }

    pub fn activity(&self) -> EventActivity {
        EventActivity::from(self.active)
    }

    /// The job ran to completion and the scan results are available
    pub fn is_finished(&self) -> bool {
        self.activity() == EventActivity::Inactive && self.phase() == JobPhase::Finished
    }

    pub fn is_failed(&self) -> bool {
        self.activity() == EventActivity::Failed
    }
}

/// Activity flag of an event (`active` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventActivity {
    Failed,
    Inactive,
    Active,
    Unknown(i32),
}

impl From<i32> for EventActivity {
    fn from(value: i32) -> Self {
        match value {
            -1 => EventActivity::Failed,
            0 => EventActivity::Inactive,
            1 => EventActivity::Active,
            other => EventActivity::Unknown(other),
        }
    }
}

/// Processing phase of a scan job (`status` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobPhase {
    Starting,
    Running,
    Analyzing,
    Notifying,
    Finished,
    Unknown(i32),
}

impl From<i32> for JobPhase {
    fn from(value: i32) -> Self {
        match value {
            0 => JobPhase::Starting,
            1 => JobPhase::Running,
            2 => JobPhase::Analyzing,
            3 => JobPhase::Notifying,
            4 => JobPhase::Finished,
            other => JobPhase::Unknown(other),
        }
    }
}

impl std::fmt::Display for JobPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobPhase::Starting => write!(f, "starting"),
            JobPhase::Running => write!(f, "running"),
            JobPhase::Analyzing => write!(f, "analyzing"),
            JobPhase::Notifying => write!(f, "notifying"),
            JobPhase::Finished => write!(f, "finished"),
            JobPhase::Unknown(n) => write!(f, "unknown ({})", n),
        }
    }
}

/// Envelope returned by a scan restart
#[derive(Debug, Deserialize)]
pub(crate) struct RestartScanResponse {
    #[serde(default)]
    pub event: String,

    #[serde(default)]
    pub message: String,
}
