//! Error types for the Kondukto client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the library
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The API error behind this error, if any.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether repeating the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        self.as_api().is_some_and(ApiError::is_retryable)
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response not ok: expected HTTP {expected}, got HTTP {status}")]
    UnexpectedStatus { expected: u16, status: u16 },

    /// The server accepted the call but returned nothing usable.
    #[error("Empty result: {0}")]
    EmptyResult(&'static str),

    #[error("Invalid API response: {0}")]
    Decode(String),

    #[error("Scan failed (event {event_id}): {message}")]
    ScanFailed { event_id: String, message: String },

    #[error("Event {event_id} did not finish after {attempts} status checks")]
    PollTimeout { event_id: String, attempts: u32 },
}

impl ApiError {
    /// HTTP status code of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Transient failures: timeouts, connection failures, 429 and 5xx.
    ///
    /// An empty restart result is permanent; the server accepted the call
    /// and will not produce an event for it on a repeat.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(err) => err.is_timeout() || err.is_connect(),
            ApiError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
            ApiError::PollTimeout { .. } => true,
            ApiError::InvalidRequest(_)
            | ApiError::EmptyResult(_)
            | ApiError::Decode(_)
            | ApiError::ScanFailed { .. } => false,
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Kondukto host not configured. Set `host` in the config file or KONDUKTO_HOST.")]
    MissingHost,

    #[error("API token not configured. Set `token` in the config file or KONDUKTO_TOKEN.")]
    MissingToken,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
