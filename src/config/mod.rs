//! Configuration management for the Kondukto client

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Environment variable overriding the Kondukto host
pub const ENV_HOST: &str = "KONDUKTO_HOST";
/// Environment variable overriding the API token
pub const ENV_TOKEN: &str = "KONDUKTO_TOKEN";
/// Environment variable toggling TLS certificate verification
pub const ENV_INSECURE: &str = "KONDUKTO_INSECURE";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Kondukto base URL, e.g. `https://kondukto.example.com`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Static API token sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Skip TLS certificate verification
    #[serde(default)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: None,
            token: None,
            insecure: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".kdt").join("config.yaml"))
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Build a configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override fields with any `KONDUKTO_*` environment variables that are set
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup(ENV_HOST).filter(|v| !v.is_empty()) {
            self.host = Some(host);
        }
        if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.is_empty()) {
            self.token = Some(token);
        }
        if let Some(insecure) = lookup(ENV_INSECURE) {
            self.insecure = matches!(insecure.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::default_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The file holds the API token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Request timeout applied to the HTTP transport
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate that host and token are present and usable
    pub fn validate(&self) -> Result<()> {
        let host = self.host.as_deref().ok_or(ConfigError::MissingHost)?;
        reqwest::Url::parse(host)
            .map_err(|e| ConfigError::Invalid(format!("host `{}`: {}", host, e)))?;

        if self.token.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::MissingToken.into());
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be positive".to_string()).into());
        }
        Ok(())
    }
}
