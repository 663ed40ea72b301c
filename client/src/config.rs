//! Client configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use mever_types::DEFAULT_MAX_UPLOAD_BYTES;
use mever_utils::LogFormat;

use crate::error::ClientError;

/// Configuration for talking to a verification service.
///
/// Can be loaded from a TOML file via [`ClientConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the service; `/verify` and `/healthz` are joined onto it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Largest upload accepted locally, in megabytes.
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: u64,

    /// Name shown in the result headline.
    #[serde(default = "default_subject")]
    pub subject: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_max_upload_mb() -> u64 {
    (DEFAULT_MAX_UPLOAD_BYTES / (1024 * 1024)) as u64
}

fn default_subject() -> String {
    "ME".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ClientError> {
        let config: Self = toml::from_str(s).map_err(|e| ClientError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ClientError> {
        toml::to_string_pretty(self).map_err(|e| ClientError::Config(e.to_string()))
    }

    /// Reject values no request could succeed with.
    pub fn validate(&self) -> Result<(), ClientError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(ClientError::Config("timeouts must be non-zero".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn max_upload_bytes(&self) -> usize {
        usize::try_from(self.max_upload_mb.saturating_mul(1024 * 1024)).unwrap_or(usize::MAX)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_upload_mb: default_max_upload_mb(),
            subject: default_subject(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = ClientConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = ClientConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.base_url, config.base_url);
        assert_eq!(parsed.max_upload_mb, config.max_upload_mb);
        assert_eq!(parsed.log_format, LogFormat::Human);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = ClientConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.max_upload_bytes(), 5 * 1024 * 1024);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            base_url = "https://verify.example.net"
            max_upload_mb = 2
            log_format = "json"
        "#;
        let config = ClientConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.base_url, "https://verify.example.net");
        assert_eq!(config.max_upload_bytes(), 2 * 1024 * 1024);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.subject, "ME"); // default
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = ClientConfig::from_toml_str(r#"base_url = "ftp://host""#).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn rejects_zero_timeout() {
        assert!(ClientConfig::from_toml_str("timeout_secs = 0").is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"subject = "FERNANDO""#).unwrap();
        let config = ClientConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.subject, "FERNANDO");
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = ClientConfig::from_toml_file("/nonexistent/mever.toml");
        assert!(matches!(result, Err(ClientError::Config(_))));
    }
}
