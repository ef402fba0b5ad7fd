use crate::models::UserId;
use crate::notify::DEFAULT_NOTICE_TTL_SECS;
use crate::store::types::{StoreConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings for the property views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the property store
    pub api_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Signed-in user, as resolved by the identity provider
    pub user_id: Option<UserId>,
    /// Seconds a notice stays visible before it is dismissed
    pub notice_ttl_secs: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            user_id: None,
            notice_ttl_secs: DEFAULT_NOTICE_TTL_SECS,
        }
    }
}

impl AppConfig {
    /// Load config from a TOML file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            base_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }

    pub fn notice_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.notice_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{Notice, Notifier, RecordingNotifier, NO_RESULTS};
    use std::io::Write;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url = \"http://localhost:5000\"").unwrap();
        writeln!(file, "user_id = \"user_2abc\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.user_id, Some(UserId::new("user_2abc")));
        assert_eq!(config.timeout_secs, 30);

        let store = config.store_config();
        assert_eq!(store.base_url, "http://localhost:5000");
        assert_eq!(store.timeout, Duration::from_secs(30));
        assert_eq!(config.notice_ttl_secs, DEFAULT_NOTICE_TTL_SECS);
        assert_eq!(config.notice_ttl(), chrono::Duration::seconds(DEFAULT_NOTICE_TTL_SECS));
    }

    #[test]
    fn test_notice_ttl_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "notice_ttl_secs = 10").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.notice_ttl(), chrono::Duration::seconds(10));

        let notifier = RecordingNotifier::new();
        notifier.notify(Notice::info(NO_RESULTS));
        let raised = notifier.notices()[0].raised_at;
        let ttl = config.notice_ttl();
        assert_eq!(notifier.active(raised + chrono::Duration::seconds(6), ttl).len(), 1);
        assert!(notifier.active(raised + ttl, ttl).is_empty());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = \"soon\"").unwrap();

        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
