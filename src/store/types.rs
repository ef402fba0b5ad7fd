use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://sm-technology-server.vercel.app";
pub const DEFAULT_USER_AGENT: &str = concat!("property-views/", env!("CARGO_PKG_VERSION"));

/// Connection settings for the remote property store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL, without the `/properties` suffix
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
