use serde::Deserialize;

use crate::fandom::{Endpoint, DEFAULT_PER_PAGE, DEFAULT_URL_TEMPLATE};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Wiki list API settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// URL template; `%d` placeholders take the page size, then the batch.
    #[serde(default = "default_url")]
    pub url: String,
    /// Wikis per batch (default: 25).
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Whole-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_url() -> String {
    DEFAULT_URL_TEMPLATE.to_string()
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_user_agent() -> String {
    concat!("rfandom/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            per_page: default_per_page(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Endpoint described by the `[api]` section.
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.api.url.clone(), self.api.per_page)
    }
}
