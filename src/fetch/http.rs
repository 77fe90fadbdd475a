//! Blocking HTTP implementation of [`Fetcher`].

use std::time::{Duration, Instant};

use reqwest::blocking::Client;

use crate::config::ApiConfig;
use crate::fandom::{Wiki, WikiList};
use crate::fetch::{FetchError, Fetcher};

/// Fetches wiki batches over HTTP and decodes the JSON list envelope.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher using the timeouts and user agent from `config`.
    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// Fetch one batch, reporting why it failed.
    pub fn try_fetch(&self, url: &str) -> Result<Vec<Wiki>, FetchError> {
        let started = Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

        let list: WikiList = serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })?;

        tracing::debug!(
            url = %url,
            count = list.items.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched wiki batch"
        );

        Ok(list.items)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Vec<Wiki> {
        match self.try_fetch(url) {
            Ok(wikis) => wikis,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Wiki fetch failed, using empty batch");
                Vec::new()
            }
        }
    }
}
