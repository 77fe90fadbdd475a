//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use parking_lot::Mutex;
use rfandom::fandom::{Endpoint, Wiki};
use rfandom::fetch::Fetcher;
use std::collections::HashMap;
use std::net::TcpListener;

/// Template used with [`ScriptedFetcher`]; never hits the network.
pub const TEST_TEMPLATE: &str = "test://wikis?limit=%d&batch=%d";

pub fn test_endpoint(per_page: u32) -> Endpoint {
    Endpoint::new(TEST_TEMPLATE, per_page)
}

pub fn wiki(id: &str) -> Wiki {
    Wiki::new(id, format!("Wiki {}", id.to_uppercase()), 100)
}

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Fetcher that serves canned batches keyed by the `batch` query value
/// and records every URL it was asked for.
#[derive(Default)]
pub struct ScriptedFetcher {
    batches: HashMap<u32, Vec<Wiki>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch(mut self, batch: u32, wikis: Vec<Wiki>) -> Self {
        self.batches.insert(batch, wikis);
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl Fetcher for ScriptedFetcher {
    fn fetch(&self, url: &str) -> Vec<Wiki> {
        self.calls.lock().push(url.to_string());
        batch_of(url)
            .and_then(|batch| self.batches.get(&batch).cloned())
            .unwrap_or_default()
    }
}

/// Extract the `batch` query value from a request URL.
pub fn batch_of(url: &str) -> Option<u32> {
    url.split(['?', '&'])
        .find_map(|pair| pair.strip_prefix("batch="))
        .and_then(|value| value.parse().ok())
}
