//! Fetch boundary between the reducer and the network.
//!
//! [`Fetcher::fetch`] cannot fail: transport, status and decoding errors
//! are logged and collapse to an empty batch. Callers cannot tell a failed
//! request from an empty page.

mod error;
mod http;

pub use error::FetchError;
pub use http::HttpFetcher;

use crate::fandom::Wiki;

/// Source of wiki batches.
pub trait Fetcher: Send + Sync {
    /// Fetch the wikis at `url`, or an empty list if anything goes wrong.
    fn fetch(&self, url: &str) -> Vec<Wiki>;
}

impl<F> Fetcher for F
where
    F: Fn(&str) -> Vec<Wiki> + Send + Sync,
{
    fn fetch(&self, url: &str) -> Vec<Wiki> {
        self(url)
    }
}
