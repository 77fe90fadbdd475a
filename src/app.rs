//! Application composition root.
//!
//! [`FandomApp`] wires the state container, the dispatcher and the reducer
//! together and performs the initial load. Build it once and hand clones to
//! whatever needs to read state or send intents.

use std::sync::Arc;

use crate::config::Config;
use crate::fandom::{Endpoint, FandomIntent, FandomReducer, FandomState};
use crate::fetch::{FetchError, Fetcher, HttpFetcher};
use crate::store::{Dispatcher, StateContainer};

/// Construction parameters for [`FandomApp`].
pub struct AppOptions {
    pub endpoint: Endpoint,
    pub init_state: FandomState,
    pub fetcher: Arc<dyn Fetcher>,
}

impl AppOptions {
    /// Default endpoint and initial state, with the given fetcher.
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            endpoint: Endpoint::default(),
            init_state: FandomState::default(),
            fetcher,
        }
    }

    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn init_state(mut self, init_state: FandomState) -> Self {
        self.init_state = init_state;
        self
    }
}

/// The wiki list application.
#[derive(Clone)]
pub struct FandomApp {
    dispatcher: Dispatcher<FandomReducer>,
}

impl FandomApp {
    /// Build the app and load the first batch.
    ///
    /// Blocks until the initial fetch completes. Exactly one
    /// [`FandomIntent::Init`] is sent.
    pub fn new(options: AppOptions) -> Self {
        let AppOptions {
            endpoint,
            init_state,
            fetcher,
        } = options;

        tracing::info!(
            url_template = %endpoint.url_template,
            per_page = endpoint.per_page,
            "Starting wiki list"
        );

        let state = StateContainer::new(init_state);
        let reducer = FandomReducer::new(endpoint, fetcher);
        let app = Self {
            dispatcher: Dispatcher::new(state, reducer),
        };
        app.send(FandomIntent::Init);
        app
    }

    /// Build the app against the HTTP API described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::from_config(&config.api)?;
        let options = AppOptions::with_fetcher(Arc::new(fetcher)).endpoint(config.endpoint());
        Ok(Self::new(options))
    }

    pub fn send(&self, intent: FandomIntent) {
        self.dispatcher.send(intent);
    }

    /// Load and append the next batch.
    pub fn next_page(&self) {
        self.send(FandomIntent::NextPage);
    }

    pub fn state(&self) -> &StateContainer<FandomState> {
        self.dispatcher.state()
    }

    pub fn dispatcher(&self) -> &Dispatcher<FandomReducer> {
        &self.dispatcher
    }
}
