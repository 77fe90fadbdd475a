use std::sync::Arc;

use crate::fandom::endpoint::Endpoint;
use crate::fandom::intent::FandomIntent;
use crate::fandom::state::FandomState;
use crate::fetch::Fetcher;
use crate::mvi::Reducer;

/// Loads wiki batches and folds them into [`FandomState`].
pub struct FandomReducer {
    endpoint: Endpoint,
    fetcher: Arc<dyn Fetcher>,
}

impl FandomReducer {
    pub fn new(endpoint: Endpoint, fetcher: Arc<dyn Fetcher>) -> Self {
        Self { endpoint, fetcher }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

impl Reducer for FandomReducer {
    type State = FandomState;
    type Intent = FandomIntent;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FandomIntent::Init => {
                // Replaces, unlike NextPage which appends.
                let wikis = self.fetcher.fetch(&self.endpoint.url_for(1));
                tracing::debug!(batch = 1, fetched = wikis.len(), "Initial batch loaded");
                FandomState { wikis, ..state }
            }
            FandomIntent::NextPage => {
                // Stays on the last batch at u32::MAX instead of wrapping.
                let batch = state.page.saturating_add(1);
                let fetched = self.fetcher.fetch(&self.endpoint.url_for(batch));
                tracing::debug!(batch, fetched = fetched.len(), "Next batch loaded");

                let mut wikis = state.wikis;
                wikis.extend(fetched);
                FandomState { wikis, page: batch }
            }
        }
    }
}
