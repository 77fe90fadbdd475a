//! Paginated wiki list client.
//!
//! A [`FandomApp`](app::FandomApp) owns one [`StateContainer`](store::StateContainer)
//! of [`FandomState`](fandom::FandomState). Intents go through a
//! [`Dispatcher`](store::Dispatcher) into the [`FandomReducer`](fandom::FandomReducer),
//! which loads batches through a [`Fetcher`](fetch::Fetcher).

pub mod app;
pub mod config;
pub mod fandom;
pub mod fetch;
pub mod logging;
pub mod mvi;
pub mod store;
pub mod view;
