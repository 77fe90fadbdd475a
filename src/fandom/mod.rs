//! Wiki list screen: model, intents and the reducer that loads batches.

mod endpoint;
mod intent;
mod reducer;
mod state;
mod wiki;

pub use endpoint::{Endpoint, DEFAULT_PER_PAGE, DEFAULT_URL_TEMPLATE};
pub use intent::FandomIntent;
pub use reducer::FandomReducer;
pub use state::FandomState;
pub use wiki::{Wiki, WikiList, WikiStats};
