//! State container and dispatcher.
//!
//! The container owns the current snapshot and fans changes out to
//! subscribers; the dispatcher is the only writer and routes every change
//! through a reducer.

mod container;
mod dispatcher;

pub use container::{StateContainer, Subscription};
pub use dispatcher::Dispatcher;
