//! State core of the experiment dashboard
//!
//! - [`store::Store`]: owns the state, runs dispatches, notifies selectors
//! - [`meta_reducer`]: side effects on state transitions (analytics, logging)
//! - [`deeplink`]: keeps the active plugin and the URL fragment in sync
//! - [`telemetry`]: fire-and-forget event sinks

pub mod actions;
pub mod deeplink;
pub mod dispatcher;
pub mod meta_reducer;
pub mod reducers;
pub mod selectors;
pub mod state;
pub mod store;
pub mod telemetry;

pub use actions::Action;
pub use dispatcher::Dispatcher;
pub use state::AppState;
pub use store::{Store, Subscription};
