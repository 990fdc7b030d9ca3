//! LoggingMetaReducer - logs every transition for debugging

use crate::actions::Action;
use crate::meta_reducer::MetaReducer;
use crate::state::AppState;

/// Logs the previous state, the action and the next state of each dispatch
///
/// Registered in development builds only; the states can be large.
pub struct LoggingMetaReducer;

impl LoggingMetaReducer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMetaReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaReducer for LoggingMetaReducer {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn observe(&mut self, before: &AppState, action: &Action, after: &AppState) {
        // Skip None to reduce noise
        if matches!(action, Action::None) {
            return;
        }
        log::debug!("{}", action.kind());
        log::debug!("  prev state: {:?}", before);
        log::debug!("  action: {:?}", action);
        log::debug!("  next state: {:?}", after);
    }
}
