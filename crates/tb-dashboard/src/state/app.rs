//! Application State

use serde::{Deserialize, Serialize};

use super::{CoreState, RouteState};

/// Application state
///
/// Replaced as a whole on every dispatch; nothing outside the store holds a
/// mutable reference to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub core: CoreState,
    pub route: RouteState,
}

impl AppState {
    /// Initial state with a configured reload period
    pub fn with_reload_period(reload_period_ms: u64) -> Self {
        let mut state = Self::default();
        if reload_period_ms > 0 {
            state.core.reload_period_ms = reload_period_ms;
        }
        state
    }
}
