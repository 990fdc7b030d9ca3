//! Read-only projections of `AppState`
//!
//! Projections never fail: a missing or empty value reads as `None`.

use crate::state::{AppState, Route};

/// Active plugin id; an empty id counts as unset
pub fn get_active_plugin(state: &AppState) -> Option<&str> {
    state
        .core
        .active_plugin
        .as_deref()
        .filter(|plugin| !plugin.is_empty())
}

pub fn get_active_route(state: &AppState) -> Option<&Route> {
    state.route.active_route.as_ref()
}

/// True once the router has resolved a page
pub fn is_route_ready(state: &AppState) -> bool {
    get_active_route(state).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_plugin_treats_empty_as_unset() {
        let mut state = AppState::default();
        assert_eq!(get_active_plugin(&state), None);

        state.core.active_plugin = Some(String::new());
        assert_eq!(get_active_plugin(&state), None);

        state.core.active_plugin = Some("scalars".to_string());
        assert_eq!(get_active_plugin(&state), Some("scalars"));
    }

    #[test]
    fn test_route_ready() {
        let mut state = AppState::default();
        assert!(!is_route_ready(&state));

        state.route.active_route = Some(Route::new("/"));
        assert!(is_route_ready(&state));
        assert_eq!(get_active_route(&state).map(|r| r.path.as_str()), Some("/"));
    }
}
