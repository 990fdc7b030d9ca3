use crate::actions::RouteAction;
use crate::state::RouteState;

/// Reduce routing state
pub fn reduce_route(mut state: RouteState, action: &RouteAction) -> RouteState {
    match action {
        RouteAction::Navigated { route } => {
            state.active_route = Some(route.clone());
        }
        RouteAction::Cleared => {
            state.active_route = None;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Route;

    #[test]
    fn test_navigate_then_clear() {
        let state = reduce_route(
            RouteState::default(),
            &RouteAction::Navigated {
                route: Route::new("/experiment/7"),
            },
        );
        assert_eq!(state.active_route, Some(Route::new("/experiment/7")));

        let state = reduce_route(state, &RouteAction::Cleared);
        assert_eq!(state.active_route, None);
    }
}
