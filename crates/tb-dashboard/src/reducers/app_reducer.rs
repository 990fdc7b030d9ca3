use crate::actions::Action;
use crate::reducers::{core_reducer, route_reducer};
use crate::state::AppState;

/// Root reducer - pure function producing the next state from state + action
///
/// Routes each tagged action to the reducer of its slice.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Core(core_action) => {
            state.core = core_reducer::reduce_core(state.core, core_action);
        }
        Action::Route(route_action) => {
            state.route = route_reducer::reduce_route(state.route, route_action);
        }
        Action::None => {}
    }

    state
}
