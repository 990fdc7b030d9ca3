//! Meta-reducers: side effects on state transitions
//!
//! A meta-reducer wraps the root reducer without changing its result. For
//! each dispatch the wrapped reducer runs once, then every registered
//! meta-reducer observes the same `(before, action, after)` triple in
//! registration order.
//!
//! ```text
//! Action → Reducer → (before, after) → Meta-reducers → next State
//! ```

use std::rc::Rc;

use tb_dashboard_config::Environment;

use crate::actions::Action;
use crate::state::AppState;
use crate::telemetry::TelemetrySink;

mod analytics;
mod logging;

pub use analytics::{AnalyticsMetaReducer, Readiness};
pub use logging::LoggingMetaReducer;

/// Pure state transition owned by the store
pub type Reducer = fn(AppState, &Action) -> AppState;

/// Observer of state transitions
///
/// Implementations receive read-only snapshots and cannot influence the
/// state the reducer produced.
pub trait MetaReducer {
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    fn observe(&mut self, before: &AppState, action: &Action, after: &AppState);
}

/// A reducer wrapped by an ordered list of meta-reducers
///
/// `reduce` returns exactly what the inner reducer returns.
pub struct InterceptedReducer {
    reducer: Reducer,
    meta_reducers: Vec<Box<dyn MetaReducer>>,
}

impl InterceptedReducer {
    pub fn new(reducer: Reducer) -> Self {
        Self {
            reducer,
            meta_reducers: Vec::new(),
        }
    }

    /// Add a meta-reducer; it observes after all previously added ones
    pub fn add_meta_reducer(&mut self, meta_reducer: Box<dyn MetaReducer>) {
        log::debug!("Registering meta-reducer: {}", meta_reducer.name());
        self.meta_reducers.push(meta_reducer);
    }

    pub fn with_meta_reducers(
        mut self,
        meta_reducers: impl IntoIterator<Item = Box<dyn MetaReducer>>,
    ) -> Self {
        for meta_reducer in meta_reducers {
            self.add_meta_reducer(meta_reducer);
        }
        self
    }

    pub fn reduce(&mut self, state: &AppState, action: &Action) -> AppState {
        let next = (self.reducer)(state.clone(), action);
        for meta_reducer in &mut self.meta_reducers {
            meta_reducer.observe(state, action, &next);
        }
        next
    }
}

/// Meta-reducers for a deployment environment
///
/// Production gets analytics only; development adds action logging after it.
pub fn for_environment(
    environment: Environment,
    sink: Rc<dyn TelemetrySink>,
) -> Vec<Box<dyn MetaReducer>> {
    let mut meta_reducers: Vec<Box<dyn MetaReducer>> =
        vec![Box::new(AnalyticsMetaReducer::page_views(sink))];
    if environment.is_dev() {
        meta_reducers.push(Box::new(LoggingMetaReducer::new()));
    }
    meta_reducers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CoreAction;
    use crate::reducers::reduce;
    use crate::telemetry::MemoryTelemetry;
    use std::cell::RefCell;

    /// Records which meta-reducer saw which transition
    struct Recorder {
        name: &'static str,
        seen: Rc<RefCell<Vec<(&'static str, Option<String>, Option<String>)>>>,
    }

    impl MetaReducer for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn observe(&mut self, before: &AppState, _action: &Action, after: &AppState) {
            self.seen.borrow_mut().push((
                self.name,
                before.core.active_plugin.clone(),
                after.core.active_plugin.clone(),
            ));
        }
    }

    #[test]
    fn test_result_is_inner_reducer_result() {
        let mut wrapped = InterceptedReducer::new(reduce)
            .with_meta_reducers(for_environment(Environment::Dev, Rc::new(MemoryTelemetry::new())));
        let state = AppState::default();
        let action = Action::Core(CoreAction::PluginChanged {
            plugin: "scalars".to_string(),
        });

        assert_eq!(wrapped.reduce(&state, &action), reduce(state.clone(), &action));
    }

    #[test]
    fn test_meta_reducers_observe_same_pair_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut wrapped = InterceptedReducer::new(reduce);
        wrapped.add_meta_reducer(Box::new(Recorder {
            name: "first",
            seen: seen.clone(),
        }));
        wrapped.add_meta_reducer(Box::new(Recorder {
            name: "second",
            seen: seen.clone(),
        }));

        wrapped.reduce(
            &AppState::default(),
            &Action::Core(CoreAction::PluginChanged {
                plugin: "images".to_string(),
            }),
        );

        let expected: Vec<(&'static str, Option<String>, Option<String>)> = vec![
            ("first", None, Some("images".to_string())),
            ("second", None, Some("images".to_string())),
        ];
        assert_eq!(*seen.borrow(), expected);
    }

    #[test]
    fn test_environment_selection() {
        let sink: Rc<dyn TelemetrySink> = Rc::new(MemoryTelemetry::new());

        let prod = for_environment(Environment::Prod, sink.clone());
        let names: Vec<_> = prod.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["analytics"]);

        let dev = for_environment(Environment::Dev, sink);
        let names: Vec<_> = dev.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["analytics", "logging"]);
    }
}
