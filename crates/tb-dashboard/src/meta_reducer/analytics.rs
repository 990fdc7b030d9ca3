//! Analytics meta-reducer
//!
//! Sends a page-view event whenever the projected key changes to a non-empty
//! value, and a generic event for reload period changes. Nothing is sent until
//! the core has finished loading, so state hydration never produces events.

use std::rc::Rc;

use crate::actions::{Action, CoreAction};
use crate::meta_reducer::MetaReducer;
use crate::selectors::get_active_plugin;
use crate::state::AppState;
use crate::telemetry::{send_best_effort, EventCategory, TelemetrySink};

/// Whether the store has finished hydrating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Hydrating,
    Ready,
}

/// Meta-reducer emitting telemetry from before/after snapshots
///
/// The readiness flag is the only state carried between dispatches; values
/// are compared within a single transition, never against earlier ones.
pub struct AnalyticsMetaReducer<K> {
    sink: Rc<dyn TelemetrySink>,
    key: K,
    readiness: Readiness,
}

impl<K> AnalyticsMetaReducer<K>
where
    K: Fn(&AppState) -> Option<String>,
{
    pub fn new(sink: Rc<dyn TelemetrySink>, key: K) -> Self {
        Self {
            sink,
            key,
            readiness: Readiness::Hydrating,
        }
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    fn maybe_send_page_view(&self, before: &AppState, after: &AppState) {
        let previous = (self.key)(before);
        let current = (self.key)(after);
        if previous == current {
            return;
        }
        if let Some(value) = current.filter(|value| !value.is_empty()) {
            send_best_effort(self.sink.as_ref(), EventCategory::PageView, &value);
        }
    }

    #[allow(clippy::single_match)]
    fn maybe_send_generic_event(&self, action: &Action) {
        // Expect this list to grow
        match action {
            Action::Core(CoreAction::ReloadPeriodChanged { .. }) => {
                send_best_effort(self.sink.as_ref(), EventCategory::Generic, action.kind());
            }
            _ => {}
        }
    }
}

fn active_plugin_key(state: &AppState) -> Option<String> {
    get_active_plugin(state).map(str::to_owned)
}

impl AnalyticsMetaReducer<fn(&AppState) -> Option<String>> {
    /// Page views keyed on the active plugin
    pub fn page_views(sink: Rc<dyn TelemetrySink>) -> Self {
        Self::new(sink, active_plugin_key)
    }
}

impl<K> MetaReducer for AnalyticsMetaReducer<K>
where
    K: Fn(&AppState) -> Option<String>,
{
    fn name(&self) -> &'static str {
        "analytics"
    }

    fn observe(&mut self, before: &AppState, action: &Action, after: &AppState) {
        if matches!(action, Action::Core(CoreAction::CoreLoaded)) {
            if self.readiness == Readiness::Hydrating {
                log::debug!("Analytics: core loaded, events enabled");
            }
            self.readiness = Readiness::Ready;
            return;
        }

        if self.readiness == Readiness::Hydrating {
            return;
        }

        self.maybe_send_page_view(before, after);
        self.maybe_send_generic_event(action);
    }
}
