//! Hash storage: two-way sync between the active plugin and the URL fragment
//!
//! - Store → fragment: once a route is active, every change of the active
//!   plugin is written to the fragment. The first write replaces the current
//!   history entry, later writes push new ones.
//! - Fragment → store: an external fragment change dispatches
//!   `PluginUrlHashChanged` with the value read back from the fragment.
//!
//! Echoes of our own writes are not suppressed here; the reducer treats an
//! unchanged plugin as a no-op.

use std::cell::RefCell;
use std::rc::Rc;

use crate::actions::{Action, CoreAction};
use crate::dispatcher::Dispatcher;
use crate::selectors::{get_active_plugin, is_route_ready};
use crate::store::{Store, Subscription};

use super::{DeepLinker, SetStringOptions};

/// Where the synchronizer is in its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// No active route seen yet; nothing is written
    WaitingForRoute,
    /// Route is active; the next write replaces the history entry
    FirstWrite,
    /// At least one write happened; writes push history entries
    Synced,
}

pub struct HashStorage<D> {
    deep_linker: D,
    dispatcher: Dispatcher,
    plugin_key: String,
    default_value: String,
    phase: SyncPhase,
}

impl<D: DeepLinker> HashStorage<D> {
    pub fn new(
        deep_linker: D,
        dispatcher: Dispatcher,
        plugin_key: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        Self {
            deep_linker,
            dispatcher,
            plugin_key: plugin_key.into(),
            default_value: default_value.into(),
            phase: SyncPhase::WaitingForRoute,
        }
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    pub fn deep_linker(&self) -> &D {
        &self.deep_linker
    }

    pub fn deep_linker_mut(&mut self) -> &mut D {
        &mut self.deep_linker
    }

    /// Plugin id currently in the fragment
    pub fn get_plugin_id(&self) -> String {
        self.deep_linker.get_string(&self.plugin_key)
    }

    /// Write a plugin id under the configured key
    pub fn set_plugin_id(&mut self, plugin_id: &str, options: &SetStringOptions) {
        self.deep_linker
            .set_string(&self.plugin_key, plugin_id, options);
    }

    /// React to a new `(active plugin, route ready)` pair from the store
    pub fn on_store_change(&mut self, active_plugin: Option<&str>, route_ready: bool) {
        if !route_ready {
            return;
        }
        if self.phase == SyncPhase::WaitingForRoute {
            log::debug!("HashStorage: route ready, starting fragment sync");
            self.phase = SyncPhase::FirstWrite;
        }

        let plugin = active_plugin.unwrap_or_default();
        let options = SetStringOptions {
            use_location_replace: self.phase == SyncPhase::FirstWrite,
            default_value: self.default_value.clone(),
        };
        log::debug!(
            "HashStorage: writing plugin {:?} (replace: {})",
            plugin,
            options.use_location_replace
        );
        self.set_plugin_id(plugin, &options);
        self.phase = SyncPhase::Synced;
    }

    /// React to an external fragment change
    pub fn on_hash_changed(&mut self) {
        let plugin = self.get_plugin_id();
        log::debug!("HashStorage: fragment changed, plugin {:?}", plugin);
        self.dispatcher
            .dispatch(Action::Core(CoreAction::PluginUrlHashChanged { plugin }));
    }
}

/// A [`HashStorage`] mounted on a store
///
/// Owns the store subscription; dropping the container stops the sync.
pub struct HashStorageContainer<D> {
    storage: Rc<RefCell<HashStorage<D>>>,
    _subscription: Subscription,
}

impl<D: DeepLinker + 'static> HashStorageContainer<D> {
    /// Subscribe `storage` to the store
    ///
    /// If a route is already active the fragment is written immediately.
    pub fn mount(store: &mut Store, storage: HashStorage<D>) -> Self {
        let storage = Rc::new(RefCell::new(storage));
        let observer = Rc::clone(&storage);
        let subscription = store.select(
            |state| {
                (
                    get_active_plugin(state).map(str::to_owned),
                    is_route_ready(state),
                )
            },
            move |(plugin, route_ready): &(Option<String>, bool)| {
                observer
                    .borrow_mut()
                    .on_store_change(plugin.as_deref(), *route_ready);
            },
        );

        Self {
            storage,
            _subscription: subscription,
        }
    }

    /// Browser-level "hashchange" notification
    ///
    /// The resulting action is queued; it runs on the next
    /// `Store::dispatch` or `Store::drain_pending`.
    pub fn hash_changed(&self) {
        self.storage.borrow_mut().on_hash_changed();
    }

    pub fn phase(&self) -> SyncPhase {
        self.storage.borrow().phase()
    }

    /// Access the underlying deep linker, e.g. to apply an address-bar edit
    pub fn with_deep_linker<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        f(self.storage.borrow_mut().deep_linker_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::RouteAction;
    use crate::deeplink::HashDeepLinker;
    use crate::meta_reducer::InterceptedReducer;
    use crate::reducers::reduce;
    use crate::state::{AppState, Route};
    use std::sync::mpsc;

    /// Deep linker recording every write
    #[derive(Default)]
    struct RecordingDeepLinker {
        value: String,
        writes: Rc<RefCell<Vec<(String, bool)>>>,
    }

    impl DeepLinker for RecordingDeepLinker {
        fn get_string(&self, _key: &str) -> String {
            self.value.clone()
        }

        fn set_string(&mut self, _key: &str, value: &str, options: &SetStringOptions) {
            self.value = value.to_string();
            self.writes
                .borrow_mut()
                .push((value.to_string(), options.use_location_replace));
        }
    }

    fn writes(entries: &[(&str, bool)]) -> Vec<(String, bool)> {
        entries
            .iter()
            .map(|(value, replace)| (value.to_string(), *replace))
            .collect()
    }

    fn change_plugin(plugin: &str) -> Action {
        Action::Core(CoreAction::PluginChanged {
            plugin: plugin.to_string(),
        })
    }

    fn navigate() -> Action {
        Action::Route(RouteAction::Navigated {
            route: Route::new("/"),
        })
    }

    fn mounted(
        store: &mut Store,
    ) -> (
        HashStorageContainer<RecordingDeepLinker>,
        Rc<RefCell<Vec<(String, bool)>>>,
    ) {
        let linker = RecordingDeepLinker::default();
        let log = linker.writes.clone();
        let storage = HashStorage::new(linker, store.dispatcher().clone(), "plugin", "");
        (HashStorageContainer::mount(store, storage), log)
    }

    fn store() -> Store {
        Store::new(AppState::default(), InterceptedReducer::new(reduce))
    }

    #[test]
    fn test_no_writes_while_waiting_for_route() {
        let mut store = store();
        let (container, log) = mounted(&mut store);

        store.dispatch(change_plugin("foo"));
        store.dispatch(change_plugin("bar"));
        store.dispatch(change_plugin(""));

        assert!(log.borrow().is_empty());
        assert_eq!(container.phase(), SyncPhase::WaitingForRoute);
    }

    #[test]
    fn test_route_ready_writes_latest_selection_with_replace() {
        let mut store = store();
        let (container, log) = mounted(&mut store);

        store.dispatch(change_plugin("foo"));
        store.dispatch(change_plugin("bar"));
        store.dispatch(navigate());

        assert_eq!(*log.borrow(), writes(&[("bar", true)]));
        assert_eq!(container.phase(), SyncPhase::Synced);
    }

    #[test]
    fn test_only_first_write_replaces() {
        let mut store = store();
        store.dispatch(navigate());
        let (_container, log) = mounted(&mut store);

        store.dispatch(change_plugin("foo"));
        store.dispatch(change_plugin(""));
        store.dispatch(change_plugin("bar"));

        assert_eq!(
            *log.borrow(),
            writes(&[("", true), ("foo", false), ("", false), ("bar", false)])
        );
    }

    #[test]
    fn test_unrelated_actions_do_not_write() {
        let mut store = store();
        store.dispatch(navigate());
        let (_container, log) = mounted(&mut store);

        store.dispatch(Action::Core(CoreAction::ReloadEnabledToggled));
        store.dispatch(navigate());

        assert_eq!(*log.borrow(), writes(&[("", true)]));
    }

    #[test]
    fn test_route_cleared_withholds_writes() {
        let mut store = store();
        store.dispatch(navigate());
        let (_container, log) = mounted(&mut store);

        store.dispatch(Action::Route(RouteAction::Cleared));
        store.dispatch(change_plugin("foo"));
        store.dispatch(navigate());

        assert_eq!(*log.borrow(), writes(&[("", true), ("foo", false)]));
    }

    #[test]
    fn test_hash_change_dispatches_value_read_back() {
        let mut store = store();
        store.dispatch(navigate());
        store.dispatch(change_plugin("foo"));
        let (container, _log) = mounted(&mut store);

        container.with_deep_linker(|linker| linker.value = "bar".to_string());
        container.hash_changed();
        store.drain_pending();

        assert_eq!(store.state().core.active_plugin.as_deref(), Some("bar"));
    }

    #[test]
    fn test_own_write_is_echoed_back() {
        let (tx, rx) = mpsc::channel();
        let mut storage =
            HashStorage::new(RecordingDeepLinker::default(), Dispatcher::new(tx), "plugin", "");

        storage.on_store_change(Some("foo"), true);
        storage.on_hash_changed();

        assert_eq!(
            rx.try_recv().ok(),
            Some(Action::Core(CoreAction::PluginUrlHashChanged {
                plugin: "foo".to_string()
            }))
        );
    }

    #[test]
    fn test_echo_round_trip_is_idempotent() {
        let mut store = store();
        store.dispatch(navigate());
        let (container, log) = mounted(&mut store);

        store.dispatch(change_plugin("foo"));
        container.hash_changed();
        store.drain_pending();

        assert_eq!(store.state().core.active_plugin.as_deref(), Some("foo"));
        assert_eq!(*log.borrow(), writes(&[("", true), ("foo", false)]));
    }

    #[test]
    fn test_plugin_id_uses_configured_key() {
        let (tx, _rx) = mpsc::channel();
        let mut storage =
            HashStorage::new(HashDeepLinker::new(), Dispatcher::new(tx), "tab", "");

        storage.set_plugin_id("images", &SetStringOptions::default());
        assert_eq!(storage.deep_linker().get_string("tab"), "images");
        assert_eq!(storage.deep_linker().get_string("plugin"), "");
        assert_eq!(storage.get_plugin_id(), "images");

        storage.on_store_change(Some("graphs"), true);
        assert_eq!(storage.deep_linker().fragment(), "#tab=graphs");
    }

    #[test]
    fn test_dropping_container_stops_sync() {
        let mut store = store();
        store.dispatch(navigate());
        let (container, log) = mounted(&mut store);

        drop(container);
        store.dispatch(change_plugin("foo"));

        assert_eq!(*log.borrow(), writes(&[("", true)]));
        assert_eq!(store.subscriber_count(), 0);
    }
}
