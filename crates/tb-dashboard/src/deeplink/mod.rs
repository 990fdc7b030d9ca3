//! URL fragment deep linking
//!
//! The dashboard mirrors part of its state into the URL fragment so a page
//! can be restored from a link:
//!
//! - [`DeepLinker`]: string store backed by the fragment
//! - [`HashDeepLinker`]: in-memory location with a history stack
//! - [`HashStorage`] / [`HashStorageContainer`]: keeps the active plugin and
//!   the fragment in sync in both directions

mod hash_deep_linker;
mod hash_storage;

pub use hash_deep_linker::HashDeepLinker;
pub use hash_storage::{HashStorage, HashStorageContainer, SyncPhase};

/// Options for [`DeepLinker::set_string`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetStringOptions {
    /// Replace the current history entry instead of pushing a new one
    pub use_location_replace: bool,
    /// Value meaning "absent"; writing it removes the key
    pub default_value: String,
}

/// Key/value string store persisted in the URL fragment
pub trait DeepLinker {
    /// Value stored under `key`, or the empty string
    fn get_string(&self, key: &str) -> String;

    fn set_string(&mut self, key: &str, value: &str, options: &SetStringOptions);
}
