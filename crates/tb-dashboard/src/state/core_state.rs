use serde::{Deserialize, Serialize};

pub const DEFAULT_RELOAD_PERIOD_MS: u64 = 30_000;

/// Loading status of a remote listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed,
}

/// Core dashboard state: plugin listing, active plugin and reload settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreState {
    /// Id of the plugin currently shown; `None` until one is picked
    pub active_plugin: Option<String>,
    /// Plugin ids in display order
    pub plugins: Vec<String>,
    pub plugins_list_loaded: LoadState,
    pub core_loaded: bool,
    pub reload_enabled: bool,
    pub reload_period_ms: u64,
}

impl Default for CoreState {
    fn default() -> Self {
        Self {
            active_plugin: None,
            plugins: Vec::new(),
            plugins_list_loaded: LoadState::NotLoaded,
            core_loaded: false,
            reload_enabled: false,
            reload_period_ms: DEFAULT_RELOAD_PERIOD_MS,
        }
    }
}
