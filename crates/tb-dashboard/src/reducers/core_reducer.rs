//! Core Reducer
//!
//! Plugin listing, active plugin and reload settings.

use crate::actions::CoreAction;
use crate::state::{CoreState, LoadState};

/// Reduce core state
pub fn reduce_core(mut state: CoreState, action: &CoreAction) -> CoreState {
    match action {
        CoreAction::CoreLoaded => {
            state.core_loaded = true;
        }
        CoreAction::PluginsListingRequested => {
            state.plugins_list_loaded = LoadState::Loading;
        }
        CoreAction::PluginsListingLoaded { plugins } => {
            state.plugins = plugins.clone();
            state.plugins_list_loaded = LoadState::Loaded;
            // Keep a plugin chosen from the URL; otherwise open the first tab
            if state.active_plugin.is_none() {
                state.active_plugin = state.plugins.first().cloned();
            }
        }
        CoreAction::PluginsListingFailed => {
            state.plugins_list_loaded = LoadState::Failed;
        }
        CoreAction::PluginChanged { plugin } | CoreAction::PluginUrlHashChanged { plugin } => {
            state.active_plugin = if plugin.is_empty() {
                None
            } else {
                Some(plugin.clone())
            };
        }
        CoreAction::ReloadPeriodChanged { period_ms } => {
            if *period_ms > 0 {
                state.reload_period_ms = *period_ms;
            } else {
                log::debug!("Ignoring non-positive reload period");
            }
        }
        CoreAction::ReloadEnabledToggled => {
            state.reload_enabled = !state.reload_enabled;
        }
    }
    state
}
