use strum::IntoStaticStr;

/// Actions handled by the core slice of the dashboard state
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum CoreAction {
    /// The dashboard finished its initial hydration.
    /// Analytics stays silent until this has been dispatched.
    #[strum(serialize = "[Core] Loaded")]
    CoreLoaded,

    #[strum(serialize = "[Core] Plugin Listing Requested")]
    PluginsListingRequested,

    /// Plugin listing arrived; ids are in display order
    #[strum(serialize = "[Core] Plugin Listing Loaded")]
    PluginsListingLoaded { plugins: Vec<String> },

    #[strum(serialize = "[Core] Plugin Listing Failed")]
    PluginsListingFailed,

    /// User picked a plugin tab
    #[strum(serialize = "[Core] Plugin Changed")]
    PluginChanged { plugin: String },

    /// The URL fragment was changed from outside the app
    #[strum(serialize = "[Core] Plugin Url Hash Changed")]
    PluginUrlHashChanged { plugin: String },

    #[strum(serialize = "[Core] Reload Period Changed")]
    ReloadPeriodChanged { period_ms: u64 },

    #[strum(serialize = "[Core] Reload Enabled Toggled")]
    ReloadEnabledToggled,
}
