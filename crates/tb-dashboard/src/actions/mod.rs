//! Actions module
//!
//! Actions are tagged by the state slice they target. Every action carries a
//! stable kind string (`"[Core] Plugin Changed"`) used for logging and for
//! generic telemetry payloads.

pub mod core_action;
pub mod route_action;

pub use core_action::CoreAction;
pub use route_action::RouteAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Dashboard core: plugins, selection, reload settings
    Core(CoreAction),
    /// Routing: which page the dashboard shows
    Route(RouteAction),

    /// No-op action
    None,
}

impl Action {
    /// Stable discriminator for this action
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Core(action) => action.into(),
            Action::Route(action) => action.into(),
            Action::None => "None",
        }
    }
}

impl From<CoreAction> for Action {
    fn from(action: CoreAction) -> Self {
        Action::Core(action)
    }
}

impl From<RouteAction> for Action {
    fn from(action: RouteAction) -> Self {
        Action::Route(action)
    }
}
