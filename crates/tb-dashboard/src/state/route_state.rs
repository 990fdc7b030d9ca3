use serde::{Deserialize, Serialize};

/// A page of the dashboard, identified by its path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Routing state
///
/// The deep-link synchronizer stays idle until `active_route` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteState {
    pub active_route: Option<Route>,
}
