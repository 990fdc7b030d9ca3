use strum::IntoStaticStr;

use crate::state::Route;

/// Routing actions
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum RouteAction {
    #[strum(serialize = "[Route] Navigated")]
    Navigated { route: Route },

    #[strum(serialize = "[Route] Cleared")]
    Cleared,
}
