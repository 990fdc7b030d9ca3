pub mod app;
pub mod core_state;
pub mod route_state;

pub use app::AppState;
pub use core_state::{CoreState, LoadState, DEFAULT_RELOAD_PERIOD_MS};
pub use route_state::{Route, RouteState};
