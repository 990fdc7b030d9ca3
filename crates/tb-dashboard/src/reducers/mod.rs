pub mod app_reducer;
pub mod core_reducer;
pub mod route_reducer;

pub use app_reducer::reduce;
