//! Configuration and file locations for tb-dashboard
//!
//! This crate provides:
//! - Platform paths for config and cache files
//! - Configuration file lookup (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, DeepLinkConfig, Environment, TelemetryConfig};
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir};
