use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".tb-dashboard.toml";

/// Load config file content, first match wins
///
/// Searches in:
/// 1. `./.tb-dashboard.toml`
/// 2. `~/.tb-dashboard.toml`
/// 3. `<config dir>/tb-dashboard/config.toml`
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    if let Some(home_config) = get_home_config_path() {
        if let Ok(content) = std::fs::read_to_string(&home_config) {
            log::debug!("Loaded config from {}", home_config.display());
            return Some(content);
        }
    }

    match crate::paths::app_config_path() {
        Ok(global) => match std::fs::read_to_string(&global) {
            Ok(content) => {
                log::debug!("Loaded config from {}", global.display());
                Some(content)
            }
            Err(_) => None,
        },
        Err(e) => {
            log::debug!("No global config location: {:#}", e);
            None
        }
    }
}

/// Returns ~/.tb-dashboard.toml if HOME is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
