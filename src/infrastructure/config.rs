use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::log;

const APP_NAME: &str = "weekly-report";

pub fn load_config() -> AppConfig {
    match confy::load(APP_NAME, "config") {
        Ok(cfg) => {
            log!("Config loaded successfully");
            cfg
        }
        Err(e) => {
            log!("Error loading config: {}. Using default.", e);
            AppConfig::default()
        }
    }
}

pub fn save_config(cfg: &AppConfig) -> Result<(), String> {
    confy::store(APP_NAME, "config", cfg).map_err(|e| e.to_string())
}

pub fn config_path() -> Result<PathBuf, String> {
    confy::get_configuration_file_path(APP_NAME, "config").map_err(|e| e.to_string())
}
