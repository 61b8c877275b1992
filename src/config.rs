use crate::errors::{CadenciaError, CadenciaResult};
use crate::theme::ThemeMode;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub theme: ThemeMode,
    pub tick_ms: u64,
    pub typing_delay_ms: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            tick_ms: 250,
            typing_delay_ms: 1500,
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Loads the config file if present, otherwise writes the defaults out.
pub fn initialize_config() -> CadenciaResult<()> {
    let config_path = get_config_path()?;

    if config_path.exists() {
        let config = read_config_file(&config_path)?;
        validate_config(&config)?;
        *CONFIG.write().unwrap() = config;
    } else {
        let config = Config::default();
        write_config_file(&config_path, &config)?;
        *CONFIG.write().unwrap() = config;
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

pub fn update_config(updated_config: Config) -> CadenciaResult<()> {
    validate_config(&updated_config)?;

    let config_path = get_config_path()?;
    write_config_file(&config_path, &updated_config)?;

    *CONFIG.write().unwrap() = updated_config;

    Ok(())
}

fn get_config_path() -> CadenciaResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| CadenciaError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("cadencia").join("config.json"))
}

fn read_config_file(path: &Path) -> CadenciaResult<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| CadenciaError::config_error(format!("Failed to read config file: {e}")))?;

    serde_json::from_str(&config_str)
        .map_err(|e| CadenciaError::config_error(format!("Failed to parse config: {e}")))
}

fn write_config_file(path: &Path, config: &Config) -> CadenciaResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CadenciaError::config_error(format!("Failed to create config directory: {e}"))
        })?;
    }

    let config_str = serde_json::to_string_pretty(config)
        .map_err(|e| CadenciaError::config_error(format!("Failed to serialize config: {e}")))?;

    fs::write(path, config_str)
        .map_err(|e| CadenciaError::config_error(format!("Failed to write config file: {e}")))
}

fn validate_config(config: &Config) -> CadenciaResult<()> {
    if !(50..=1000).contains(&config.tick_ms) {
        return Err(CadenciaError::config_error(
            "tick_ms must be between 50 and 1000",
        ));
    }

    if config.typing_delay_ms > 10_000 {
        return Err(CadenciaError::config_error(
            "typing_delay_ms must not exceed 10000",
        ));
    }

    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
    if !LEVELS.contains(&config.log_level.as_str()) {
        return Err(CadenciaError::config_error(
            "log_level must be one of trace, debug, info, warn, error",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_invalid_tick() {
        let mut config = Config::default();
        config.tick_ms = 5000;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_invalid_log_level() {
        let mut config = Config::default();
        config.log_level = "verbose".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.theme = ThemeMode::Light;
        config.typing_delay_ms = 500;

        write_config_file(&path, &config).expect("write config");
        let loaded = read_config_file(&path).expect("read config");

        assert_eq!(loaded.theme, ThemeMode::Light);
        assert_eq!(loaded.typing_delay_ms, 500);
        assert_eq!(loaded.tick_ms, config.tick_ms);
    }
}
