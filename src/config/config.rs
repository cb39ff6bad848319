use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    CONFIG_FILE, DEFAULT_API_URL, DEFAULT_MIN_LOADING_MS, DEFAULT_PAGE_SIZE, ENV_API_URL,
    ENV_AUTH_TOKEN, ENV_TABLE_TAKE,
};
use crate::error::{AdminError, AdminResult};
use crate::session::Session;
use crate::table::LoadingPolicy;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
    pub page_size: Option<u32>,
    pub min_loading_ms: Option<u64>,
    #[serde(default)]
    pub session: Session,
}

impl Config {
    /// API base URL: environment, then config file, then the default.
    pub fn api_url(&self) -> String {
        env::var(ENV_API_URL)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Rows requested per page. Zero is never returned.
    pub fn page_size(&self) -> u32 {
        env::var(ENV_TABLE_TAKE)
            .ok()
            .and_then(|take| take.trim().parse::<u32>().ok())
            .or(self.page_size)
            .filter(|take| *take > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn loading_policy(&self) -> LoadingPolicy {
        LoadingPolicy::new(Duration::from_millis(
            self.min_loading_ms.unwrap_or(DEFAULT_MIN_LOADING_MS),
        ))
    }

    /// Bearer token: environment first, then the stored session.
    pub fn auth_token(&self) -> Option<String> {
        env::var(ENV_AUTH_TOKEN)
            .ok()
            .filter(|token| !token.is_empty())
            .or_else(|| self.session.token().map(str::to_string))
    }
}

pub fn config_path() -> AdminResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| AdminError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config() -> AdminResult<Config> {
    load_config_from(&config_path()?)
}

/// A missing file is an empty config; an unreadable or corrupt one is an error.
pub fn load_config_from(path: &Path) -> AdminResult<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)?;
    serde_json::from_str(&config_str).map_err(|e| {
        AdminError::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
    })
}

pub fn save_config(config: &Config) -> AdminResult<()> {
    save_config_to(&config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &Config) -> AdminResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    debug!(path = %path.display(), "config saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.session.is_authenticated());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            api_url: Some("https://api.example.com".to_string()),
            page_size: Some(25),
            min_loading_ms: Some(0),
            session: Session::authenticated(Role::Colaborador, None),
        };
        save_config_to(&path, &config).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_config_from(&path), Err(AdminError::ConfigError(_))));
    }

    #[test]
    fn test_loading_policy_from_config() {
        let config = Config {
            min_loading_ms: Some(250),
            ..Config::default()
        };
        assert_eq!(config.loading_policy().min_visible(), Duration::from_millis(250));
    }
}
