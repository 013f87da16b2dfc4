use crate::domain::interface::Document;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const URL_ENV: &str = "REMOCON_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub document: Document,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 5,
            document: Document::default(),
        }
    }
}

impl AppConfig {
    /// Reads the config file, falling back to defaults when it is missing or broken.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring malformed config {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Cannot read config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Flag beats environment beats file.
    #[must_use]
    pub fn with_overrides(mut self, url_flag: Option<String>, url_env: Option<String>) -> Self {
        if let Some(url) = url_flag.or(url_env).filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("remocon");
        path
    })
}

pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
