use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::pagination::PRODUCTS_PER_PAGE;

const DEFAULT_MAX_PRICE: u64 = 100_000_000;
const DEFAULT_LANG: &str = "en";
const DEFAULT_LOADER_TRANSITION_MS: u64 = 500;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub max_price: Option<u64>,
    #[serde(default)]
    pub default_lang: Option<String>,
    #[serde(default)]
    pub loader_transition_ms: Option<u64>,
    /// Artificial delay applied to every catalog fetch, in milliseconds.
    #[serde(default)]
    pub fetch_latency_ms: Option<u64>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/storefront/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("storefront/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("storefront\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Reads the config at `path`, falling back to defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Could not read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn effective_page_size(&self) -> usize {
        self.page_size
            .filter(|&size| size > 0)
            .unwrap_or(PRODUCTS_PER_PAGE)
    }

    pub fn effective_max_price(&self) -> u64 {
        self.max_price.unwrap_or(DEFAULT_MAX_PRICE)
    }

    pub fn effective_default_lang(&self) -> &str {
        self.default_lang.as_deref().unwrap_or(DEFAULT_LANG)
    }

    pub fn effective_loader_transition(&self) -> Duration {
        Duration::from_millis(
            self.loader_transition_ms
                .unwrap_or(DEFAULT_LOADER_TRANSITION_MS),
        )
    }

    pub fn effective_fetch_latency(&self) -> Duration {
        Duration::from_millis(self.fetch_latency_ms.unwrap_or(0))
    }
}
