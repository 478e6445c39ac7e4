use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use crate::constants::{DEFAULT_API_ROOT, DEFAULT_CACHE_NAMESPACE, DEFAULT_LOCALE};

/// Main configuration structure.
///
/// Loaded once at startup and passed explicitly into constructors; nothing
/// in the crate reads ambient global state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API endpoint configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Site-wide settings
    #[serde(default)]
    pub site: SiteConfig,

    /// Session cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Analytics configuration
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// API endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL the HTTP client issues requests against
    pub root: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_API_ROOT.to_string(),
        }
    }
}

/// Site-wide settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Active locale, appended to query keys so entries drop out on change
    pub locale: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

/// Session cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Storage backend: "memory" or "file"
    pub backend: String,
    /// Namespace for the file backend's on-disk directory
    pub namespace: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            namespace: DEFAULT_CACHE_NAMESPACE.to_string(),
        }
    }
}

/// Analytics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Provider name; unknown or empty disables analytics
    pub provider: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            provider: String::new(),
        }
    }
}

/// Load configuration from multiple sources
pub fn load_config() -> Result<Config> {
    // Get config directories
    let config_dir = get_config_dir()?;
    let global_config = config_dir.join("config.toml");
    let local_config = PathBuf::from(".syllabus/config.toml");

    // Build figment configuration
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    // Add global config if it exists
    if global_config.exists() {
        figment = figment.merge(Toml::file(&global_config));
    }

    // Add local config if it exists
    if local_config.exists() {
        figment = figment.merge(Toml::file(&local_config));
    }

    // Add environment variables (SYLLABUS_ prefix)
    figment = figment.merge(Env::prefixed("SYLLABUS_").split("_"));

    // Extract and return config
    figment.extract().context("Failed to load configuration")
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", DEFAULT_CACHE_NAMESPACE) {
        let config_dir = proj_dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    } else {
        // Fallback to home directory
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Could not determine home directory")?;
        let config_dir = PathBuf::from(home)
            .join(".config")
            .join(DEFAULT_CACHE_NAMESPACE);
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }
}

/// Save configuration to file
pub fn save_config(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let path = if let Some(p) = path {
        p
    } else {
        get_config_dir()?.join("config.toml")
    };

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default configuration file if it doesn't exist
pub fn init_config() -> Result<()> {
    let config_dir = get_config_dir()?;
    let config_file = config_dir.join("config.toml");

    if !config_file.exists() {
        let default_config = Config::default();
        save_config(&default_config, Some(config_file.clone()))?;
        info!("created default configuration at {}", config_file.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_extract() {
        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .extract()
            .unwrap();
        assert_eq!(config.cache.backend, "memory");
        assert_eq!(config.site.locale, "en-us");
        assert!(config.analytics.provider.is_empty());
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::string(
                r#"
                [site]
                locale = "fr-fr"

                [cache]
                backend = "file"
                namespace = "campus"

                [analytics]
                provider = "google_analytics"
                "#,
            ))
            .extract()
            .unwrap();

        assert_eq!(config.site.locale, "fr-fr");
        assert_eq!(config.cache.backend, "file");
        assert_eq!(config.cache.namespace, "campus");
        assert_eq!(config.analytics.provider, "google_analytics");
        // Untouched sections keep their defaults
        assert_eq!(config.api.root, crate::constants::DEFAULT_API_ROOT);
    }
}
