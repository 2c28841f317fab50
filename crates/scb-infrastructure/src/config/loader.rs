//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use scb_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `SCB__INDEXING__WORKERS`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        match &self.config_path {
            Some(config_path) if config_path.exists() => {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            }
            Some(config_path) => {
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            None => {
                if let Some(default_path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&default_path));
                    log_config_loaded(&default_path, true);
                }
            }
        }

        // Double underscore separates nested keys so single underscores
        // survive in field names (SCB__INDEXING__EMBED_TIMEOUT_SECS)
        let prefix = format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = to_toml(config)?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|d| {
                    d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                        .join(DEFAULT_CONFIG_FILENAME)
                })
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.is_file())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a configuration as pretty TOML
pub fn to_toml(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_providers_config(config)?;
    validate_indexing_config(config)?;
    validate_search_config(config)?;
    validate_logging_config(config)?;
    Ok(())
}

fn validate_providers_config(config: &AppConfig) -> Result<()> {
    let providers = &config.providers;
    if providers.embedding.provider.trim().is_empty() {
        return Err(Error::configuration("Embedding provider cannot be empty"));
    }
    if providers.embedding.dimensions == Some(0) {
        return Err(Error::configuration("Embedding dimensions cannot be 0"));
    }
    if providers.vector_index.collection.trim().is_empty() {
        return Err(Error::configuration(
            "Vector index collection cannot be empty",
        ));
    }
    if providers.vector_index.provider == "filesystem" && providers.vector_index.path.is_none() {
        return Err(Error::configuration(
            "Vector index path is required for the filesystem provider",
        ));
    }
    if providers.service_store.provider == "filesystem" && providers.service_store.path.is_none()
    {
        return Err(Error::configuration(
            "Service store path is required for the filesystem provider",
        ));
    }
    Ok(())
}

fn validate_indexing_config(config: &AppConfig) -> Result<()> {
    if config.indexing.workers == 0 {
        return Err(Error::configuration("Indexing workers cannot be 0"));
    }
    if config.indexing.embed_timeout_secs == 0 {
        return Err(Error::configuration("Embedding timeout cannot be 0"));
    }
    Ok(())
}

fn validate_search_config(config: &AppConfig) -> Result<()> {
    if config.search.default_limit == 0 {
        return Err(Error::configuration("Search default limit cannot be 0"));
    }
    if config.search.max_limit == 0 {
        return Err(Error::configuration("Search max limit cannot be 0"));
    }
    if config.search.default_limit > config.search.max_limit {
        return Err(Error::configuration(format!(
            "Search default limit ({}) exceeds max limit ({})",
            config.search.default_limit, config.search.max_limit
        )));
    }
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}
