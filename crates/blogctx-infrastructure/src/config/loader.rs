//! Configuration loader
//!
//! Sources are merged in this order, later ones overriding earlier ones:
//!
//! 1. `AppConfig::default()`
//! 2. The TOML file given with [`ConfigLoader::with_config_path`], or the
//!    first `blogctx.toml` found in the default locations
//! 3. Environment variables such as `BLOGCTX__EMBEDDING__API_KEY`

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    FILESYSTEM_STORE_PROVIDER,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;
use blogctx_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Where the TOML layer of a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// The file was found and merged
    File(PathBuf),
    /// An explicitly configured file that does not exist
    Missing(PathBuf),
    /// No file given and none found in the default locations
    Defaults,
}

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix, without the trailing separator
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
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load and validate configuration from all sources
    pub fn load(&self) -> Result<AppConfig> {
        self.load_with_source().map(|(config, _)| config)
    }

    /// Like [`load`](Self::load), also reporting which file was used
    ///
    /// Nothing is logged here since logging is configured from the result.
    pub fn load_with_source(&self) -> Result<(AppConfig, ConfigSource)> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let source = match &self.config_path {
            Some(config_path) if config_path.exists() => {
                figment = figment.merge(Toml::file(config_path));
                ConfigSource::File(config_path.clone())
            }
            Some(config_path) => ConfigSource::Missing(config_path.clone()),
            None => match Self::find_default_config_path() {
                Some(default_path) => {
                    figment = figment.merge(Toml::file(&default_path));
                    ConfigSource::File(default_path)
                }
                None => ConfigSource::Defaults,
            },
        };

        // BLOGCTX__SECTION__FIELD maps to section.field
        let prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok((app_config, source))
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing `blogctx.toml` among the usual locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    validate_source_config(config)?;
    validate_provider_config(config)?;
    validate_store_config(config)?;
    validate_retrieval_config(config)?;
    Ok(())
}

fn configuration_error(message: impl Into<String>) -> Error {
    Error::Configuration {
        message: message.into(),
        source: None,
    }
}

fn validate_source_config(config: &AppConfig) -> Result<()> {
    let base_url = config.source.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(configuration_error(format!(
            "Source base URL must start with http:// or https://, got '{base_url}'"
        )));
    }
    if config.source.per_page == 0 {
        return Err(configuration_error("Source page size cannot be 0"));
    }
    Ok(())
}

fn validate_provider_config(config: &AppConfig) -> Result<()> {
    if config.embedding.provider.trim().is_empty() {
        return Err(configuration_error("Embedding provider name cannot be empty"));
    }
    if config.generation.provider.trim().is_empty() {
        return Err(configuration_error("Generation provider name cannot be empty"));
    }
    Ok(())
}

fn validate_store_config(config: &AppConfig) -> Result<()> {
    if config.store.provider == FILESYSTEM_STORE_PROVIDER && config.store.path.is_none() {
        return Err(configuration_error(
            "Knowledge store path is required for the filesystem store",
        ));
    }
    if config.transcript.key.trim().is_empty() {
        return Err(configuration_error("Transcript key cannot be empty"));
    }
    Ok(())
}

fn validate_retrieval_config(config: &AppConfig) -> Result<()> {
    let retrieval = &config.retrieval;
    if retrieval.top_k == 0 || retrieval.keyword_top_k == 0 || retrieval.fallback_top_k == 0 {
        return Err(configuration_error("Retrieval top-k values cannot be 0"));
    }
    Ok(())
}
