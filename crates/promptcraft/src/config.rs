//! Layered application configuration.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use promptcraft_error::{ConfigError, PromptcraftResult};
use promptcraft_history::HistoryConfig;
use promptcraft_models::ProviderConfig;
use promptcraft_prompt::SamplingSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled defaults shipped with the crate.
const DEFAULT_CONFIG: &str = include_str!("../promptcraft.toml");

/// Every table of `promptcraft.toml`.
///
/// # Example
///
/// ```toml
/// [provider]
/// model = "llama3-70b-8192"
/// timeout_secs = 30
///
/// [sampling]
/// generate_temperature = 0.8
///
/// [history]
/// limit = 20
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct AppConfig {
    /// Completion endpoint settings
    provider: ProviderConfig,
    /// Temperature and token caps per operation
    sampling: SamplingSettings,
    /// Local history settings
    history: HistoryConfig,
}

impl AppConfig {
    /// Load configuration with precedence: environment > current dir > user dir > bundled default.
    ///
    /// Sources, later overriding earlier:
    /// 1. Bundled defaults (`promptcraft.toml` shipped with the crate)
    /// 2. `<config_dir>/promptcraft/promptcraft.toml`
    /// 3. `./promptcraft.toml`
    /// 4. `PROMPTCRAFT_<TABLE>__<KEY>` environment variables
    ///
    /// File sources are optional. When no key is configured anywhere,
    /// `GROQ_API_KEY` is used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source exists but cannot be parsed.
    #[instrument]
    pub fn load() -> PromptcraftResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > user dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(dir) = dirs::config_dir() {
            let user_config = dir.join("promptcraft").join("promptcraft.toml");
            builder = builder.add_source(File::from(user_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("promptcraft").required(false))
            .add_source(
                Environment::with_prefix("PROMPTCRAFT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::finish(builder)
    }

    /// Load the bundled defaults overlaid with a single file.
    ///
    /// Environment variables other than `GROQ_API_KEY` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is missing or cannot be parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> PromptcraftResult<Self> {
        debug!("Loading configuration from file");
        let builder = Self::defaults().add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Parse configuration from TOML text overlaid on the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the text is not valid configuration.
    pub fn from_toml_str(toml: &str) -> PromptcraftResult<Self> {
        let builder = Self::defaults().add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> PromptcraftResult<Self> {
        let mut config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.provider = config.provider.with_env_fallback();
        debug!(
            model = %config.provider.model(),
            has_api_key = config.provider.api_key().is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }
}
