//! Dialect configuration.
//!
//! Exposes [`DialectConfig`] so applications can load dialect settings
//! from `config/config.toml` or environment variables using
//! `DialectConfig::load()`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Dialect settings shared by the translator and the quoter.
#[derive(Debug, Clone, Deserialize)]
pub struct DialectConfig {
    /// Wrap identifiers in double quotes (Informix DELIMIDENT mode).
    #[serde(default)]
    pub delimident: bool,
    /// Prefix for generated bound-parameter placeholders.
    #[serde(default = "default_param_prefix")]
    pub param_prefix: String,
    /// Schema name omitted from fully-qualified table names.
    #[serde(default)]
    pub default_schema: String,
}

fn default_param_prefix() -> String {
    ":qp".to_string()
}

impl Default for DialectConfig {
    fn default() -> Self {
        DialectConfig {
            delimident: false,
            param_prefix: default_param_prefix(),
            default_schema: String::new(),
        }
    }
}

impl DialectConfig {
    /// Load the dialect configuration from `config/config.toml`, falling back to env vars.
    pub fn load() -> Result<Self, ConfigError> {
        // Build configuration by reading the TOML file (optional) and environment variables
        let builder = Config::builder()
            .add_source(File::with_name("config/config.toml").required(false))
            .add_source(Environment::with_prefix("INFORMIX").separator("__"));

        // Try to build the configuration, handling missing or unreadable file
        let settings = match builder.build() {
            Ok(cfg) => cfg,
            Err(err) => {
                // If the file existed but was unreadable (parse error, permission issue, etc.), log a warning and retry with env only
                if std::path::Path::new("config/config.toml").exists() {
                    log::warn!(
                        "failed to load config file, falling back to env. Error: {}",
                        err
                    );
                }
                // Retry using only environment variables as source
                Config::builder()
                    .add_source(Environment::with_prefix("INFORMIX").separator("__"))
                    .build()
                    .map_err(|env_err| {
                        ConfigError::Message(format!(
                            "Failed to load configuration from file and env: {}, then env-only error: {}",
                            err, env_err
                        ))
                    })?
            }
        };

        // The dialect section is optional; absent settings use the defaults
        match settings.get::<DialectConfig>("dialect") {
            Ok(cfg) => Ok(cfg),
            Err(ConfigError::NotFound(_)) => Ok(DialectConfig::default()),
            Err(e) => Err(ConfigError::Message(format!(
                "Dialect configuration could not be loaded from file or environment: {}",
                e
            ))),
        }
    }
}
