//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with serde defaults for every
//! field, so a missing file or an empty file both yield a working setup.
//! The API credential is read from the `HUGGINGFACEHUB_API_TOKEN`
//! environment variable at runtime (never from the config file).

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::error::{ConfigError, Result};

/// Environment variable holding the bearer credential.
pub const TOKEN_ENV: &str = "HUGGINGFACEHUB_API_TOKEN";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which hosted model to talk to, and how.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Base URL of the hosted-inference API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Model repository id, e.g. "google/flan-t5-small".
    #[serde(default = "default_repo_id")]
    pub repo_id: String,

    /// Optional prompt template wrapped around the question before it is
    /// sent. Must contain a `{question}` placeholder. When absent the
    /// question is sent verbatim.
    #[serde(default)]
    pub prompt_template: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ModelConfig {
    /// Full endpoint URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), self.repo_id)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            repo_id: default_repo_id(),
            prompt_template: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Generation parameters sent verbatim to the endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default = "default_do_sample")]
    pub do_sample: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            do_sample: default_do_sample(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr so replies printed on stdout stay clean.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

fn default_api_url() -> String {
    "https://api-inference.huggingface.co/models".into()
}

fn default_repo_id() -> String {
    "google/flan-t5-small".into()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_max_length() -> u32 {
    150
}

fn default_temperature() -> f64 {
    0.7
}

fn default_top_p() -> f64 {
    0.9
}

const fn default_do_sample() -> bool {
    true
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.model.repo_id.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "repo_id" });
        }
        if let Err(e) = Url::parse(&self.model.api_url) {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: e.to_string(),
            });
        }
        if let Some(template) = &self.model.prompt_template {
            if !template.contains("{question}") {
                return Err(ConfigError::InvalidValue {
                    field: "prompt_template",
                    reason: "missing {question} placeholder".into(),
                });
            }
        }
        if self.generation.max_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_length",
                reason: "must be greater than zero".into(),
            });
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "temperature",
                reason: format!("{} outside 0.0..=2.0", self.generation.temperature),
            });
        }
        if !(0.0..=1.0).contains(&self.generation.top_p) {
            return Err(ConfigError::InvalidValue {
                field: "top_p",
                reason: format!("{} outside 0.0..=1.0", self.generation.top_p),
            });
        }
        Ok(())
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_wire_contract() {
        let config = Config::default();
        assert_eq!(config.generation.max_length, 150);
        assert_eq!(config.generation.temperature, 0.7);
        assert_eq!(config.generation.top_p, 0.9);
        assert!(config.generation.do_sample);
        assert_eq!(
            config.model.endpoint(),
            "https://api-inference.huggingface.co/models/google/flan-t5-small"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let model = ModelConfig {
            api_url: "https://example.com/models/".into(),
            ..ModelConfig::default()
        };
        assert_eq!(
            model.endpoint(),
            "https://example.com/models/google/flan-t5-small"
        );
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").expect("empty config");
        assert_eq!(config.model.repo_id, "google/flan-t5-small");
        assert_eq!(config.logging.level, "info");
    }
}
