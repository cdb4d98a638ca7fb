//! Generator configuration
//!
//! Everything the provider boundary needs is carried explicitly in
//! [`GeneratorConfig`]. Synthesis never reads configuration.
//!
//! Sources are layered: defaults, then an optional TOML file, then the
//! `OPENAI_*` environment variables.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Environment variable holding the provider credential
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable overriding the model name
pub const ENV_MODEL: &str = "OPENAI_MODEL";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";

/// Default model name
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Provider settings
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Bearer credential; `None` or blank disables the provider
    pub api_key: Option<String>,
    /// Model name sent with every completion
    pub model: String,
    /// API base URL (no trailing path)
    pub base_url: String,
    /// Output token cap per completion
    pub max_output_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl GeneratorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Parse a TOML document; missing keys keep their defaults
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown keys and
    /// [`ConfigError::InvalidValue`] on out-of-range values
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.checked()
    }

    /// Read a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// as [`Self::from_toml_str`]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load defaults, optional file, then environment
    ///
    /// # Errors
    /// Propagates file errors
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_env(|key| std::env::var(key).ok()))
    }

    /// Overlay values from an environment lookup
    ///
    /// Blank variables are ignored, except that a blank key clears the
    /// credential.
    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(model) = lookup(ENV_MODEL).filter(|v| !v.trim().is_empty()) {
            self.model = model;
        }
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = url;
        }
        self
    }

    /// With API key
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Without API key (offline)
    #[inline]
    #[must_use]
    pub fn without_api_key(mut self) -> Self {
        self.api_key = None;
        self
    }

    /// With model name
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// With API base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// With HTTP timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Usable credential, if any
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Whether a provider call should be attempted
    #[inline]
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    fn checked(self) -> Result<Self, ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "model",
                message: "must not be blank".to_string(),
            });
        }
        if self.max_output_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_output_tokens",
                message: "must be positive".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidValue {
                key: "temperature",
                message: format!("{} is outside 0.0..=2.0", self.temperature),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_secs",
                message: "must be positive".to_string(),
            });
        }
        Ok(self)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_output_tokens: 1200,
            temperature: 0.7,
            timeout_secs: 60,
        }
    }
}

// Keeps the credential out of logs
impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
