//! Error types for Signal Thread Core
//!
//! Only input errors ever reach a caller of the studio. Provider failures and
//! malformed candidates are absorbed by the fallback path and exist here so
//! they can be logged and reported in [`crate::ReconcileOutcome`].

use signal_contract::ValidationError;
use std::path::PathBuf;

/// Errors returned by [`crate::CampaignStudio`]
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    /// Request body is not JSON
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Persona or campaign request failed validation
    #[error("input rejected: {0}")]
    InputValidation(#[from] ValidationError),
}

impl StudioError {
    /// Offending field path, when the error names one
    #[inline]
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InputValidation(e) => Some(e.field.as_str()),
            Self::MalformedBody(_) => None,
        }
    }
}

/// Failure of the external text provider
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// No credentials configured
    #[error("provider is not configured")]
    NotConfigured,

    /// Transport failure (connect, timeout, TLS)
    #[error("transport error: {0}")]
    Transport(String),

    /// Provider answered with a non-success status
    #[error("provider returned status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// Response envelope did not carry any text
    #[error("provider response had no text: {0}")]
    EmptyResponse(String),
}

impl ProviderError {
    /// Check if the failure is on the provider side rather than local config
    #[inline]
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::NotConfigured | Self::EmptyResponse(_) => false,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::GeneratorConfig`]
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside its accepted range
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// Config key
        key: &'static str,
        /// Reason
        message: String,
    },
}
