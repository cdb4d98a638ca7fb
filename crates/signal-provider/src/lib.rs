//! Signal Thread Provider
//!
//! [`OpenAiProvider`] implements [`signal_core::TextProvider`] over an
//! OpenAI-compatible chat-completions API: bearer authentication, one user
//! message carrying the compiled prompt, and the first choice's message
//! content as the candidate text.
//!
//! # Example
//!
//! ```rust,ignore
//! use signal_core::{CampaignStudio, GeneratorConfig};
//! use signal_provider::OpenAiProvider;
//! use std::sync::Arc;
//!
//! let config = GeneratorConfig::from_env();
//! let mut studio = CampaignStudio::new(config.clone());
//! if let Ok(provider) = OpenAiProvider::from_config(&config) {
//!     studio = studio.with_provider(Arc::new(provider));
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod client;
mod wire;

// Re-exports
pub use client::{endpoint_url, OpenAiProvider, CHAT_COMPLETIONS_PATH};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
