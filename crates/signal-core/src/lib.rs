//! Signal Thread Core
//!
//! Turns a validated persona and campaign request into a guaranteed-valid
//! campaign artifact, using an external text provider when one is
//! configured and deterministic synthesis otherwise.
//!
//! # Core Concepts
//!
//! - [`reconcile`]: Choose provider output or the fallback, never failing
//! - [`CampaignStudio`]: Validate → synthesize → provider → reconcile
//! - [`TextProvider`]: Boundary trait for external generators
//! - [`GeneratorConfig`]: Explicit provider settings
//!
//! # Example
//!
//! ```rust,ignore
//! use signal_core::{CampaignStudio, GeneratorConfig};
//!
//! # async fn example(body: serde_json::Value) -> Result<(), Box<dyn std::error::Error>> {
//! let studio = CampaignStudio::new(GeneratorConfig::from_env());
//! let generation = studio.generate(&body).await?;
//!
//! println!("{} from {}", generation.id, generation.source.label());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod config;
pub mod error;
pub mod provider;
pub mod reconcile;
pub mod studio;
pub mod types;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use error::{ConfigError, ProviderError, StudioError};
pub use provider::{CompletionRequest, TextProvider};
pub use reconcile::{reconcile, reconcile_with_outcome, ReconcileOutcome, Reconciliation};
pub use studio::CampaignStudio;
pub use types::{ArtifactSource, Generation, GenerationId};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
