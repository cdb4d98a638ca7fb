//! Signal Thread Contracts
//!
//! Shapes and validity rules for campaign generation.
//!
//! # Core Concepts
//!
//! - [`Persona`]: Brand identity steering all derived text
//! - [`CampaignRequest`]: Parameters of a single campaign run
//! - [`GeneratedArtifact`]: The complete output package
//! - [`ValidationError`]: First violated constraint, with its field path
//!
//! Validation accepts arbitrary [`serde_json::Value`]s and returns either a
//! fully typed value or a [`ValidationError`]; it never panics on malformed
//! input.
//!
//! # Example
//!
//! ```rust,ignore
//! use signal_contract::{validate_generation_request, validate_artifact};
//!
//! let input = validate_generation_request(&raw_json)?;
//! let candidate = validate_artifact(&provider_json)?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod artifact;
mod error;
mod input;
mod reader;
mod schema;

// Re-exports
pub use artifact::{
    validate_artifact, CalendarEntry, GeneratedArtifact, HeroPost, Metric, Playbook, Variation,
    MAX_DAY_OFFSET,
};
pub use error::{JsonKind, ValidationError, ValidationReason, ValidationResult, ROOT_PATH};
pub use input::{
    validate_campaign_request, validate_generation_request, validate_input, validate_persona,
    CampaignRequest, GenerationRequest, Persona, MAX_CAMPAIGN_DAYS, MIN_CAMPAIGN_DAYS,
};
pub use schema::{artifact_schema, request_schema};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
