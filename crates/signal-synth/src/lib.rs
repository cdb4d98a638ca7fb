//! Signal Thread Synthesis
//!
//! Pure derivations from a validated persona and campaign request.
//!
//! # Core Concepts
//!
//! - [`compile_prompt`]: Instruction text for the external provider
//! - [`synthesize`]: Complete artifact built without any external call
//! - [`CalendarBounds`]: Clamped calendar length and platform cadence
//! - [`template`]: Named sentence templates with explicit slots
//!
//! # Example
//!
//! ```rust,ignore
//! use signal_synth::{compile_prompt, synthesize};
//!
//! let fallback = synthesize(&persona, &request);
//! let prompt = compile_prompt(&persona, &request);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod calendar;
mod keywords;
mod prompt;
mod synthesizer;

/// Sentence templates and lookup tables
pub mod template;

// Re-exports
pub use calendar::{CalendarBounds, MAX_CALENDAR_ROWS, PILLARS_PER_PLATFORM, PILLAR_SPACING};
pub use keywords::{hero_hashtags, normalize_keywords, DEFAULT_HASHTAGS, MAX_HASHTAGS};
pub use prompt::{compile_prompt, OUTPUT_SHAPE};
pub use synthesizer::{
    synthesize, EffectiveLists, FALLBACK_PILLAR, FALLBACK_PLATFORM, MAX_VARIATIONS,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
