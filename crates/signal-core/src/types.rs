//! Core types for Signal Thread
//!
//! A [`Generation`] wraps the artifact handed to a caller with where it came
//! from. Identity and timestamp never feed the artifact itself.

use crate::reconcile::ReconcileOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use signal_contract::GeneratedArtifact;
use ulid::Ulid;

/// Unique generation identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GenerationId(pub Ulid);

impl GenerationId {
    /// Generate new ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for GenerationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GenerationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the returned artifact came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSource {
    /// Validated provider output
    Provider,
    /// Deterministic synthesis, with the reason the provider was not used
    Fallback(ReconcileOutcome),
}

impl ArtifactSource {
    /// Stable label for logs and headers
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::Fallback(_) => "fallback",
        }
    }
}

impl From<ReconcileOutcome> for ArtifactSource {
    fn from(outcome: ReconcileOutcome) -> Self {
        if outcome.is_accepted() {
            Self::Provider
        } else {
            Self::Fallback(outcome)
        }
    }
}

/// Result of one studio run
#[derive(Debug, Clone)]
pub struct Generation {
    /// Run identifier
    pub id: GenerationId,
    /// Completion time
    pub generated_at: DateTime<Utc>,
    /// Artifact origin
    pub source: ArtifactSource,
    /// Artifact handed to the caller
    pub artifact: GeneratedArtifact,
}

impl Generation {
    /// Stamp an artifact with a fresh id and the current time
    #[must_use]
    pub fn new(source: ArtifactSource, artifact: GeneratedArtifact) -> Self {
        Self {
            id: GenerationId::new(),
            generated_at: Utc::now(),
            source,
            artifact,
        }
    }

    /// Check if the fallback was used
    #[inline]
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ArtifactSource::Fallback(_))
    }

    /// Consume into the artifact
    #[inline]
    #[must_use]
    pub fn into_artifact(self) -> GeneratedArtifact {
        self.artifact
    }
}
