//! Validate-or-fallback pipeline
//!
//! [`reconcile`] decides between provider text and the precomputed fallback.
//! It never fails: every path ends in a complete, valid artifact.
//!
//! ```text
//! candidate ──▶ blank? ──yes──▶ NoCandidate ─────┐
//!                 │ no                           │
//!                 ▼                              ▼
//!            JSON parse ──err──▶ ParseFailed ──▶ fallback
//!                 │ ok                           ▲
//!                 ▼                              │
//!         validate_artifact ──err──▶ SchemaInvalid
//!                 │ ok
//!                 ▼
//!             Accepted ──▶ candidate
//! ```

use signal_contract::{validate_artifact, GeneratedArtifact, ValidationError};
use std::fmt;

/// How a reconciliation was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No candidate text, or only whitespace
    NoCandidate,
    /// Candidate was not JSON
    ParseFailed(String),
    /// Candidate was JSON but broke the artifact contract
    SchemaInvalid(ValidationError),
    /// Candidate passed validation and was returned
    Accepted,
}

impl ReconcileOutcome {
    /// Check if the candidate was used
    #[inline]
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Stable label for logs and headers
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoCandidate => "no-candidate",
            Self::ParseFailed(_) => "parse-failed",
            Self::SchemaInvalid(_) => "schema-invalid",
            Self::Accepted => "accepted",
        }
    }
}

impl fmt::Display for ReconcileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidate | Self::Accepted => f.write_str(self.label()),
            Self::ParseFailed(reason) => write!(f, "{}: {reason}", self.label()),
            Self::SchemaInvalid(error) => write!(f, "{}: {error}", self.label()),
        }
    }
}

/// Artifact chosen by [`reconcile_with_outcome`], with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Artifact to hand to the caller
    pub artifact: GeneratedArtifact,
    /// Which path produced it
    pub outcome: ReconcileOutcome,
}

/// Choose between candidate text and `fallback`, reporting the outcome
///
/// Every non-accepted outcome is logged at `warn`.
#[must_use]
pub fn reconcile_with_outcome(
    candidate: Option<&str>,
    fallback: GeneratedArtifact,
) -> Reconciliation {
    let outcome = match candidate.map(str::trim).filter(|text| !text.is_empty()) {
        None => ReconcileOutcome::NoCandidate,
        Some(text) => match serde_json::from_str::<serde_json::Value>(text) {
            Err(e) => ReconcileOutcome::ParseFailed(e.to_string()),
            Ok(value) => match validate_artifact(&value) {
                Err(e) => ReconcileOutcome::SchemaInvalid(e),
                Ok(artifact) => {
                    return Reconciliation {
                        artifact,
                        outcome: ReconcileOutcome::Accepted,
                    }
                }
            },
        },
    };

    tracing::warn!(outcome = outcome.label(), "reverting to fallback: {}", outcome);
    Reconciliation {
        artifact: fallback,
        outcome,
    }
}

/// Choose between candidate text and `fallback`
///
/// Returns the parsed candidate when it is valid JSON that satisfies the
/// artifact contract, otherwise `fallback` unchanged.
#[inline]
#[must_use]
pub fn reconcile(candidate: Option<&str>, fallback: GeneratedArtifact) -> GeneratedArtifact {
    reconcile_with_outcome(candidate, fallback).artifact
}
