//! JSON Schema export of the contracts

use crate::artifact::GeneratedArtifact;
use crate::input::GenerationRequest;
use schemars::schema::RootSchema;
use schemars::schema_for;

/// Schema of the output artifact
#[must_use]
pub fn artifact_schema() -> RootSchema {
    schema_for!(GeneratedArtifact)
}

/// Schema of the `{ persona, request }` input envelope
#[must_use]
pub fn request_schema() -> RootSchema {
    schema_for!(GenerationRequest)
}
