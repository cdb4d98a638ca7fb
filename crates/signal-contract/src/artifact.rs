//! Output contract: the generated campaign artifact
//!
//! [`GeneratedArtifact`] is what every caller ultimately receives, whether it
//! came from the external provider or from deterministic synthesis.
//! [`GeneratedArtifact::validate`] is the strict decode step for untrusted
//! candidates: it yields a fully populated value or a typed error, never a
//! partial object and never a panic.

use crate::error::ValidationResult;
use crate::reader::FieldReader;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Largest accepted `dayOffset` (2^53 - 1, the exact-integer limit of a JSON
/// number read as a double)
pub const MAX_DAY_OFFSET: u64 = (1 << 53) - 1;

/// Complete structured content package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArtifact {
    /// Free-text summary
    pub statement: String,
    /// Hero post and its platform variations
    pub post: HeroPost,
    /// Publishing calendar
    pub calendar: Vec<CalendarEntry>,
    /// Engagement playbook
    pub playbook: Playbook,
    /// KPI targets
    pub metrics: Vec<Metric>,
}

/// Hero post blueprint
///
/// # Invariants
/// - `variations` holds at least one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroPost {
    pub headline: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub visual_direction: String,
    pub call_to_action: String,
    pub variations: Vec<Variation>,
}

/// Derivative post for another platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Variation {
    pub platform: String,
    pub angle: String,
    pub caption: String,
}

/// One scheduled touchpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    /// Days after launch (non-negative)
    pub day_offset: u64,
    pub platform: String,
    pub pillar: String,
    pub format: String,
    pub hook: String,
    pub brief: String,
}

/// Engagement steps around the launch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Playbook {
    pub before: Vec<String>,
    pub during: Vec<String>,
    pub after: Vec<String>,
}

/// KPI guardrail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Metric {
    pub kpi: String,
    pub target: String,
    pub rationale: String,
}

impl GeneratedArtifact {
    /// Structurally validate a candidate artifact
    ///
    /// Text fields may be empty but must be present strings. Unknown keys
    /// are ignored.
    ///
    /// # Errors
    /// Returns the first violated constraint, with its full field path
    pub fn validate(value: &Value) -> ValidationResult<Self> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            statement: fields.text("statement")?,
            post: HeroPost::read(&fields.object("post")?)?,
            calendar: fields.records("calendar", 0, CalendarEntry::read)?,
            playbook: Playbook::read(&fields.object("playbook")?)?,
            metrics: fields.records("metrics", 0, Metric::read)?,
        })
    }
}

impl HeroPost {
    fn read(fields: &FieldReader<'_>) -> ValidationResult<Self> {
        Ok(Self {
            headline: fields.text("headline")?,
            caption: fields.text("caption")?,
            hashtags: fields.text_list("hashtags")?,
            visual_direction: fields.text("visualDirection")?,
            call_to_action: fields.text("callToAction")?,
            variations: fields.records("variations", 1, Variation::read)?,
        })
    }
}

impl Variation {
    fn read(fields: &FieldReader<'_>) -> ValidationResult<Self> {
        Ok(Self {
            platform: fields.text("platform")?,
            angle: fields.text("angle")?,
            caption: fields.text("caption")?,
        })
    }
}

impl CalendarEntry {
    #[allow(clippy::cast_possible_wrap)]
    fn read(fields: &FieldReader<'_>) -> ValidationResult<Self> {
        Ok(Self {
            day_offset: fields
                .integer("dayOffset", 0, MAX_DAY_OFFSET as i64)?
                .unsigned_abs(),
            platform: fields.text("platform")?,
            pillar: fields.text("pillar")?,
            format: fields.text("format")?,
            hook: fields.text("hook")?,
            brief: fields.text("brief")?,
        })
    }
}

impl Playbook {
    fn read(fields: &FieldReader<'_>) -> ValidationResult<Self> {
        Ok(Self {
            before: fields.text_list("before")?,
            during: fields.text_list("during")?,
            after: fields.text_list("after")?,
        })
    }
}

impl Metric {
    fn read(fields: &FieldReader<'_>) -> ValidationResult<Self> {
        Ok(Self {
            kpi: fields.text("kpi")?,
            target: fields.text("target")?,
            rationale: fields.text("rationale")?,
        })
    }
}

/// Validate a candidate artifact
///
/// # Errors
/// Returns the first violated constraint
pub fn validate_artifact(value: &Value) -> ValidationResult<GeneratedArtifact> {
    GeneratedArtifact::validate(value)
}
