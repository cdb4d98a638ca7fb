//! Input contracts: brand persona and campaign request
//!
//! Both are immutable value objects built fresh per request. Validation
//! walks fields in declared order and stops at the first violation.

use crate::error::{ValidationError, ValidationResult};
use crate::reader::FieldReader;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shortest accepted campaign, in days
pub const MIN_CAMPAIGN_DAYS: u32 = 1;

/// Longest accepted campaign, in days
pub const MAX_CAMPAIGN_DAYS: u32 = 60;

/// Brand identity used to steer all derived text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    /// Brand name
    pub brand_name: String,
    /// Mission statement
    pub mission: String,
    /// Brand voice
    pub voice: String,
    /// Audience description
    pub audience: String,
    /// Descriptors / aesthetic vibe
    pub vibe: String,
    /// Value proposition
    pub value_prop: String,
    /// Comma-delimited keyword anchors
    pub keywords: String,
    /// Preferred platforms, in priority order (duplicates allowed)
    pub platforms: Vec<String>,
    /// Content pillars, in priority order
    pub pillars: Vec<String>,
}

impl Persona {
    /// Validate arbitrary JSON into a persona
    ///
    /// # Errors
    /// Returns the first violated field constraint
    pub fn validate(value: &Value) -> ValidationResult<Self> {
        Self::read(&FieldReader::new(value)?)
    }

    pub(crate) fn read(fields: &FieldReader<'_>) -> ValidationResult<Self> {
        Ok(Self {
            brand_name: fields.required_text("brandName")?,
            mission: fields.required_text("mission")?,
            voice: fields.required_text("voice")?,
            audience: fields.required_text("audience")?,
            vibe: fields.required_text("vibe")?,
            value_prop: fields.required_text("valueProp")?,
            keywords: fields.required_text("keywords")?,
            platforms: fields.required_text_list("platforms")?,
            pillars: fields.required_text_list("pillars")?,
        })
    }
}

/// Parameters of a single campaign run
///
/// `primary_platform` and `focus_pillar` need not appear in the persona's
/// lists; generation tolerates the mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRequest {
    /// Campaign objective
    pub objective: String,
    /// Platform carrying the hero asset
    pub primary_platform: String,
    /// Tone direction
    pub tone: String,
    /// Spotlight pillar
    pub focus_pillar: String,
    /// Preferred hero format
    pub format_preference: String,
    /// Call to action
    pub call_to_action: String,
    /// Product or offer name
    pub product: String,
    /// Campaign length in days, `1..=60`
    pub campaign_length: u32,
}

impl CampaignRequest {
    /// Validate arbitrary JSON into a campaign request
    ///
    /// # Errors
    /// Returns the first violated field constraint
    pub fn validate(value: &Value) -> ValidationResult<Self> {
        Self::read(&FieldReader::new(value)?)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn read(fields: &FieldReader<'_>) -> ValidationResult<Self> {
        Ok(Self {
            objective: fields.required_text("objective")?,
            primary_platform: fields.required_text("primaryPlatform")?,
            tone: fields.required_text("tone")?,
            focus_pillar: fields.required_text("focusPillar")?,
            format_preference: fields.required_text("formatPreference")?,
            call_to_action: fields.required_text("callToAction")?,
            product: fields.required_text("product")?,
            // range-checked, so the narrowing cast is exact
            campaign_length: fields.integer(
                "campaignLength",
                i64::from(MIN_CAMPAIGN_DAYS),
                i64::from(MAX_CAMPAIGN_DAYS),
            )? as u32,
        })
    }
}

/// Request envelope: persona plus campaign request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationRequest {
    /// Brand persona
    pub persona: Persona,
    /// Campaign parameters
    pub request: CampaignRequest,
}

impl GenerationRequest {
    /// Validate a `{ "persona": .., "request": .. }` envelope
    ///
    /// Field paths in errors are prefixed (`persona.brandName`).
    ///
    /// # Errors
    /// Returns the first violated field constraint
    pub fn validate(value: &Value) -> ValidationResult<Self> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            persona: Persona::read(&fields.object("persona")?)?,
            request: CampaignRequest::read(&fields.object("request")?)?,
        })
    }

    /// Split into the validated pair
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Persona, CampaignRequest) {
        (self.persona, self.request)
    }
}

/// Validate a raw persona
///
/// # Errors
/// Returns the first violated field constraint
pub fn validate_persona(value: &Value) -> ValidationResult<Persona> {
    Persona::validate(value)
}

/// Validate a raw campaign request
///
/// # Errors
/// Returns the first violated field constraint
pub fn validate_campaign_request(value: &Value) -> ValidationResult<CampaignRequest> {
    CampaignRequest::validate(value)
}

/// Validate both halves of a generation input
///
/// The persona is checked first; its errors carry a `persona.` prefix and
/// request errors a `request.` prefix.
///
/// # Errors
/// Returns the first violated field constraint
pub fn validate_input(
    raw_persona: &Value,
    raw_request: &Value,
) -> ValidationResult<(Persona, CampaignRequest)> {
    let persona = Persona::validate(raw_persona).map_err(|e| e.nested_in("persona"))?;
    let request = CampaignRequest::validate(raw_request).map_err(|e| e.nested_in("request"))?;
    Ok((persona, request))
}

/// Validate a combined `{ persona, request }` envelope
///
/// # Errors
/// Returns the first violated field constraint
pub fn validate_generation_request(value: &Value) -> ValidationResult<GenerationRequest> {
    GenerationRequest::validate(value)
}

impl TryFrom<&Value> for GenerationRequest {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::validate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{JsonKind, ValidationReason};
    use serde_json::json;

    fn persona_json() -> Value {
        json!({
            "brandName": "Loom & Leaf",
            "mission": "Make slow fashion effortless",
            "voice": "Warm and witty",
            "audience": "Urban creatives aged 25-35",
            "vibe": "Earthy, tactile",
            "valueProp": "Capsule wardrobes that last a decade",
            "keywords": "slow fashion, capsule wardrobe, linen",
            "platforms": ["Instagram", "TikTok"],
            "pillars": ["Education", "Behind the scenes"]
        })
    }

    fn request_json() -> Value {
        json!({
            "objective": "Grow the waitlist",
            "primaryPlatform": "Instagram",
            "tone": "Playful",
            "focusPillar": "Education",
            "formatPreference": "Carousel",
            "callToAction": "Join the waitlist",
            "product": "Linen Capsule",
            "campaignLength": 14
        })
    }

    #[test]
    fn persona_valid() {
        let persona = Persona::validate(&persona_json()).unwrap();
        assert_eq!(persona.brand_name, "Loom & Leaf");
        assert_eq!(persona.platforms, vec!["Instagram", "TikTok"]);
    }

    #[test]
    fn persona_reports_first_violation_in_order() {
        let mut raw = persona_json();
        raw["voice"] = json!("   ");
        raw["audience"] = json!("");
        let err = Persona::validate(&raw).unwrap_err();
        assert_eq!(err.field, "voice");
        assert_eq!(err.reason, ValidationReason::Blank);
    }

    #[test]
    fn persona_requires_platforms() {
        let mut raw = persona_json();
        raw["platforms"] = json!([]);
        let err = Persona::validate(&raw).unwrap_err();
        assert_eq!(err.field, "platforms");
        assert_eq!(err.reason, ValidationReason::EmptyList);

        raw.as_object_mut().unwrap().remove("platforms");
        let err = Persona::validate(&raw).unwrap_err();
        assert_eq!(err.reason, ValidationReason::Missing);

        raw["platforms"] = json!("Instagram");
        let err = Persona::validate(&raw).unwrap_err();
        assert_eq!(
            err.reason,
            ValidationReason::WrongType {
                expected: JsonKind::Array
            }
        );
    }

    #[test]
    fn request_campaign_length_bounds() {
        for (length, ok) in [(0, false), (1, true), (60, true), (61, false)] {
            let mut raw = request_json();
            raw["campaignLength"] = json!(length);
            assert_eq!(CampaignRequest::validate(&raw).is_ok(), ok, "length {length}");
        }

        let mut raw = request_json();
        raw["campaignLength"] = json!(7.5);
        let err = CampaignRequest::validate(&raw).unwrap_err();
        assert_eq!(err.reason, ValidationReason::NotInteger);

        raw["campaignLength"] = json!("7");
        let err = CampaignRequest::validate(&raw).unwrap_err();
        assert_eq!(
            err.reason,
            ValidationReason::WrongType {
                expected: JsonKind::Number
            }
        );
    }

    #[test]
    fn request_tolerates_unknown_platform() {
        let mut raw = request_json();
        raw["primaryPlatform"] = json!("Mastodon");
        raw["focusPillar"] = json!("Not a pillar");
        assert!(CampaignRequest::validate(&raw).is_ok());
    }

    #[test]
    fn envelope_prefixes_paths() {
        let mut persona = persona_json();
        persona["mission"] = json!("");
        let err = GenerationRequest::validate(&json!({
            "persona": persona,
            "request": request_json(),
        }))
        .unwrap_err();
        assert_eq!(err.field, "persona.mission");

        let err = GenerationRequest::validate(&json!({ "persona": persona_json() })).unwrap_err();
        assert_eq!(err.field, "request");
        assert_eq!(err.reason, ValidationReason::Missing);
    }

    #[test]
    fn validate_input_pair() {
        let (persona, request) = validate_input(&persona_json(), &request_json()).unwrap();
        assert_eq!(persona.pillars.len(), 2);
        assert_eq!(request.campaign_length, 14);

        let err = validate_input(&persona_json(), &json!({})).unwrap_err();
        assert_eq!(err.field, "request.objective");
    }

    #[test]
    fn serde_uses_wire_names() {
        let persona = Persona::validate(&persona_json()).unwrap();
        let value = serde_json::to_value(&persona).unwrap();
        assert_eq!(value, persona_json());
    }
}
