//! Testing utilities for the Signal Thread workspace
//!
//! Shared fixtures, raw JSON payloads and proptest strategies.

#![allow(missing_docs)]

use proptest::prelude::*;
use serde_json::{json, Value};
use signal_contract::{CampaignRequest, GeneratedArtifact, Persona};

pub fn persona_json() -> Value {
    json!({
        "brandName": "Loom & Leaf",
        "mission": "Make slow fashion effortless for busy people",
        "voice": "Warm, witty and candid",
        "audience": "Urban creatives aged 25-35 building intentional wardrobes",
        "vibe": "Earthy, tactile, sunlit",
        "valueProp": "Capsule wardrobes that last a decade",
        "keywords": "slow fashion, capsule wardrobe, linen, natural dyes",
        "platforms": ["Instagram", "TikTok", "LinkedIn"],
        "pillars": ["Education", "Behind the scenes", "Community"]
    })
}

pub fn request_json() -> Value {
    json!({
        "objective": "Grow the launch waitlist",
        "primaryPlatform": "Instagram",
        "tone": "Playful",
        "focusPillar": "Education",
        "formatPreference": "Carousel",
        "callToAction": "Join the waitlist",
        "product": "Linen Capsule",
        "campaignLength": 14
    })
}

/// `{ persona, request }` envelope as posted to the endpoint
pub fn generation_json() -> Value {
    json!({
        "persona": persona_json(),
        "request": request_json(),
    })
}

pub fn sample_persona() -> Persona {
    Persona::validate(&persona_json()).unwrap()
}

pub fn sample_request() -> CampaignRequest {
    CampaignRequest::validate(&request_json()).unwrap()
}

/// One platform, one pillar, primary platform equal to the only platform
pub fn single_channel_input() -> (Persona, CampaignRequest) {
    let mut persona = sample_persona();
    persona.platforms = vec!["Instagram".to_string()];
    persona.pillars = vec!["Education".to_string()];
    let mut request = sample_request();
    request.primary_platform = "Instagram".to_string();
    request.campaign_length = 7;
    (persona, request)
}

/// A schema-valid artifact unlike anything the synthesizer produces
pub fn candidate_json() -> Value {
    json!({
        "statement": "Provider-written launch plan.",
        "post": {
            "headline": "Linen, but make it forever",
            "caption": "Ten years, one capsule.",
            "hashtags": ["linen", "slowfashion"],
            "visualDirection": "Sunlit flat lay",
            "callToAction": "Join the waitlist",
            "variations": [
                {"platform": "TikTok", "angle": "Demo", "caption": "Watch the weave"}
            ]
        },
        "calendar": [
            {"dayOffset": 0, "platform": "Instagram", "pillar": "Education",
             "format": "Carousel", "hook": "Why linen", "brief": "Teach fibre basics"},
            {"dayOffset": 5, "platform": "TikTok", "pillar": "Community",
             "format": "Vertical video", "hook": "Your closet", "brief": "Duet prompts"}
        ],
        "playbook": {
            "before": ["Tease the drop"],
            "during": ["Go live"],
            "after": ["Share recap"]
        },
        "metrics": [
            {"kpi": "Waitlist signups", "target": "2,000", "rationale": "Launch goal"}
        ]
    })
}

pub fn candidate_artifact() -> GeneratedArtifact {
    GeneratedArtifact::validate(&candidate_json()).unwrap()
}

fn arb_text() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 &'-]{0,24}"
}

fn arb_platform() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Instagram".to_string()),
        Just("TikTok".to_string()),
        Just("LinkedIn".to_string()),
        Just("YouTube".to_string()),
        arb_text(),
    ]
}

/// Personas that pass validation
pub fn arb_persona() -> impl Strategy<Value = Persona> {
    (
        (arb_text(), arb_text(), arb_text(), arb_text(), arb_text(), arb_text()),
        "[a-z ,]{1,60}".prop_filter("non-blank", |k| !k.trim().is_empty()),
        prop::collection::vec(arb_platform(), 1..6),
        prop::collection::vec(arb_text(), 1..6),
    )
        .prop_map(
            |((brand_name, mission, voice, audience, vibe, value_prop), keywords, platforms, pillars)| {
                Persona {
                    brand_name,
                    mission,
                    voice,
                    audience,
                    vibe,
                    value_prop,
                    keywords,
                    platforms,
                    pillars,
                }
            },
        )
}

/// Campaign requests that pass validation
pub fn arb_request() -> impl Strategy<Value = CampaignRequest> {
    (
        (arb_text(), arb_platform(), arb_text(), arb_text()),
        (arb_text(), arb_text(), arb_text()),
        1u32..=60,
    )
        .prop_map(
            |(
                (objective, primary_platform, tone, focus_pillar),
                (format_preference, call_to_action, product),
                campaign_length,
            )| CampaignRequest {
                objective,
                primary_platform,
                tone,
                focus_pillar,
                format_preference,
                call_to_action,
                product,
                campaign_length,
            },
        )
}
