//! Prompt compilation for the external text provider
//!
//! [`compile_prompt`] is pure: the same persona and request always yield the
//! same instruction text. Every input field appears in the output, and the
//! keyword list is normalized with the same rule the synthesizer uses.

use crate::keywords::{normalize_keywords, MAX_HASHTAGS};
use crate::template::{Slots, Template};
use signal_contract::{CampaignRequest, Persona};

/// Output contract described to the provider
pub const OUTPUT_SHAPE: &str = r#"{
  "statement": string;
  "post": {
    "headline": string;
    "caption": string;
    "hashtags": string[];
    "visualDirection": string;
    "callToAction": string;
    "variations": {
      "platform": string;
      "angle": string;
      "caption": string;
    }[];
  };
  "calendar": {
    "dayOffset": number;
    "platform": string;
    "pillar": string;
    "format": string;
    "hook": string;
    "brief": string;
  }[];
  "playbook": {
    "before": string[];
    "during": string[];
    "after": string[];
  };
  "metrics": {
    "kpi": string;
    "target": string;
    "rationale": string;
  }[];
}"#;

const PROMPT: Template = Template::new(
    "prompt",
    r#"You are "Signal Thread", an elite social media marketing strategist that thinks in omnichannel launch systems.
Your job is to translate the brand briefing and campaign objective into:
1. A hero post blueprint for the primary platform
2. Derivative variations for up to 3 other platforms (at least one variation is required)
3. A sequenced publishing calendar across selected channels, with non-negative integer dayOffset values
4. Engagement choreography outlining community touchpoints
5. KPI guardrails with targets and rationale

Respond with a single JSON object and nothing else: no commentary, no markdown, no code fences.
The JSON must follow this TypeScript shape:
{shape}

Persona summary:
- Brand name: {brand}
- Mission: {mission}
- Voice: {voice}
- Audience: {audience}
- Value proposition: {value_prop}
- Descriptors: {vibe}
- Content pillars: {pillars}
- Preferred platforms: {platforms}
- Keyword anchors: {keywords}

Campaign briefing:
- Objective: {objective}
- Product or offer: {product}
- Primary platform: {primary_platform}
- Preferred format: {format}
- Tone direction: {tone}
- Spotlight pillar: {focus_pillar}
- Call to action: {cta}
- Campaign duration: {campaign_length} days

Think in narrative arcs, respect the brand voice, and design staggered channel sequencing inside the calendar array."#,
);

const KEYWORD_CLOSING: Template = Template::new(
    "prompt_keywords",
    "Include {hero_keywords} across captions and hashtags where relevant.",
);

/// Compile the provider instruction for a persona/request pair
#[must_use]
pub fn compile_prompt(persona: &Persona, request: &CampaignRequest) -> String {
    let keywords = normalize_keywords(&persona.keywords);
    let keyword_list = keywords.join(", ");
    let hero_keywords = keywords
        .iter()
        .take(MAX_HASHTAGS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let pillars = persona.pillars.join(", ");
    let platforms = persona.platforms.join(", ");
    let campaign_length = request.campaign_length.to_string();

    let slots = Slots::new()
        .set("shape", OUTPUT_SHAPE)
        .set("brand", &persona.brand_name)
        .set("mission", &persona.mission)
        .set("voice", &persona.voice)
        .set("audience", &persona.audience)
        .set("value_prop", &persona.value_prop)
        .set("vibe", &persona.vibe)
        .set("pillars", &pillars)
        .set("platforms", &platforms)
        .set("keywords", &keyword_list)
        .set("objective", &request.objective)
        .set("product", &request.product)
        .set("primary_platform", &request.primary_platform)
        .set("format", &request.format_preference)
        .set("tone", &request.tone)
        .set("focus_pillar", &request.focus_pillar)
        .set("cta", &request.call_to_action)
        .set("campaign_length", &campaign_length)
        .set("hero_keywords", &hero_keywords);

    let mut prompt = PROMPT.render(&slots);
    if !keywords.is_empty() {
        prompt.push(' ');
        prompt.push_str(&KEYWORD_CLOSING.render(&slots));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona(keywords: &str) -> Persona {
        Persona {
            brand_name: "Loom & Leaf".to_string(),
            mission: "Make slow fashion effortless".to_string(),
            voice: "Warm and witty".to_string(),
            audience: "Urban creatives".to_string(),
            vibe: "Earthy, tactile".to_string(),
            value_prop: "Capsules that last".to_string(),
            keywords: keywords.to_string(),
            platforms: vec!["Instagram".to_string(), "TikTok".to_string()],
            pillars: vec!["Education".to_string(), "Community".to_string()],
        }
    }

    fn request() -> CampaignRequest {
        CampaignRequest {
            objective: "Grow the waitlist".to_string(),
            primary_platform: "Instagram".to_string(),
            tone: "Playful".to_string(),
            focus_pillar: "Education".to_string(),
            format_preference: "Carousel".to_string(),
            call_to_action: "Join the waitlist".to_string(),
            product: "Linen Capsule".to_string(),
            campaign_length: 14,
        }
    }

    #[test]
    fn prompt_embeds_every_field() {
        let p = persona("slow fashion, linen");
        let r = request();
        let prompt = compile_prompt(&p, &r);

        for field in [
            &p.brand_name,
            &p.mission,
            &p.voice,
            &p.audience,
            &p.vibe,
            &p.value_prop,
            &r.objective,
            &r.primary_platform,
            &r.tone,
            &r.focus_pillar,
            &r.format_preference,
            &r.call_to_action,
            &r.product,
        ] {
            assert!(prompt.contains(field.as_str()), "missing {field}");
        }
        assert!(prompt.contains("Content pillars: Education, Community"));
        assert!(prompt.contains("Preferred platforms: Instagram, TikTok"));
        assert!(prompt.contains("Campaign duration: 14 days"));
        assert!(prompt.contains("\"dayOffset\": number;"));
    }

    #[test]
    fn prompt_uses_normalized_keywords() {
        let prompt = compile_prompt(&persona(" slow fashion ,, linen, "), &request());
        assert!(prompt.contains("Keyword anchors: slow fashion, linen\n"));
        assert!(prompt.ends_with("Include slow fashion, linen across captions and hashtags where relevant."));
    }

    #[test]
    fn prompt_without_keywords_omits_closing() {
        let prompt = compile_prompt(&persona(" , "), &request());
        assert!(prompt.contains("Keyword anchors: \n"));
        assert!(!prompt.contains("Include "));
    }

    #[test]
    fn prompt_is_deterministic() {
        let p = persona("a, b");
        assert_eq!(compile_prompt(&p, &request()), compile_prompt(&p, &request()));
    }

    #[test]
    fn prompt_does_not_expand_braces_in_input() {
        let mut p = persona("a");
        p.brand_name = "{mission}".to_string();
        let prompt = compile_prompt(&p, &request());
        assert!(prompt.contains("- Brand name: {mission}\n"));
    }
}
