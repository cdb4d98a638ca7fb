//! Deterministic campaign synthesis
//!
//! [`synthesize`] derives a complete, contract-conformant
//! [`GeneratedArtifact`] from a persona and campaign request using only
//! string and arithmetic rules. It is total: every list access goes through
//! modulo or clamping, so even single-entry (or empty) lists produce a full
//! artifact. Identical input always yields identical output.

use crate::calendar::{CalendarBounds, MAX_CALENDAR_ROWS, PILLARS_PER_PLATFORM};
use crate::keywords::{hero_hashtags, normalize_keywords};
use crate::template::{
    format_for_platform, Slots, VariationAngle, CALENDAR_BRIEF, CALENDAR_HOOK, HEADLINE,
    HERO_CAPTION, METRICS, PLAYBOOK_AFTER, PLAYBOOK_BEFORE, PLAYBOOK_DURING, STATEMENT,
    Template, VARIATION_CAPTION, VISUAL_DIRECTION,
};
use signal_contract::{
    CalendarEntry, CampaignRequest, GeneratedArtifact, HeroPost, Metric, Persona, Playbook,
    Variation,
};

/// Pillar used when the persona lists none
pub const FALLBACK_PILLAR: &str = "Updates";

/// Platform used when neither persona nor request names one
pub const FALLBACK_PLATFORM: &str = "Instagram";

/// Upper bound on platform variations
pub const MAX_VARIATIONS: usize = 3;

/// Word used in calendar hooks when the audience has no words
const FALLBACK_AUDIENCE_WORD: &str = "audience";

/// Platform and pillar lists with empty inputs replaced by defaults
///
/// # Invariants
/// - `platforms` and `pillars` are never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveLists<'a> {
    pub platforms: Vec<&'a str>,
    pub pillars: Vec<&'a str>,
}

impl<'a> EffectiveLists<'a> {
    /// Resolve effective lists for a persona/request pair
    #[must_use]
    pub fn new(persona: &'a Persona, request: &'a CampaignRequest) -> Self {
        let pillars = if persona.pillars.is_empty() {
            vec![FALLBACK_PILLAR]
        } else {
            persona.pillars.iter().map(String::as_str).collect()
        };
        let platforms = if persona.platforms.is_empty() {
            if request.primary_platform.trim().is_empty() {
                vec![FALLBACK_PLATFORM]
            } else {
                vec![request.primary_platform.as_str()]
            }
        } else {
            persona.platforms.iter().map(String::as_str).collect()
        };
        Self { platforms, pillars }
    }

    /// Pillar for an index, wrapping around the list
    #[inline]
    #[must_use]
    pub fn pillar_at(&self, index: usize) -> &'a str {
        self.pillars[index % self.pillars.len()]
    }

    /// Variation platform pool: every platform except `primary`, or the full
    /// list when that exclusion leaves nothing
    #[must_use]
    pub fn variation_platforms(&self, primary: &str) -> Vec<&'a str> {
        let rest: Vec<&'a str> = self
            .platforms
            .iter()
            .copied()
            .filter(|platform| *platform != primary)
            .collect();
        if rest.is_empty() {
            self.platforms.clone()
        } else {
            rest
        }
    }
}

/// Lower-cased and joined values shared by several templates
#[derive(Debug)]
struct DerivedText<'a> {
    format: String,
    tone: String,
    focus_pillar: String,
    voice: String,
    vibe: String,
    cta_lower: String,
    objective: String,
    platforms: String,
    audience_word: &'a str,
}

impl<'a> DerivedText<'a> {
    fn new(persona: &'a Persona, request: &CampaignRequest, lists: &EffectiveLists<'_>) -> Self {
        Self {
            format: request.format_preference.to_lowercase(),
            tone: request.tone.to_lowercase(),
            focus_pillar: request.focus_pillar.to_lowercase(),
            voice: persona.voice.to_lowercase(),
            vibe: persona.vibe.to_lowercase(),
            cta_lower: request.call_to_action.to_lowercase(),
            objective: request.objective.to_lowercase(),
            platforms: lists.platforms.join(", "),
            audience_word: persona
                .audience
                .split_whitespace()
                .next()
                .unwrap_or(FALLBACK_AUDIENCE_WORD),
        }
    }

    fn slots<'s>(&'s self, persona: &'s Persona, request: &'s CampaignRequest) -> Slots<'s> {
        Slots::new()
            .set("brand", &persona.brand_name)
            .set("audience", &persona.audience)
            .set("audience_word", self.audience_word)
            .set("voice", &self.voice)
            .set("vibe", &self.vibe)
            .set("platforms", &self.platforms)
            .set("primary_platform", &request.primary_platform)
            .set("product", &request.product)
            .set("cta", &request.call_to_action)
            .set("cta_lower", &self.cta_lower)
            .set("format", &self.format)
            .set("tone", &self.tone)
            .set("focus_pillar", &self.focus_pillar)
            .set("objective", &self.objective)
    }
}

/// Synthesize a complete artifact from validated input
///
/// Never fails and uses no randomness or external calls.
#[must_use]
pub fn synthesize(persona: &Persona, request: &CampaignRequest) -> GeneratedArtifact {
    let keywords = normalize_keywords(&persona.keywords);
    let lists = EffectiveLists::new(persona, request);
    let derived = DerivedText::new(persona, request, &lists);
    let slots = derived.slots(persona, request);

    let bounds = CalendarBounds::new(request.campaign_length, lists.platforms.len());
    tracing::debug!(
        total_days = bounds.total_days,
        cadence = bounds.cadence,
        platforms = lists.platforms.len(),
        pillars = lists.pillars.len(),
        "derived calendar bounds"
    );

    GeneratedArtifact {
        statement: STATEMENT.render(&slots),
        post: HeroPost {
            headline: HEADLINE.render(&slots),
            caption: HERO_CAPTION.render(&slots),
            hashtags: hero_hashtags(&keywords),
            visual_direction: VISUAL_DIRECTION.render(&slots),
            call_to_action: request.call_to_action.clone(),
            variations: build_variations(&lists, &request.primary_platform, &slots),
        },
        calendar: build_calendar(&lists, bounds, &slots),
        playbook: Playbook {
            before: render_all(&PLAYBOOK_BEFORE, &slots),
            during: render_all(&PLAYBOOK_DURING, &slots),
            after: render_all(&PLAYBOOK_AFTER, &slots),
        },
        metrics: METRICS
            .iter()
            .map(|metric| Metric {
                kpi: metric.kpi.to_string(),
                target: metric.target.render(&slots),
                rationale: metric.rationale.render(&slots),
            })
            .collect(),
    }
}

fn build_variations(
    lists: &EffectiveLists<'_>,
    primary_platform: &str,
    slots: &Slots<'_>,
) -> Vec<Variation> {
    lists
        .variation_platforms(primary_platform)
        .into_iter()
        .take(MAX_VARIATIONS)
        .enumerate()
        .map(|(index, platform)| {
            let pillar = lists.pillar_at(index).to_lowercase();
            let row = slots.clone().set("pillar_lower", &pillar);
            Variation {
                platform: platform.to_string(),
                angle: VariationAngle::for_index(index).as_str().to_string(),
                caption: VARIATION_CAPTION.render(&row),
            }
        })
        .collect()
}

fn build_calendar(
    lists: &EffectiveLists<'_>,
    bounds: CalendarBounds,
    slots: &Slots<'_>,
) -> Vec<CalendarEntry> {
    lists
        .platforms
        .iter()
        .enumerate()
        .flat_map(|(platform_index, platform)| {
            lists
                .pillars
                .iter()
                .take(PILLARS_PER_PLATFORM)
                .enumerate()
                .map(move |(pillar_index, pillar)| (platform_index, *platform, pillar_index, *pillar))
        })
        .take(MAX_CALENDAR_ROWS)
        .map(|(platform_index, platform, pillar_index, pillar)| {
            let pillar_lower = pillar.to_lowercase();
            let row = slots
                .clone()
                .set("pillar", pillar)
                .set("pillar_lower", &pillar_lower);
            CalendarEntry {
                day_offset: u64::from(bounds.day_offset(platform_index, pillar_index)),
                platform: platform.to_string(),
                pillar: pillar.to_string(),
                format: format_for_platform(platform).to_string(),
                hook: CALENDAR_HOOK.render(&row),
                brief: CALENDAR_BRIEF.render(&row),
            }
        })
        .collect()
}

fn render_all(templates: &[Template], slots: &Slots<'_>) -> Vec<String> {
    templates.iter().map(|template| template.render(slots)).collect()
}
