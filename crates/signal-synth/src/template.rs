//! Named text templates with explicit interpolation slots
//!
//! Every sentence the synthesizer emits comes from a [`Template`] in this
//! module. Slots are written `{name}` and filled in a single left-to-right
//! pass, so substituted values are never re-scanned for slots.

/// A fixed sentence with `{slot}` placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    name: &'static str,
    text: &'static str,
}

impl Template {
    /// Create template
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }

    /// Template name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw template text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Slot names in order of appearance
    #[must_use]
    pub fn slot_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.text;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else { break };
            names.push(&after[..end]);
            rest = &after[end + 1..];
        }
        names
    }

    /// Fill slots from `slots`
    ///
    /// A slot with no value is left verbatim (`{name}`).
    #[must_use]
    pub fn render(&self, slots: &Slots<'_>) -> String {
        let mut out = String::with_capacity(self.text.len() + 64);
        let mut rest = self.text;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                out.push_str(&rest[start..]);
                return out;
            };
            let key = &after[..end];
            match slots.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(key);
                    out.push('}');
                }
            }
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        out
    }
}

/// Slot values for rendering
#[derive(Debug, Clone, Default)]
pub struct Slots<'a> {
    entries: Vec<(&'static str, &'a str)>,
}

impl<'a> Slots<'a> {
    /// Create empty slot set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set slot value (replaces an existing value)
    #[must_use]
    pub fn set(mut self, name: &'static str, value: &'a str) -> Self {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Look up slot value
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }
}

/// Angle of a platform variation, keyed by variation index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariationAngle {
    /// First variation
    Proof,
    /// Second variation
    Story,
    /// Third and later variations
    Action,
}

impl VariationAngle {
    /// Angle for 0-based variation index
    #[inline]
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => Self::Proof,
            1 => Self::Story,
            _ => Self::Action,
        }
    }

    /// Display label
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proof => "Proof",
            Self::Story => "Story",
            Self::Action => "Action",
        }
    }
}

/// Platform → calendar format lookup (exact, case-sensitive names)
pub const PLATFORM_FORMATS: [(&str, &str); 3] = [
    ("LinkedIn", "Long-form post"),
    ("TikTok", "Vertical video"),
    ("Instagram", "Carousel"),
];

/// Format for platforms missing from [`PLATFORM_FORMATS`]
pub const DEFAULT_FORMAT: &str = "Story post";

/// Calendar format for a platform
#[must_use]
pub fn format_for_platform(platform: &str) -> &'static str {
    PLATFORM_FORMATS
        .iter()
        .find(|(name, _)| *name == platform)
        .map_or(DEFAULT_FORMAT, |(_, format)| *format)
}

pub const STATEMENT: Template = Template::new(
    "statement",
    "{brand} campaign ready. Hero asset anchors on {primary_platform} with {format}. \
     Variations mapped to {platforms} keeping {tone}.",
);

pub const HEADLINE: Template = Template::new("headline", "{product} launch for {brand}");

pub const HERO_CAPTION: Template = Template::new(
    "hero_caption",
    "Opening hook about {focus_pillar} pain → teach key shift → spotlight {product} → \
     invite to {cta}. Maintain {tone} voice that matches {voice}.",
);

pub const VISUAL_DIRECTION: Template = Template::new(
    "visual_direction",
    "Design a {format} featuring {vibe} aesthetic. Include bold typography and proof moments.",
);

pub const VARIATION_CAPTION: Template = Template::new(
    "variation_caption",
    "Hook: {product} for {audience} -> show {pillar_lower} angle. CTA: {cta}",
);

pub const CALENDAR_HOOK: Template =
    Template::new("calendar_hook", "{pillar} · {product} insight for {audience_word}");

pub const CALENDAR_BRIEF: Template = Template::new(
    "calendar_brief",
    "Expand on {pillar_lower} with {tone} tone and push {cta_lower}.",
);

pub const PLAYBOOK_BEFORE: [Template; 3] = [
    Template::new(
        "playbook_before_teaser",
        "Warm audience via teaser story highlighting the problem.",
    ),
    Template::new(
        "playbook_before_partners",
        "Queue partner shoutouts requesting co-distribution.",
    ),
    Template::new(
        "playbook_before_waitlist",
        "Publish waitlist reminder with {product} sneak peek.",
    ),
];

pub const PLAYBOOK_DURING: [Template; 3] = [
    Template::new(
        "playbook_during_live",
        "Host live Q&A on {primary_platform} diving into the {focus_pillar} angle.",
    ),
    Template::new(
        "playbook_during_pin",
        "Pin hero post and reply to top comments with micro-case studies.",
    ),
    Template::new(
        "playbook_during_nudge",
        "Trigger email + SMS nudge referencing social proof quotes.",
    ),
];

pub const PLAYBOOK_AFTER: [Template; 3] = [
    Template::new(
        "playbook_after_recap",
        "Share analytics recap carousel showing momentum.",
    ),
    Template::new(
        "playbook_after_clips",
        "Clip best moments into 30s highlight reel for TikTok/YT Shorts.",
    ),
    Template::new(
        "playbook_after_testimonials",
        "Collect testimonials and roll into nurture sequence.",
    ),
];

/// KPI row: literal name plus templated target and rationale
#[derive(Debug, Clone, Copy)]
pub struct MetricTemplate {
    pub kpi: &'static str,
    pub target: Template,
    pub rationale: Template,
}

pub const METRICS: [MetricTemplate; 3] = [
    MetricTemplate {
        kpi: "Hero post saves",
        target: Template::new(
            "metric_saves_target",
            "3% save rate on the {product} launch carousel",
        ),
        rationale: Template::new(
            "metric_saves_rationale",
            "Signals educational resonance for top-of-funnel growth toward {objective}.",
        ),
    },
    MetricTemplate {
        kpi: "Waitlist conversions",
        target: Template::new(
            "metric_waitlist_target",
            "15% of warm audience joins the {product} waitlist",
        ),
        rationale: Template::new(
            "metric_waitlist_rationale",
            "Primary CTA measuring launch effectiveness against {objective}.",
        ),
    },
    MetricTemplate {
        kpi: "Cross-channel completion",
        target: Template::new(
            "metric_completion_target",
            "Publish 5/6 recommended touchpoints",
        ),
        rationale: Template::new(
            "metric_completion_rationale",
            "Ensures omni-channel sequencing for {product} stays on track.",
        ),
    },
];

/// Every template the synthesizer renders
#[must_use]
pub fn all_templates() -> Vec<Template> {
    let mut templates = vec![
        STATEMENT,
        HEADLINE,
        HERO_CAPTION,
        VISUAL_DIRECTION,
        VARIATION_CAPTION,
        CALENDAR_HOOK,
        CALENDAR_BRIEF,
    ];
    templates.extend(PLAYBOOK_BEFORE);
    templates.extend(PLAYBOOK_DURING);
    templates.extend(PLAYBOOK_AFTER);
    for metric in METRICS {
        templates.push(metric.target);
        templates.push(metric.rationale);
    }
    templates
}
