//! Campaign Studio
//!
//! Sequences one generation:
//! 1. Validate the persona and campaign request
//! 2. Synthesize the fallback artifact
//! 3. Compile the prompt and call the provider once, when configured
//! 4. Reconcile the provider text against the fallback
//!
//! Only step 1 can fail. Provider errors and bad candidates end in the
//! fallback and are logged.

use crate::config::GeneratorConfig;
use crate::error::StudioError;
use crate::provider::{CompletionRequest, TextProvider};
use crate::reconcile::{reconcile_with_outcome, ReconcileOutcome};
use crate::types::{ArtifactSource, Generation};
use serde_json::Value;
use signal_contract::{CampaignRequest, GenerationRequest, Persona};
use signal_synth::{compile_prompt, synthesize};
use std::sync::Arc;

/// Generation front door
#[derive(Clone)]
pub struct CampaignStudio {
    /// Provider settings
    config: GeneratorConfig,
    /// External generator, if any
    provider: Option<Arc<dyn TextProvider>>,
}

impl CampaignStudio {
    /// Create studio without a provider (always synthesizes)
    #[inline]
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            provider: None,
        }
    }

    /// With external provider
    #[inline]
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn TextProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Whether generations will call the provider
    #[inline]
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.provider.is_some() && self.config.is_configured()
    }

    /// Generate from a raw `{ persona, request }` JSON body
    ///
    /// # Errors
    /// Returns [`StudioError::MalformedBody`] when `body` is not JSON
    /// and [`StudioError::InputValidation`] for rejected fields
    pub async fn generate_text(&self, body: &str) -> Result<Generation, StudioError> {
        let value: Value = serde_json::from_str(body)?;
        self.generate(&value).await
    }

    /// Generate from a `{ persona, request }` JSON value
    ///
    /// # Errors
    /// Returns [`StudioError::InputValidation`] naming the offending field
    pub async fn generate(&self, raw: &Value) -> Result<Generation, StudioError> {
        let input = GenerationRequest::validate(raw).map_err(|e| {
            tracing::info!("Rejected generation request: {}", e);
            e
        })?;
        let (persona, request) = input.into_parts();
        Ok(self.generate_input(&persona, &request).await)
    }

    /// Generate from an already validated pair
    pub async fn generate_input(&self, persona: &Persona, request: &CampaignRequest) -> Generation {
        tracing::info!(
            "Generating campaign for {} on {}",
            persona.brand_name,
            request.primary_platform
        );
        let fallback = synthesize(persona, request);

        let provider = match &self.provider {
            Some(provider) if self.config.is_configured() => provider,
            _ => {
                tracing::info!("No provider configured, using synthesized artifact");
                return Generation::new(ArtifactSource::Fallback(ReconcileOutcome::NoCandidate), fallback);
            }
        };

        let completion = CompletionRequest::new(compile_prompt(persona, request), &self.config);
        let candidate = match provider.complete(&completion).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!(transient = e.is_transient(), "Provider unavailable: {}", e);
                None
            }
        };

        let reconciliation = reconcile_with_outcome(candidate.as_deref(), fallback);
        let generation = Generation::new(reconciliation.outcome.into(), reconciliation.artifact);
        tracing::info!(
            "Generation {} completed from {}",
            generation.id,
            generation.source.label()
        );
        generation
    }
}

impl std::fmt::Debug for CampaignStudio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampaignStudio")
            .field("config", &self.config)
            .field("provider", &self.provider.is_some())
            .finish()
    }
}

impl Default for CampaignStudio {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::provider::MockTextProvider;
    use pretty_assertions::assert_eq;
    use signal_test_utils::{candidate_artifact, candidate_json, generation_json, sample_persona, sample_request};

    fn online(provider: MockTextProvider) -> CampaignStudio {
        CampaignStudio::new(GeneratorConfig::new().with_api_key("sk-test"))
            .with_provider(Arc::new(provider))
    }

    #[tokio::test]
    async fn offline_returns_fallback() {
        let studio = CampaignStudio::default();
        assert!(!studio.is_online());

        let generation = studio.generate(&generation_json()).await.unwrap();
        assert_eq!(generation.source, ArtifactSource::Fallback(ReconcileOutcome::NoCandidate));
        assert_eq!(generation.artifact, synthesize(&sample_persona(), &sample_request()));
    }

    #[tokio::test]
    async fn provider_without_key_is_not_called() {
        let mut provider = MockTextProvider::new();
        provider.expect_complete().never();
        let studio = CampaignStudio::default().with_provider(Arc::new(provider));

        let generation = studio.generate(&generation_json()).await.unwrap();
        assert!(generation.is_fallback());
    }

    #[tokio::test]
    async fn valid_candidate_is_returned() {
        let mut provider = MockTextProvider::new();
        provider
            .expect_complete()
            .withf(|request| request.model == "gpt-4o-mini" && request.prompt.contains("Loom & Leaf"))
            .times(1)
            .returning(|_| Ok(candidate_json().to_string()));

        let generation = online(provider).generate(&generation_json()).await.unwrap();
        assert_eq!(generation.source, ArtifactSource::Provider);
        assert_eq!(generation.artifact, candidate_artifact());
    }

    #[tokio::test]
    async fn provider_error_falls_back() {
        let mut provider = MockTextProvider::new();
        provider
            .expect_complete()
            .times(1)
            .returning(|_| Err(ProviderError::Transport("connection reset".into())));

        let generation = online(provider).generate(&generation_json()).await.unwrap();
        assert_eq!(generation.source, ArtifactSource::Fallback(ReconcileOutcome::NoCandidate));
        assert_eq!(generation.artifact, synthesize(&sample_persona(), &sample_request()));
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_provider() {
        let mut provider = MockTextProvider::new();
        provider.expect_complete().never();
        let mut raw = generation_json();
        raw["request"]["campaignLength"] = serde_json::json!(0);

        let err = online(provider).generate(&raw).await.unwrap_err();
        assert_eq!(err.field(), Some("request.campaignLength"));
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let err = CampaignStudio::default().generate_text("{not json").await.unwrap_err();
        assert!(matches!(err, StudioError::MalformedBody(_)));
    }
}
