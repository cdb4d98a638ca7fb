//! Validate-or-fallback guarantees, end to end.

use async_trait::async_trait;
use mockall::mock;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;
use signal_core::{
    reconcile, reconcile_with_outcome, ArtifactSource, CampaignStudio, CompletionRequest,
    GeneratorConfig, ProviderError, ReconcileOutcome, StudioError, TextProvider,
};
use signal_synth::synthesize;
use signal_test_utils::{
    arb_persona, arb_request, candidate_artifact, candidate_json, generation_json,
    sample_persona, sample_request,
};
use std::sync::Arc;

mock! {
    pub Provider {}

    #[async_trait]
    impl TextProvider for Provider {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError>;
    }
}

fn studio_with(provider: MockProvider) -> CampaignStudio {
    CampaignStudio::new(GeneratorConfig::new().with_api_key("sk-test"))
        .with_provider(Arc::new(provider))
}

fn replying(text: String) -> MockProvider {
    let mut provider = MockProvider::new();
    provider
        .expect_complete()
        .times(1)
        .returning(move |_| Ok(text.clone()));
    provider
}

proptest! {
    #[test]
    fn prop_non_json_text_yields_fallback(text in "[^\\[{\"0-9tfn -].{0,40}") {
        let fallback = synthesize(&sample_persona(), &sample_request());
        prop_assert_eq!(reconcile(Some(text.as_str()), fallback.clone()), fallback);
    }

    #[test]
    fn prop_fallback_survives_reconcile(persona in arb_persona(), request in arb_request()) {
        let fallback = synthesize(&persona, &request);
        let text = serde_json::to_string(&fallback).unwrap();
        let result = reconcile_with_outcome(Some(text.as_str()), fallback.clone());
        prop_assert!(result.outcome.is_accepted());
        prop_assert_eq!(result.artifact, fallback);
    }
}

#[test]
fn test_structurally_broken_candidates_yield_fallback() {
    let fallback = synthesize(&sample_persona(), &sample_request());

    let mut missing_key = candidate_json();
    missing_key.as_object_mut().unwrap().remove("playbook");
    let mut no_variations = candidate_json();
    no_variations["post"]["variations"] = json!([]);
    let mut negative_offset = candidate_json();
    negative_offset["calendar"][1]["dayOffset"] = json!(-1);

    let missing_key = missing_key.to_string();
    let no_variations = no_variations.to_string();
    let negative_offset = negative_offset.to_string();

    let cases: [(&str, &str); 7] = [
        ("{\"statement\": ", "parse-failed"),
        ("[]", "schema-invalid"),
        ("42", "schema-invalid"),
        ("null", "schema-invalid"),
        (&missing_key, "schema-invalid"),
        (&no_variations, "schema-invalid"),
        (&negative_offset, "schema-invalid"),
    ];
    for (text, label) in cases {
        let result = reconcile_with_outcome(Some(text), fallback.clone());
        assert_eq!(result.outcome.label(), label, "candidate: {text}");
        assert_eq!(result.artifact, fallback);
    }
}

#[test]
fn test_negative_offset_names_the_row() {
    let mut raw = candidate_json();
    raw["calendar"][1]["dayOffset"] = json!(-1);
    let fallback = synthesize(&sample_persona(), &sample_request());

    let result = reconcile_with_outcome(Some(raw.to_string().as_str()), fallback);
    let ReconcileOutcome::SchemaInvalid(error) = result.outcome else {
        panic!("expected schema failure");
    };
    assert_eq!(error.field, "calendar[1].dayOffset");
}

#[test]
fn test_large_day_offset_passes_through() {
    let mut raw = candidate_json();
    raw["calendar"][1]["dayOffset"] = json!(5_000_000_000_u64);
    let fallback = synthesize(&sample_persona(), &sample_request());

    let result = reconcile_with_outcome(Some(raw.to_string().as_str()), fallback);
    assert_eq!(result.outcome, ReconcileOutcome::Accepted);
    assert_eq!(result.artifact.calendar[1].day_offset, 5_000_000_000);
}

#[tokio::test]
async fn test_studio_passes_candidate_through() {
    let studio = studio_with(replying(candidate_json().to_string()));
    let generation = studio.generate(&generation_json()).await.unwrap();

    assert_eq!(generation.source, ArtifactSource::Provider);
    assert_eq!(generation.artifact, candidate_artifact());
}

#[tokio::test]
async fn test_studio_falls_back_on_prose() {
    let studio = studio_with(replying("I could not produce JSON today.".to_string()));
    let generation = studio.generate(&generation_json()).await.unwrap();

    assert!(matches!(
        generation.source,
        ArtifactSource::Fallback(ReconcileOutcome::ParseFailed(_))
    ));
    assert_eq!(
        generation.artifact,
        synthesize(&sample_persona(), &sample_request())
    );
}

#[tokio::test]
async fn test_studio_sends_compiled_prompt_with_config() {
    let mut provider = MockProvider::new();
    provider
        .expect_complete()
        .withf(|request| {
            request.model == "gpt-4.1-mini"
                && request.max_output_tokens == 1200
                && request.prompt.contains("Campaign duration: 14 days")
        })
        .times(1)
        .returning(|_| Ok(String::new()));

    let config = GeneratorConfig::new()
        .with_api_key("sk-test")
        .with_model("gpt-4.1-mini");
    let studio = CampaignStudio::new(config).with_provider(Arc::new(provider));

    let generation = studio.generate(&generation_json()).await.unwrap();
    assert_eq!(
        generation.source,
        ArtifactSource::Fallback(ReconcileOutcome::NoCandidate)
    );
}

#[tokio::test]
async fn test_studio_rejects_blank_persona_field() {
    let mut raw = generation_json();
    raw["persona"]["brandName"] = json!("   ");

    let err = CampaignStudio::default().generate(&raw).await.unwrap_err();
    assert!(matches!(err, StudioError::InputValidation(_)));
    assert_eq!(err.field(), Some("persona.brandName"));
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("signal.toml");
    std::fs::write(&path, "model = \"gpt-4o\"\nmax_output_tokens = 800\n").unwrap();

    let config = GeneratorConfig::from_file(&path).unwrap();
    assert_eq!(config.model, "gpt-4o");
    assert_eq!(config.max_output_tokens, 800);
    assert!(GeneratorConfig::from_file(dir.path().join("missing.toml")).is_err());
}
