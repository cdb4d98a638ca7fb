//! Command and endpoint behavior without a live provider.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use signal_cli::commands;
use signal_cli::server::{routes, GENERATION_ERROR, MAX_BODY_BYTES, SOURCE_HEADER};
use signal_core::{CampaignStudio, GeneratorConfig};
use signal_synth::synthesize;
use signal_test_utils::{candidate_json, generation_json, sample_persona, sample_request};
use std::io::Write;
use std::sync::Arc;
use warp::http::StatusCode;

fn offline_studio() -> CampaignStudio {
    commands::build_studio(GeneratorConfig::new().without_api_key()).unwrap()
}

#[test]
fn test_read_input_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", generation_json()).unwrap();

    let text = commands::read_input(file.path()).unwrap();
    assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), generation_json());

    let dir = tempfile::tempdir().unwrap();
    assert!(commands::read_input(&dir.path().join("absent.json")).is_err());
}

#[test]
fn test_prompt_command() {
    let prompt = commands::prompt(&generation_json().to_string()).unwrap();
    assert!(prompt.contains("- Brand name: Loom & Leaf"));
    assert!(prompt.contains("- Campaign duration: 14 days"));
}

#[test]
fn test_validate_artifact_command() {
    let out = commands::validate(&candidate_json().to_string(), true).unwrap();
    assert_eq!(out, "valid artifact: 1 variations, 2 calendar entries");

    let err = commands::validate("{\"statement\": 3}", true).unwrap_err();
    assert!(err.to_string().contains("statement"));
}

#[test]
fn test_schema_command() {
    let artifact: Value = serde_json::from_str(&commands::schema(false).unwrap()).unwrap();
    assert!(artifact["properties"]["calendar"].is_object());

    let request: Value = serde_json::from_str(&commands::schema(true).unwrap()).unwrap();
    assert!(request["properties"]["persona"].is_object());
}

#[tokio::test]
async fn test_generate_offline_is_synthesized() {
    let out = commands::generate(&offline_studio(), &generation_json().to_string())
        .await
        .unwrap();
    let artifact: Value = serde_json::from_str(&out).unwrap();
    let expected = serde_json::to_value(synthesize(&sample_persona(), &sample_request())).unwrap();
    assert_eq!(artifact, expected);
}

#[tokio::test]
async fn test_endpoint_returns_artifact() {
    let filter = routes(Arc::new(offline_studio()));
    let response = warp::test::request()
        .method("POST")
        .path("/api/generate")
        .body(generation_json().to_string())
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[SOURCE_HEADER], "fallback");
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(
        body,
        serde_json::to_value(synthesize(&sample_persona(), &sample_request())).unwrap()
    );
}

#[tokio::test]
async fn test_endpoint_rejects_bad_input() {
    let filter = routes(Arc::new(offline_studio()));
    let mut invalid = generation_json();
    invalid["request"]["campaignLength"] = json!(90);

    for body in [invalid.to_string(), "{oops".to_string(), "[]".to_string()] {
        let response = warp::test::request()
            .method("POST")
            .path("/api/generate")
            .body(body)
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body, json!({ "error": GENERATION_ERROR }));
    }
}

#[tokio::test]
async fn test_endpoint_rejects_missing_and_oversized_bodies() {
    let filter = routes(Arc::new(offline_studio()));

    let without_length = warp::test::request()
        .method("POST")
        .path("/api/generate")
        .reply(&filter)
        .await;
    let oversized = warp::test::request()
        .method("POST")
        .path("/api/generate")
        .body(vec![b' '; usize::try_from(MAX_BODY_BYTES).unwrap() + 1])
        .reply(&filter)
        .await;

    for response in [without_length, oversized] {
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body, json!({ "error": GENERATION_ERROR }));
    }
}

#[tokio::test]
async fn test_endpoint_only_accepts_post() {
    let filter = routes(Arc::new(offline_studio()));
    let response = warp::test::request()
        .method("GET")
        .path("/api/generate")
        .reply(&filter)
        .await;
    assert_ne!(response.status(), StatusCode::OK);
}
