//! Subcommand implementations
//!
//! Each command takes already-read input text and returns the text to print,
//! so the binary only handles IO and exit codes.

use anyhow::{Context, Result};
use serde_json::Value;
use signal_contract::{artifact_schema, request_schema, validate_artifact, GenerationRequest};
use signal_core::{CampaignStudio, GeneratorConfig};
use signal_provider::OpenAiProvider;
use signal_synth::compile_prompt;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Read a file, or stdin for `-`
///
/// # Errors
/// Fails when the source cannot be read
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn parse_json(text: &str) -> Result<Value> {
    serde_json::from_str(text).context("input is not valid JSON")
}

fn parse_request(text: &str) -> Result<GenerationRequest> {
    let value = parse_json(text)?;
    Ok(GenerationRequest::validate(&value)?)
}

/// Studio for `config`, with the HTTP provider attached when a key is set
///
/// # Errors
/// Fails when the HTTP client cannot be built
pub fn build_studio(config: GeneratorConfig) -> Result<CampaignStudio> {
    if !config.is_configured() {
        tracing::info!("No API key configured, generations are synthesized locally");
        return Ok(CampaignStudio::new(config));
    }
    let provider = OpenAiProvider::from_config(&config).context("failed to build provider")?;
    tracing::info!("Using provider at {}", provider.endpoint());
    Ok(CampaignStudio::new(config).with_provider(Arc::new(provider)))
}

/// Load configuration for `generate`/`serve`
///
/// # Errors
/// Fails when the config file is unreadable or invalid
pub fn load_config(path: Option<&Path>, offline: bool) -> Result<GeneratorConfig> {
    let config = GeneratorConfig::load(path)?;
    Ok(if offline { config.without_api_key() } else { config })
}

/// `generate`: artifact JSON
///
/// # Errors
/// Fails on malformed or invalid input
pub async fn generate(studio: &CampaignStudio, input: &str) -> Result<String> {
    let generation = studio.generate(&parse_json(input)?).await?;
    tracing::info!(
        id = %generation.id,
        source = generation.source.label(),
        "artifact ready"
    );
    Ok(serde_json::to_string_pretty(&generation.artifact)?)
}

/// `prompt`: compiled provider instruction
///
/// # Errors
/// Fails on malformed or invalid input
pub fn prompt(input: &str) -> Result<String> {
    let (persona, request) = parse_request(input)?.into_parts();
    Ok(compile_prompt(&persona, &request))
}

/// `validate`: one-line verdict for a request or a candidate artifact
///
/// # Errors
/// Fails with the first violated field
pub fn validate(input: &str, artifact: bool) -> Result<String> {
    if artifact {
        let artifact = validate_artifact(&parse_json(input)?)?;
        return Ok(format!(
            "valid artifact: {} variations, {} calendar entries",
            artifact.post.variations.len(),
            artifact.calendar.len()
        ));
    }
    let request = parse_request(input)?;
    Ok(format!(
        "valid request: {} on {} for {} days",
        request.persona.brand_name, request.request.primary_platform, request.request.campaign_length
    ))
}

/// `schema`: JSON schema of the artifact (or request) contract
///
/// # Errors
/// Fails only if the schema cannot be serialized
pub fn schema(request: bool) -> Result<String> {
    let schema = if request {
        request_schema()
    } else {
        artifact_schema()
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}
