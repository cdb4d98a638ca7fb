//! HTTP endpoint: `POST /api/generate`
//!
//! Answers with the artifact JSON, or status 400 and a fixed error body
//! when the request cannot be processed. Provider trouble never reaches the
//! client; it is absorbed by the fallback.

use serde_json::json;
use signal_core::CampaignStudio;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

/// Body returned with every 400
pub const GENERATION_ERROR: &str = "Unable to process generation request.";

/// Response header naming the artifact source
pub const SOURCE_HEADER: &str = "x-signal-source";

/// Largest accepted request body
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Route tree for the endpoint
pub fn routes(
    studio: Arc<CampaignStudio>,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    let generate = warp::body::content_length_limit(MAX_BODY_BYTES)
        .and(warp::body::bytes())
        .and(warp::any().map(move || Arc::clone(&studio)))
        .and_then(handle_generate)
        .recover(recover_body)
        .unify();

    warp::post()
        .and(warp::path!("api" / "generate"))
        .and(generate)
}

/// Missing or oversized bodies get the same 400 as invalid input
async fn recover_body(err: Rejection) -> Result<Response, Rejection> {
    if let Some(e) = err.find::<warp::reject::LengthRequired>() {
        return Ok(rejection(e));
    }
    if let Some(e) = err.find::<warp::reject::PayloadTooLarge>() {
        return Ok(rejection(e));
    }
    Err(err)
}

async fn handle_generate(body: Bytes, studio: Arc<CampaignStudio>) -> Result<Response, Infallible> {
    let Ok(text) = std::str::from_utf8(&body) else {
        return Ok(rejection(&"request body is not UTF-8"));
    };

    Ok(match studio.generate_text(text).await {
        Ok(generation) => warp::reply::with_header(
            warp::reply::json(&generation.artifact),
            SOURCE_HEADER,
            generation.source.label(),
        )
        .into_response(),
        Err(e) => rejection(&e),
    })
}

fn rejection(reason: &dyn std::fmt::Display) -> Response {
    tracing::warn!("/api/generate rejected: {}", reason);
    warp::reply::with_status(
        warp::reply::json(&json!({ "error": GENERATION_ERROR })),
        StatusCode::BAD_REQUEST,
    )
    .into_response()
}

/// Serve until the process exits
pub async fn serve(studio: CampaignStudio, addr: SocketAddr) {
    tracing::info!("Listening on http://{}/api/generate", addr);
    warp::serve(routes(Arc::new(studio))).run(addr).await;
}
