//! Text-to-speech endpoints
//!
//! Each request walks the same path: authenticate the caller, validate the
//! body shape, dispatch upstream, relay the result. Auth and validation
//! failures are resolved locally before any outbound call is made.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use sauti_core::{SynthesisRequest, SynthesisResult};

use crate::error::ApiError;
use crate::relay;
use crate::state::AppState;

/// Header callers present the shared secret in
pub const API_KEY_HEADER: &str = "x-api-key";

/// Request body for both synthesis endpoints
#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    pub text: String,
}

/// Compare the caller's credential header against the configured secret.
/// An absent header counts as a mismatch.
fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let presented = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    if presented != Some(state.config.server.api_secret.as_str()) {
        return Err(ApiError::unauthorized("Invalid API Key"));
    }
    Ok(())
}

/// Unpack the JSON body, translating axum's rejection into the gateway's
/// error shape.
fn parse_body(body: Result<Json<TtsRequest>, JsonRejection>) -> Result<TtsRequest, ApiError> {
    match body {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => Err(ApiError::unprocessable(rejection.body_text())),
    }
}

/// `POST /tts/:voice` — buffered synthesis.
///
/// The whole WAV blob is in hand before the 200 goes out, so the response
/// is all-or-nothing.
pub async fn synthesize(
    State(state): State<AppState>,
    Path(voice): Path<String>,
    headers: HeaderMap,
    body: Result<Json<TtsRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    authorize(&state, &headers)?;
    let body = parse_body(body)?;

    let request_id = Uuid::new_v4();
    info!(%request_id, "Processing TTS for voice {}", voice);

    let request = SynthesisRequest::new(voice, body.text);
    let wav = state.synth.synthesize(&request).await.map_err(|err| {
        error!(%request_id, "Synthesis failed: {err}");
        ApiError::from(err)
    })?;

    Ok(relay::respond(SynthesisResult::Complete(wav)))
}

/// `POST /stream-tts/:voice` — streaming synthesis.
///
/// Upstream failures are resolved here, before the response starts, so they
/// still map to a proper error status. Once the stream is handed to the
/// relay, a later failure can only cut the connection short.
pub async fn synthesize_stream(
    State(state): State<AppState>,
    Path(voice): Path<String>,
    headers: HeaderMap,
    body: Result<Json<TtsRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    authorize(&state, &headers)?;
    let body = parse_body(body)?;

    let request_id = Uuid::new_v4();
    info!(%request_id, "Starting streaming TTS for voice {}", voice);

    let request = SynthesisRequest::new(voice, body.text);
    let stream = state.synth.synthesize_stream(&request).await.map_err(|err| {
        error!(%request_id, "Streaming synthesis failed: {err}");
        ApiError::from(err)
    })?;

    Ok(relay::respond(SynthesisResult::Stream(stream)))
}
