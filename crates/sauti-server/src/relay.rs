//! Relay of synthesis results to the downstream caller
//!
//! Buffered results go out as a single all-or-nothing body. Streams are
//! pumped chunk by chunk in arrival order, headers first, without buffering
//! the payload.

use axum::body::Body;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use futures::TryStreamExt;
use sauti_core::SynthesisResult;
use tracing::error;

/// Content type shared by both response modes
pub const AUDIO_CONTENT_TYPE: &str = "audio/wav";

/// Download disposition shared by both response modes
pub const AUDIO_DISPOSITION: &str = "attachment; filename=speech.wav";

/// Emit a synthesis result to the caller.
///
/// For a stream, the status line and headers are written before the first
/// chunk. If the upstream fails after that point there is no status code
/// left to send; the connection is cut short and the failure is visible
/// only in the log and as a truncated body.
pub fn respond(result: SynthesisResult) -> Response {
    let headers = [
        (header::CONTENT_TYPE, AUDIO_CONTENT_TYPE),
        (header::CONTENT_DISPOSITION, AUDIO_DISPOSITION),
    ];

    match result {
        SynthesisResult::Complete(wav) => (headers, wav).into_response(),
        SynthesisResult::Stream(stream) => {
            let body = Body::from_stream(
                stream.inspect_err(|err| error!("Audio stream aborted mid-relay: {err}")),
            );
            (headers, body).into_response()
        }
    }
}
