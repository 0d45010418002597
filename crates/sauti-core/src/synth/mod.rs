//! Upstream synthesis client and streaming types

mod client;
mod request;
mod stream;

pub use client::SynthesisClient;
pub use request::SynthesisRequest;
pub use stream::{AudioStream, MAX_CHUNK_BYTES};

use bytes::Bytes;

/// Outcome of a dispatched synthesis call: either a fully buffered audio
/// blob or an incremental chunk sequence, never both.
pub enum SynthesisResult {
    /// Complete WAV-framed audio, emitted as a single body
    Complete(Bytes),
    /// Lazy chunk sequence, relayed downstream as it arrives
    Stream(AudioStream),
}
