//! Synthesis request types and validation

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// One text-to-speech request: which voice, what text.
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// Opaque provider voice identifier, e.g. `EXAVITQu4vr4xnSDxMaL`
    pub voice_id: String,
    pub text: String,
}

impl SynthesisRequest {
    pub fn new(voice_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
            text: text.into(),
        }
    }

    /// Both fields must be non-empty before anything goes on the wire.
    pub fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(Error::InvalidRequest("text cannot be empty".to_string()));
        }
        if self.voice_id.is_empty() {
            return Err(Error::InvalidRequest(
                "voice id cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// JSON body sent to the provider's synthesis endpoints
#[derive(Debug, Serialize)]
pub(crate) struct SynthesisPayload<'a> {
    pub text: &'a str,
    pub model_id: &'a str,
    pub voice_settings: Value,
}
