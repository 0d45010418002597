//! Sauti Core - provider-facing half of the voice gateway
//!
//! This crate owns everything between the HTTP surface and the upstream
//! text-to-speech provider:
//! - an outbound synthesis client (buffered and streaming modes)
//! - the chunk stream abstraction the streaming relay pumps from
//! - PCM-to-WAV framing for buffered responses
//! - the error taxonomy the server translates into caller-facing statuses
//!
//! # Example
//!
//! ```ignore
//! use sauti_core::{ProviderConfig, SynthesisClient, SynthesisRequest};
//!
//! let client = SynthesisClient::new(ProviderConfig::default())?;
//! let request = SynthesisRequest::new("EXAVITQu4vr4xnSDxMaL", "Hello, world!");
//! let wav = client.synthesize(&request).await?;
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod synth;

pub use config::{GatewayConfig, ProviderConfig, ServerConfig};
pub use error::{Error, Result};
pub use synth::{
    AudioStream, SynthesisClient, SynthesisRequest, SynthesisResult, MAX_CHUNK_BYTES,
};
