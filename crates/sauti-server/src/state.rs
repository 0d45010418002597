//! Application state management

use std::sync::Arc;

use sauti_core::{GatewayConfig, SynthesisClient};

/// Shared application state
///
/// Constructed once at startup and read-only from every handler; requests
/// share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub synth: Arc<SynthesisClient>,
}

impl AppState {
    pub fn new(config: GatewayConfig, synth: SynthesisClient) -> Self {
        Self {
            config: Arc::new(config),
            synth: Arc::new(synth),
        }
    }
}
